use crate::error::{ComplexityError, Result};
use crate::lz::{lz_complexity, random_lz_complexity};
use crate::ppm::{compressed_bits, PpmConfig};
use crate::symbol::{mean, to_ascii_digits, to_bytes, Symbol};
use crate::synthetic::tiled;
use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

/// How symbols are turned into bytes before a byte compressor sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolEncoding {
    /// Fixed-width little-endian integers
    #[default]
    LittleEndian,
    /// Decimal text of each symbol, concatenated without separators
    AsciiDigits,
}

impl SymbolEncoding {
    pub fn encode<T: Symbol>(self, seq: &[T]) -> Vec<u8> {
        match self {
            SymbolEncoding::LittleEndian => to_bytes(seq),
            SymbolEncoding::AsciiDigits => to_ascii_digits(seq),
        }
    }
}

/// External general-purpose byte compressor
///
/// Implementations must be deterministic: equal input, equal output.
pub trait ByteCompressor: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;

    fn encoding(&self) -> SymbolEncoding {
        SymbolEncoding::LittleEndian
    }
}

/// gzip via `flate2`
#[derive(Debug, Clone, Copy)]
pub struct Gzip {
    pub level: u32,
}

impl Default for Gzip {
    /// Level 9, the default of most gzip front ends
    fn default() -> Self {
        Self { level: 9 }
    }
}

impl ByteCompressor for Gzip {
    fn name(&self) -> &str {
        "gzip"
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        encoder.write_all(data)?;
        encoder.finish()
    }
}

/// Zstandard via the `zstd` crate
#[derive(Debug, Clone, Copy)]
pub struct Zstd {
    pub level: i32,
}

impl Default for Zstd {
    fn default() -> Self {
        Self { level: 3 }
    }
}

impl ByteCompressor for Zstd {
    fn name(&self) -> &str {
        "zstd"
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        zstd::stream::encode_all(data, self.level)
    }
}

/// bzip2 via the `bzip2` crate
#[derive(Debug, Clone, Copy)]
pub struct Bzip2 {
    pub level: u32,
}

impl Default for Bzip2 {
    fn default() -> Self {
        Self { level: 9 }
    }
}

impl ByteCompressor for Bzip2 {
    fn name(&self) -> &str {
        "bz2"
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::new(self.level));
        encoder.write_all(data)?;
        encoder.finish()
    }
}

/// Raw Snappy blocks via `snap`, fed the digit text of the sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct Snappy;

impl ByteCompressor for Snappy {
    fn name(&self) -> &str {
        "snappy"
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        snap::raw::Encoder::new()
            .compress_vec(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn encoding(&self) -> SymbolEncoding {
        SymbolEncoding::AsciiDigits
    }
}

/// Compressed-length proxy used by the NCD engine
///
/// One variant per kind of compressor, each carrying what it needs.
#[derive(Clone)]
pub enum Compressor {
    /// `C(x)` = byte length of the compressed byte serialization of `x`
    Bytes(Arc<dyn ByteCompressor>),

    /// Like `Bytes`, but every input is first tiled `tiling` times
    ///
    /// Pushes short sequences toward the compressor's window size, which
    /// improves self-distance idempotency for gzip. The effect depends on
    /// the compressor and its window; the factor is not assumed to carry
    /// over to other compressors.
    PaddedBytes {
        codec: Arc<dyn ByteCompressor>,
        tiling: usize,
    },

    /// `C(x)` = LZ-76 complexity of `x`
    Lz,

    /// `C(x)` = LZ-76 complexity of `x` over its own random baseline
    NormalizedLz,

    /// `C(x)` = PPM bit estimate of `x` under a fresh model
    Ppm(PpmConfig),
}

/// Tiling factor of the reference `gzip_padded` compressor
pub const GZIP_PADDING_TILES: usize = 3;

impl Compressor {
    pub fn gzip() -> Self {
        Compressor::Bytes(Arc::new(Gzip::default()))
    }

    /// gzip with every input tiled ×3
    pub fn gzip_padded() -> Self {
        Compressor::PaddedBytes {
            codec: Arc::new(Gzip::default()),
            tiling: GZIP_PADDING_TILES,
        }
    }

    pub fn zstd() -> Self {
        Compressor::Bytes(Arc::new(Zstd::default()))
    }

    pub fn bzip2() -> Self {
        Compressor::Bytes(Arc::new(Bzip2::default()))
    }

    pub fn snappy() -> Self {
        Compressor::Bytes(Arc::new(Snappy))
    }

    /// Wrap any external byte compressor
    pub fn external<C: ByteCompressor + 'static>(codec: C) -> Self {
        Compressor::Bytes(Arc::new(codec))
    }

    /// Kind name used in logs and reports
    pub fn name(&self) -> String {
        match self {
            Compressor::Bytes(codec) => codec.name().to_string(),
            Compressor::PaddedBytes { codec, tiling } => {
                format!("{}_padded_x{}", codec.name(), tiling)
            }
            Compressor::Lz => "lz".to_string(),
            Compressor::NormalizedLz => "nlz".to_string(),
            Compressor::Ppm(config) => format!(
                "ppm(order={}, alphabet={})",
                config.order, config.alphabet_size
            ),
        }
    }

    /// Input transformation applied before measuring (tiling for padded kinds)
    pub(crate) fn prepare<'a, T: Symbol>(&self, x: &'a [T]) -> Cow<'a, [T]> {
        match self {
            Compressor::PaddedBytes { tiling, .. } => Cow::Owned(tiled(x, *tiling)),
            _ => Cow::Borrowed(x),
        }
    }

    /// Compressed-length proxy `C(x)` of an already prepared input
    pub(crate) fn measure<T: Symbol>(&self, x: &[T]) -> Result<f64> {
        match self {
            Compressor::Bytes(codec) | Compressor::PaddedBytes { codec, .. } => {
                Ok(codec.compress(&codec.encoding().encode(x))?.len() as f64)
            }
            Compressor::Lz => Ok(lz_complexity(x)? as f64),
            Compressor::NormalizedLz => {
                let c = lz_complexity(x)? as f64;
                Ok(c / random_lz_complexity(x.len(), mean(x))?)
            }
            Compressor::Ppm(config) => compressed_bits(x, *config),
        }
    }

    /// Compressed-length proxy `C(x)`
    pub fn compressed_size<T: Symbol>(&self, x: &[T]) -> Result<f64> {
        self.measure(&self.prepare(x))
    }
}

impl fmt::Debug for Compressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compressor({})", self.name())
    }
}

impl FromStr for Compressor {
    type Err = ComplexityError;

    /// Accepts `gzip`, `gzip_padded`, `bz2`, `snappy`, `zstd`, `lz`, `nlz`,
    /// `ppm` and `ppmc`
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gzip" => Ok(Compressor::gzip()),
            "gzip_padded" => Ok(Compressor::gzip_padded()),
            "bz2" | "bzip2" => Ok(Compressor::bzip2()),
            "snappy" => Ok(Compressor::snappy()),
            "zstd" => Ok(Compressor::zstd()),
            "lz" => Ok(Compressor::Lz),
            "nlz" => Ok(Compressor::NormalizedLz),
            "ppm" | "ppmc" => Ok(Compressor::Ppm(PpmConfig::default())),
            _ => Err(ComplexityError::UnsupportedCompressor(s.to_string())),
        }
    }
}

/// Compressed length of `x` in bits
///
/// Byte compressors report 8 bits per output byte and PPM its bit estimate.
/// The LZ kinds are not bit lengths; their proxy value is returned as is.
pub fn compressed_length_bits<T: Symbol>(x: &[T], compressor: &Compressor) -> Result<f64> {
    let size = compressor.compressed_size(x)?;
    Ok(match compressor {
        Compressor::Bytes(_) | Compressor::PaddedBytes { .. } => size * 8.0,
        Compressor::Lz | Compressor::NormalizedLz | Compressor::Ppm(_) => size,
    })
}
