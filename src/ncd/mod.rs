// Normalized Compression Distance (NCD)
//
// Approximates the normalized information distance between two sequences
// with any compressed-length proxy C:
//
//   NCD(a, b) = (min(C(ab), C(ba)) - min(C(a), C(b))) / max(C(a), C(b))
//
// Proxies range from real byte compressors (gzip, zstd) to the LZ-76
// phrase count and the PPM bit estimate. Values are roughly in [0, 1]; a
// real compressor is not a normal compressor, so self-distance is small
// but rarely zero and slight excursions past 1 happen.
//
// Scientific Foundation:
// [1] Li, M., Chen, X., Li, X., Ma, B., & Vitányi, P. M. B. (2004). The
//     similarity metric. IEEE Transactions on Information Theory, 50(12).
// [2] Cilibrasi, R., & Vitányi, P. M. B. (2005). Clustering by compression.
//     IEEE Transactions on Information Theory, 51(4).

mod cluster;
mod compressor;
mod engine;

pub use cluster::{cluster_reorder, cluster_reorder_with, ClusteredMatrix, Linkage, LinkageMethod};
pub use compressor::{
    compressed_length_bits, ByteCompressor, Bzip2, Compressor, Gzip, Snappy, SymbolEncoding, Zstd,
    GZIP_PADDING_TILES,
};
pub use engine::{ncd, ncd_matrix, pair_lengths, NcdLayout, NcdMatrix, PairLengths};
