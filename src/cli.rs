//! CLI argument parsing for spikeplex

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

/// Matrix shape for `ncd`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Symmetric,
    Upper,
    Condensed,
}

#[derive(Parser, Debug)]
#[command(name = "spikeplex")]
#[command(version)]
#[command(about = "Complexity and distance measures for symbolic spike trains", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Load analysis settings from a TOML file
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Worker threads for pairwise matrices (0 = all cores)
    #[arg(long = "threads", value_name = "N", global = true)]
    pub threads: Option<usize>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Sequence source shared by the analysis subcommands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// File with one sequence per line, or - for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lempel-Ziv-76 complexity of each sequence
    Lz {
        #[command(flatten)]
        input: InputArgs,

        /// Also report complexity over the random-sequence baseline
        #[arg(long = "normalized")]
        normalized: bool,

        /// Stop parsing once the complexity exceeds N
        #[arg(long = "threshold", value_name = "N")]
        threshold: Option<usize>,
    },

    /// Effort-to-compress iterations and entropy trajectory
    Etc {
        #[command(flatten)]
        input: InputArgs,

        /// Entropy estimator (ML, MM or JK)
        #[arg(long = "estimator", value_name = "EST")]
        estimator: Option<String>,
    },

    /// Shannon entropy of each sequence in bits
    Entropy {
        #[command(flatten)]
        input: InputArgs,

        /// Entropy estimator (ML, MM or JK)
        #[arg(long = "estimator", value_name = "EST")]
        estimator: Option<String>,
    },

    /// Pairwise minimum circular Hamming distance
    Hamming {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Pairwise normalized compression distance
    Ncd {
        #[command(flatten)]
        input: InputArgs,

        /// gzip, gzip_padded, bz2, snappy, zstd, lz, nlz or ppm
        #[arg(long = "compressor", default_value = "lz")]
        compressor: String,

        #[arg(long = "layout", value_enum, default_value = "symmetric")]
        layout: LayoutArg,
    },

    /// PPM compressed length of each sequence in bits
    Ppm {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum context order
        #[arg(long = "order", value_name = "K")]
        order: Option<usize>,

        /// Output alphabet size
        #[arg(long = "alphabet-size", value_name = "N")]
        alphabet_size: Option<usize>,
    },

    /// Generate random Bernoulli spike trains
    Generate {
        /// Number of trains
        #[arg(long = "count", default_value = "1")]
        count: usize,

        /// Symbols per train
        #[arg(long = "length", default_value = "100")]
        length: usize,

        /// Firing probability
        #[arg(long = "p", default_value = "0.5")]
        p: f64,

        /// RNG seed
        #[arg(long = "seed", default_value = "0")]
        seed: u64,
    },
}
