//! Report rendering for the CLI
//!
//! Every subcommand produces a [`Report`]: a versioned envelope around one
//! result body, rendered as text tables or pretty-printed JSON.

use crate::input::format_sequence;
use crate::matrix::DistanceMatrix;
use crate::ncd::{NcdLayout, NcdMatrix};
use serde::{Deserialize, Serialize};
use std::fmt;

/// LZ complexity of one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LzEntry {
    pub index: usize,
    pub length: usize,
    pub complexity: usize,
    /// Complexity over the random baseline (if --normalized)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<f64>,
    /// Why `normalized` is missing when it was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_error: Option<String>,
    /// Early-stop threshold, when the parse was bounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
}

/// ETC result of one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtcEntry {
    pub index: usize,
    pub length: usize,
    pub iterations: usize,
    /// H·L before the first substitution and after each one
    pub trajectory: Vec<f64>,
}

/// Entropy of one sequence in bits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyEntry {
    pub index: usize,
    pub length: usize,
    pub bits: f64,
}

/// PPM bit estimate of one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpmEntry {
    pub index: usize,
    pub length: usize,
    pub bits: f64,
}

/// Result body of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    Lz {
        sequences: Vec<LzEntry>,
    },
    Etc {
        estimator: String,
        sequences: Vec<EtcEntry>,
    },
    Entropy {
        estimator: String,
        sequences: Vec<EntropyEntry>,
    },
    Ppm {
        order: usize,
        alphabet_size: usize,
        sequences: Vec<PpmEntry>,
    },
    Hamming {
        matrix: DistanceMatrix,
    },
    Ncd {
        compressor: String,
        layout: NcdLayout,
        matrix: NcdMatrix,
    },
    Generate {
        sequences: Vec<Vec<u8>>,
    },
}

/// Versioned report envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub version: String,
    pub format: String,
    pub result: ReportBody,
}

impl Report {
    pub fn new(result: ReportBody) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "spikeplex-json-v1".to_string(),
            result,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as plain-text tables
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            ReportBody::Lz { sequences } => {
                writeln!(
                    f,
                    "{:>5} {:>8} {:>10} {:>10}",
                    "seq", "length", "lz", "normalized"
                )?;
                for e in sequences {
                    let normalized = e
                        .normalized
                        .map(|v| format!("{:.6}", v))
                        .unwrap_or_else(|| "-".to_string());
                    writeln!(
                        f,
                        "{:>5} {:>8} {:>10} {:>10}",
                        e.index, e.length, e.complexity, normalized
                    )?;
                }
                for e in sequences {
                    if let Some(reason) = &e.normalized_error {
                        writeln!(f, "seq {}: no normalized value ({})", e.index, reason)?;
                    }
                }
            }
            ReportBody::Etc {
                estimator,
                sequences,
            } => {
                writeln!(f, "ETC ({} entropy)", estimator)?;
                for e in sequences {
                    write!(
                        f,
                        "{:>5} length={:<6} iterations={:<6} [",
                        e.index, e.length, e.iterations
                    )?;
                    write_row(f, &e.trajectory)?;
                    writeln!(f, "]")?;
                }
            }
            ReportBody::Entropy {
                estimator,
                sequences,
            } => {
                let header = format!("H_{} (bits)", estimator);
                writeln!(f, "{:>5} {:>8} {:>12}", "seq", "length", header)?;
                for e in sequences {
                    writeln!(f, "{:>5} {:>8} {:>12.6}", e.index, e.length, e.bits)?;
                }
            }
            ReportBody::Ppm {
                order,
                alphabet_size,
                sequences,
            } => {
                writeln!(f, "PPM order {} over {} symbols", order, alphabet_size)?;
                writeln!(f, "{:>5} {:>8} {:>12}", "seq", "length", "bits")?;
                for e in sequences {
                    writeln!(f, "{:>5} {:>8} {:>12.4}", e.index, e.length, e.bits)?;
                }
            }
            ReportBody::Hamming { matrix } => {
                writeln!(f, "Minimum circular Hamming distance")?;
                write_matrix(f, matrix)?;
            }
            ReportBody::Ncd {
                compressor, matrix, ..
            } => {
                writeln!(f, "NCD ({})", compressor)?;
                match matrix {
                    NcdMatrix::Square(m) => write_matrix(f, m)?,
                    NcdMatrix::Condensed(values) => {
                        write_row(f, values)?;
                        writeln!(f)?;
                    }
                }
            }
            ReportBody::Generate { sequences } => {
                for seq in sequences {
                    writeln!(f, "{}", format_sequence(seq))?;
                }
            }
        }
        Ok(())
    }
}

/// Space-separated values to four decimals, no trailing newline
fn write_row(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{:.4}", v)?;
    }
    Ok(())
}

fn write_matrix(f: &mut fmt::Formatter<'_>, matrix: &DistanceMatrix) -> fmt::Result {
    for row in matrix.rows() {
        write_row(f, row)?;
        writeln!(f)?;
    }
    Ok(())
}
