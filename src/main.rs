use anyhow::{Context, Result};
use clap::Parser;
use spikeplex::cli::{Cli, Command, LayoutArg, OutputFormat};
use spikeplex::config::AnalysisConfig;
use spikeplex::entropy::{entropy_bits, Estimator};
use spikeplex::etc::etc;
use spikeplex::hamming::pairwise_matrix;
use spikeplex::input::{read_sequences, Sequence};
use spikeplex::lz::{lz_complexity, lz_complexity_bounded, normalized_lz_complexity};
use spikeplex::ncd::{ncd_matrix, NcdLayout};
use spikeplex::output::{EntropyEntry, EtcEntry, LzEntry, PpmEntry, Report, ReportBody};
use spikeplex::ppm::{compressed_bits, PpmConfig};
use spikeplex::synthetic::bernoulli_trains;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve the estimator flag, falling back to the configured one
fn estimator_or(flag: Option<&str>, config: &AnalysisConfig) -> Result<Estimator> {
    match flag {
        Some(name) => Ok(name.parse()?),
        None => Ok(config.estimator),
    }
}

fn lz_report(seqs: &[Sequence], normalized: bool, threshold: Option<usize>) -> Result<ReportBody> {
    let mut entries = Vec::with_capacity(seqs.len());
    for (index, seq) in seqs.iter().enumerate() {
        let complexity = match threshold {
            Some(t) => lz_complexity_bounded(seq, t),
            None => lz_complexity(seq),
        }
        .with_context(|| format!("Sequence {}", index))?;

        let (normalized, normalized_error) = if normalized {
            match normalized_lz_complexity(seq) {
                Ok(value) => (Some(value), None),
                Err(e) => {
                    warn!(index, error = %e, "no random baseline for sequence");
                    (None, Some(e.to_string()))
                }
            }
        } else {
            (None, None)
        };

        entries.push(LzEntry {
            index,
            length: seq.len(),
            complexity,
            normalized,
            normalized_error,
            threshold,
        });
    }
    Ok(ReportBody::Lz { sequences: entries })
}

fn run(cli: Cli) -> Result<Report> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_toml(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }

    let body = match cli.command {
        Command::Lz {
            input,
            normalized,
            threshold,
        } => {
            let seqs = read_sequences(&input.input)?;
            info!(sequences = seqs.len(), "computing LZ complexity");
            lz_report(&seqs, normalized, threshold.or(config.lz_threshold))?
        }

        Command::Etc { input, estimator } => {
            let estimator = estimator_or(estimator.as_deref(), &config)?;
            let seqs = read_sequences(&input.input)?;
            info!(sequences = seqs.len(), %estimator, "computing effort to compress");
            let sequences = seqs
                .iter()
                .enumerate()
                .map(|(index, seq)| {
                    let result =
                        etc(seq, estimator).with_context(|| format!("Sequence {}", index))?;
                    Ok(EtcEntry {
                        index,
                        length: seq.len(),
                        iterations: result.iterations,
                        trajectory: result.trajectory,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            ReportBody::Etc {
                estimator: estimator.to_string(),
                sequences,
            }
        }

        Command::Entropy { input, estimator } => {
            let estimator = estimator_or(estimator.as_deref(), &config)?;
            let seqs = read_sequences(&input.input)?;
            let sequences = seqs
                .iter()
                .enumerate()
                .map(|(index, seq)| EntropyEntry {
                    index,
                    length: seq.len(),
                    bits: entropy_bits(seq, estimator),
                })
                .collect();
            ReportBody::Entropy {
                estimator: estimator.to_string(),
                sequences,
            }
        }

        Command::Hamming { input } => {
            let seqs = read_sequences(&input.input)?;
            info!(sequences = seqs.len(), threads = config.threads, "computing Hamming matrix");
            ReportBody::Hamming {
                matrix: pairwise_matrix(&seqs, config.threads)?,
            }
        }

        Command::Ncd {
            input,
            compressor,
            layout,
        } => {
            let compressor = config.compressor(&compressor)?;
            let layout = match layout {
                LayoutArg::Symmetric => NcdLayout::Symmetric,
                LayoutArg::Upper => NcdLayout::UpperTriangle,
                LayoutArg::Condensed => NcdLayout::Condensed,
            };
            let seqs = read_sequences(&input.input)?;
            info!(sequences = seqs.len(), compressor = %compressor.name(), "computing NCD matrix");
            ReportBody::Ncd {
                compressor: compressor.name(),
                layout,
                matrix: ncd_matrix(&seqs, &compressor, layout, config.threads)?,
            }
        }

        Command::Ppm {
            input,
            order,
            alphabet_size,
        } => {
            let ppm = PpmConfig {
                order: order.unwrap_or(config.ppm_order),
                alphabet_size: alphabet_size.unwrap_or(config.ppm_alphabet_size),
            };
            let seqs = read_sequences(&input.input)?;
            let sequences = seqs
                .iter()
                .enumerate()
                .map(|(index, seq)| {
                    let bits =
                        compressed_bits(seq, ppm).with_context(|| format!("Sequence {}", index))?;
                    Ok(PpmEntry {
                        index,
                        length: seq.len(),
                        bits,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            ReportBody::Ppm {
                order: ppm.order,
                alphabet_size: ppm.alphabet_size,
                sequences,
            }
        }

        Command::Generate {
            count,
            length,
            p,
            seed,
        } => ReportBody::Generate {
            sequences: bernoulli_trains(count, length, p, seed)?,
        },
    };

    Ok(Report::new(body))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let format = args.format;
    let report = run(args)?;
    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
