//! Sequence input for the CLI
//!
//! One sequence per line. Symbols are separated by whitespace or commas
//! (`1 0 1 1`, `3,7,3`), or written as a contiguous run of digits where
//! every digit is one symbol (`1011`). Blank lines and lines starting with
//! `#` are skipped.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A parsed symbol sequence
pub type Sequence = Vec<i64>;

/// Parse one line into a sequence
pub fn parse_line(line: &str) -> Result<Sequence> {
    let line = line.trim();
    let separated = line.contains(|c: char| c == ',' || c.is_whitespace());

    if !separated && line.len() > 1 && line.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(line.bytes().map(|b| i64::from(b - b'0')).collect());
    }

    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid symbol '{}'", token))
        })
        .collect()
}

/// Parse every sequence in `text`
pub fn parse_sequences(text: &str) -> Result<Vec<Sequence>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| parse_line(line).with_context(|| format!("Line {}", idx + 1)))
        .collect()
}

/// Read sequences from a file, or from stdin when `path` is `-`
pub fn read_sequences(path: &Path) -> Result<Vec<Sequence>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read sequences from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read sequences from {}", path.display()))?
    };
    parse_sequences(&text)
}

/// Render a sequence as a digit run when every symbol is a single digit
pub fn format_sequence<T: Copy + Into<i64>>(seq: &[T]) -> String {
    let values = seq.iter().map(|&s| Into::<i64>::into(s));
    if values.clone().all(|s| (0..=9).contains(&s)) {
        values.map(|s| s.to_string()).collect()
    } else {
        values
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_digit_run() {
        assert_eq!(parse_line("1011").unwrap(), vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_parse_separated() {
        assert_eq!(parse_line("1 0  1").unwrap(), vec![1, 0, 1]);
        assert_eq!(parse_line("3,7, 3,-2").unwrap(), vec![3, 7, 3, -2]);
        assert_eq!(parse_line("12").unwrap(), vec![1, 2]);
        assert_eq!(parse_line("12 4").unwrap(), vec![12, 4]);
        assert_eq!(parse_line("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_invalid_symbol() {
        assert!(parse_line("1 x 0").is_err());
        assert!(parse_sequences("101\n1 0.5\n").is_err());
    }

    #[test]
    fn test_parse_sequences_skips_blank_and_comments() {
        let seqs = parse_sequences("# trains\n0101\n\n  1 1 0\n").unwrap();
        assert_eq!(seqs, vec![vec![0, 1, 0, 1], vec![1, 1, 0]]);
    }

    #[test]
    fn test_read_sequences_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "0110")?;
        writeln!(file, "1,0,0,1")?;
        let seqs = read_sequences(file.path())?;
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[1], vec![1, 0, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[1, 0, 1]), "101");
        assert_eq!(format_sequence(&[12, 3]), "12 3");
        assert_eq!(format_sequence(&[0u8, 1, 1]), "011");
    }
}
