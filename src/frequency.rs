//! Reference letter frequencies and the squared-frequency target of a language.

use crate::alphabet::Alphabet;
use crate::error::{check_size, CipherError, Result};

/// For English, the expected sum of squared letter frequencies.
pub const ENGLISH_TARGET: f64 = 0.065;

const ENGLISH_TABLE: &str = include_str!("../frequency_table/english.csv");

/// Allowed drift of a table's total from 1.0 (rounded published tables sum to 0.999).
const SUM_TOLERANCE: f64 = 0.01;

/// Immutable language model used by every attack.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    frequencies: Vec<f64>,
    target: f64,
}

impl FrequencyModel {
    /// Builds a model from frequencies indexed by plaintext residue.
    pub fn new(frequencies: Vec<f64>, target: f64) -> Result<Self> {
        check_size(frequencies.len())?;

        if let Some((residue, freq)) = frequencies
            .iter()
            .enumerate()
            .find(|(_, f)| !(0.0..=1.0).contains(*f))
        {
            return Err(CipherError::FrequencyTable(format!(
                "frequency {freq} for residue {residue} is outside [0, 1]"
            )));
        }

        let total: f64 = frequencies.iter().sum();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(CipherError::FrequencyTable(format!(
                "frequencies sum to {total:.4}, expected 1"
            )));
        }

        if !target.is_finite() || target <= 0.0 {
            return Err(CipherError::FrequencyTable(format!(
                "target statistic {target} must be a positive number"
            )));
        }

        Ok(Self {
            frequencies,
            target,
        })
    }

    /// English letter frequencies over `a..z` with target 0.065.
    pub fn english() -> Result<Self> {
        Self::english_with_target(ENGLISH_TARGET)
    }

    pub fn english_with_target(target: f64) -> Result<Self> {
        Self::from_csv(ENGLISH_TABLE, &Alphabet::latin_lowercase(), target)
    }

    /// Parses a `symbol,frequency` table with a header line.
    ///
    /// Every symbol of `alphabet` must appear exactly once; blank lines are skipped.
    pub fn from_csv(table: &str, alphabet: &Alphabet, target: f64) -> Result<Self> {
        let mut freqs = vec![0.0; alphabet.len()];
        let mut seen = vec![false; alphabet.len()];

        for (line_no, raw_line) in table.lines().enumerate() {
            if line_no == 0 || raw_line.trim().is_empty() {
                continue;
            }

            let mut parts = raw_line.split(',');
            let symbol_str = parts.next().unwrap_or_default().trim();
            let freq_str = parts
                .next()
                .ok_or_else(|| malformed(line_no, "missing frequency column"))?
                .trim();

            let mut chars = symbol_str.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(symbol), None) => symbol,
                _ => return Err(malformed(line_no, "symbol entries must be a single character")),
            };
            let residue = alphabet
                .encode(symbol)
                .map_err(|_| malformed(line_no, &format!("symbol {symbol:?} is not in the alphabet")))?;
            if seen[residue] {
                return Err(malformed(line_no, &format!("duplicate symbol {symbol:?}")));
            }

            freqs[residue] = freq_str.parse().map_err(|_| {
                malformed(line_no, &format!("failed to parse frequency for {symbol:?}"))
            })?;
            seen[residue] = true;
        }

        if let Some(missing) = seen.iter().position(|&flag| !flag) {
            let symbol = alphabet.decode(missing)?;
            return Err(CipherError::FrequencyTable(format!(
                "missing entry for symbol {symbol:?}"
            )));
        }

        Self::new(freqs, target)
    }

    pub fn alphabet_size(&self) -> usize {
        self.frequencies.len()
    }

    pub fn expected_frequency(&self, residue: usize) -> Result<f64> {
        self.frequencies
            .get(residue)
            .copied()
            .ok_or(CipherError::OutOfRange {
                residue,
                size: self.alphabet_size(),
            })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Expected frequency for a residue already known to be in range.
    pub(crate) fn frequency_at(&self, residue: usize) -> f64 {
        self.frequencies[residue]
    }
}

fn malformed(line_no: usize, detail: &str) -> CipherError {
    CipherError::FrequencyTable(format!("line {}: {detail}", line_no + 1))
}
