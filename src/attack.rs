//! Statistical attacks: shift-key recovery, period discovery and the full
//! polyalphabetic break.
//!
//! Every attack enumerates `(candidate, score)` pairs and keeps the candidate whose
//! score lies closest to the model's target statistic. Ties go to the first
//! candidate enumerated, i.e. the lowest key or the shortest period.

use tracing::{debug, info};

use crate::error::{check_residues, check_size, CipherError, Result};
use crate::frequency::FrequencyModel;
use crate::shift::decode_shift;
use crate::streams::{extract_stream, interleave};

/// Best shift key found for one stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftCandidate {
    pub key: usize,
    /// Squared-frequency score of `key` against the reference distribution
    pub score: f64,
}

/// Outcome of [`break_poly`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolyBreak {
    pub period: usize,
    /// One recovered shift per stream offset
    pub key: Vec<usize>,
    pub plaintext: Vec<usize>,
}

/// Counts occurrences of each residue in `0..size`.
pub fn histogram(seq: &[usize], size: usize) -> Result<Vec<usize>> {
    check_size(size)?;
    check_residues(seq, size)?;

    let mut counts = vec![0usize; size];
    for &residue in seq {
        counts[residue] += 1;
    }
    Ok(counts)
}

fn empirical_frequencies(seq: &[usize], size: usize) -> Result<Vec<f64>> {
    if seq.is_empty() {
        return Err(CipherError::EmptyInput("ciphertext"));
    }
    let len = seq.len() as f64;
    Ok(histogram(seq, size)?
        .into_iter()
        .map(|count| count as f64 / len)
        .collect())
}

/// `Σ (count(i) / len)²`, the index-of-coincidence surrogate used to score periods.
pub fn squared_frequency(seq: &[usize], size: usize) -> Result<f64> {
    Ok(empirical_frequencies(seq, size)?
        .into_iter()
        .map(|q| q * q)
        .sum())
}

/// Score of key `k`: empirical ciphertext frequencies weighted by the reference
/// frequency of the letter each one would decode to.
fn shift_score(empirical: &[f64], key: usize, model: &FrequencyModel) -> f64 {
    let size = empirical.len();
    empirical
        .iter()
        .enumerate()
        .map(|(i, q)| q * model.frequency_at((i + size - key) % size))
        .sum()
}

/// Picks the candidate whose score is closest to `target`, first one on ties.
fn closest_to_target<T>(
    candidates: impl IntoIterator<Item = (T, f64)>,
    target: f64,
) -> Option<(T, f64)> {
    candidates
        .into_iter()
        .min_by(|(_, a), (_, b)| (a - target).abs().total_cmp(&(b - target).abs()))
}

/// Recovers the most probable key of a single shift cipher.
///
/// The alphabet size is taken from `model`.
pub fn recover_shift_key(cipher: &[usize], model: &FrequencyModel) -> Result<ShiftCandidate> {
    let size = model.alphabet_size();
    let empirical = empirical_frequencies(cipher, size)?;

    let scores = (0..size).map(|key| {
        let score = shift_score(&empirical, key, model);
        debug!(key, score, "shift candidate");
        (key, score)
    });

    let (key, score) = closest_to_target(scores, model.target())
        .ok_or(CipherError::EmptyInput("candidate keys"))?;
    Ok(ShiftCandidate { key, score })
}

/// Recovers the most probable key length in `1..=max_period`.
///
/// Each candidate period is scored on its offset-0 stream only.
pub fn recover_period(
    cipher: &[usize],
    max_period: usize,
    model: &FrequencyModel,
) -> Result<usize> {
    if max_period < 1 {
        return Err(CipherError::InvalidRange {
            name: "max period",
            value: max_period,
        });
    }
    if cipher.is_empty() {
        return Err(CipherError::EmptyInput("ciphertext"));
    }

    let size = model.alphabet_size();
    let scores = (1..=max_period)
        .map(|period| {
            let stream = extract_stream(cipher, 0, period)?;
            let score = squared_frequency(&stream, size)?;
            debug!(period, score, "period candidate");
            Ok((period, score))
        })
        .collect::<Result<Vec<_>>>()?;

    let (period, score) = closest_to_target(scores, model.target())
        .ok_or(CipherError::EmptyInput("candidate periods"))?;
    info!(period, score, "recovered period");
    Ok(period)
}

/// Breaks a repeating-key cipher: finds the period, attacks each stream as a
/// shift cipher and weaves the decoded streams back together.
pub fn break_poly(
    cipher: &[usize],
    max_period: usize,
    model: &FrequencyModel,
) -> Result<PolyBreak> {
    let size = model.alphabet_size();
    let period = recover_period(cipher, max_period, model)?;

    let mut key = Vec::with_capacity(period);
    let mut decoded = Vec::with_capacity(period);
    for offset in 0..period {
        let stream = extract_stream(cipher, offset, period)?;
        let best = recover_shift_key(&stream, model)?;
        debug!(offset, key = best.key, score = best.score, "stream key");
        decoded.push(decode_shift(&stream, best.key, size)?);
        key.push(best.key);
    }

    Ok(PolyBreak {
        period,
        key,
        plaintext: interleave(&decoded)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::poly::encode_poly;
    use crate::samples::SCIENCE_PLAINTEXT;
    use crate::shift::encode_shift;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn english() -> FrequencyModel {
        FrequencyModel::english().unwrap()
    }

    fn science() -> Vec<usize> {
        Alphabet::latin_lowercase()
            .encode_all(SCIENCE_PLAINTEXT)
            .unwrap()
    }

    #[test]
    fn test_histogram() {
        assert_eq!(histogram(&[0, 2, 2, 1, 2], 3).unwrap(), vec![1, 1, 3]);
        assert!(matches!(
            histogram(&[0, 3], 3),
            Err(CipherError::OutOfRange { residue: 3, .. })
        ));
    }

    #[test]
    fn test_squared_frequency_exact() {
        // counts 2, 1, 1 over length 4: 0.25 + 0.0625 + 0.0625
        let sf = squared_frequency(&[0, 0, 1, 2], 3).unwrap();
        assert!((sf - 0.375).abs() < 1e-12);
        assert_eq!(squared_frequency(&[5, 5, 5], 26).unwrap(), 1.0);
    }

    #[test]
    fn test_squared_frequency_empty() {
        assert!(matches!(
            squared_frequency(&[], 26),
            Err(CipherError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_squared_frequency_uniform_noise() {
        let mut rng = StdRng::seed_from_u64(42);
        let seq: Vec<usize> = (0..50_000).map(|_| rng.gen_range(0..26)).collect();
        let sf = squared_frequency(&seq, 26).unwrap();
        assert!((sf - 1.0 / 26.0).abs() < 0.002, "got {sf}");
    }

    #[test]
    fn test_squared_frequency_english_text() {
        let sf = squared_frequency(&science(), 26).unwrap();
        assert!((sf - english().target()).abs() < 0.006, "got {sf}");
    }

    #[test]
    fn test_recover_shift_key_every_key() {
        let model = english();
        let plain = science();
        for key in 0..26 {
            let cipher = encode_shift(&plain, key, 26).unwrap();
            assert_eq!(recover_shift_key(&cipher, &model).unwrap().key, key);
        }
    }

    #[test]
    fn test_recover_shift_key_short_text() {
        let model = english();
        let plain = science();
        for key in [1, 13, 25] {
            let cipher = encode_shift(&plain[..120], key, 26).unwrap();
            assert_eq!(recover_shift_key(&cipher, &model).unwrap().key, key);
        }
    }

    #[test]
    fn test_recover_shift_key_score_near_target() {
        let model = english();
        let cipher = encode_shift(&science(), 9, 26).unwrap();
        let best = recover_shift_key(&cipher, &model).unwrap();
        assert!((best.score - model.target()).abs() < 0.01);
    }

    #[test]
    fn test_recover_shift_key_empty() {
        assert_eq!(
            recover_shift_key(&[], &english()),
            Err(CipherError::EmptyInput("ciphertext"))
        );
    }

    #[test]
    fn test_tie_goes_to_lowest_key() {
        // Uniform reference: every key scores exactly the same.
        let model = FrequencyModel::new(vec![0.25; 4], 0.25).unwrap();
        let best = recover_shift_key(&[3, 1, 2], &model).unwrap();
        assert_eq!(best.key, 0);
    }

    #[test]
    fn test_closest_to_target_prefers_first() {
        let picked = closest_to_target(vec![('a', 0.5), ('b', 0.25), ('c', 0.5)], 0.5);
        assert_eq!(picked, Some(('a', 0.5)));
        let picked = closest_to_target(vec![('a', 0.0), ('b', 0.25), ('c', 0.75)], 0.5);
        assert_eq!(picked, Some(('b', 0.25)));
        assert_eq!(closest_to_target(Vec::<(char, f64)>::new(), 0.5), None);
    }

    #[test]
    fn test_recover_period_five() {
        let cipher = encode_poly(&science(), &[16, 20, 4, 4, 13], 26).unwrap();
        assert_eq!(recover_period(&cipher, 10, &english()).unwrap(), 5);
    }

    #[test]
    fn test_recover_period_single_shift() {
        let model = english();
        let plain = science();
        for key in [0, 7, 19] {
            let cipher = encode_shift(&plain, key, 26).unwrap();
            assert_eq!(recover_period(&cipher, 2, &model).unwrap(), 1);
            assert_eq!(recover_period(&cipher, 1, &model).unwrap(), 1);
        }
    }

    #[test]
    fn test_recover_period_errors() {
        let model = english();
        assert_eq!(
            recover_period(&[1, 2, 3], 0, &model),
            Err(CipherError::InvalidRange {
                name: "max period",
                value: 0
            })
        );
        assert_eq!(
            recover_period(&[], 5, &model),
            Err(CipherError::EmptyInput("ciphertext"))
        );
    }

    #[test]
    fn test_break_poly_recovers_key_and_text() {
        let plain = science();
        for key in [vec![16, 20, 4, 4, 13], vec![11, 4, 12, 14, 13], vec![0, 1, 2, 3, 4]] {
            let cipher = encode_poly(&plain, &key, 26).unwrap();
            let broken = break_poly(&cipher, 10, &english()).unwrap();
            assert_eq!(broken.period, 5);
            assert_eq!(broken.key, key);
            assert_eq!(broken.plaintext, plain);
        }
    }

    #[test]
    fn test_break_poly_on_single_shift() {
        // Any multiple of the true period decodes correctly.
        let plain = science();
        let cipher = encode_shift(&plain, 7, 26).unwrap();
        let broken = break_poly(&cipher, 10, &english()).unwrap();
        assert!(broken.key.iter().all(|&k| k == 7));
        assert_eq!(broken.plaintext, plain);
    }

    #[test]
    fn test_break_poly_period_beyond_text() {
        // Every period sees the same one-symbol stream, so the shortest wins.
        let broken = break_poly(&[4], 3, &english()).unwrap();
        assert_eq!(broken.period, 1);
        assert_eq!(broken.plaintext.len(), 1);
    }

    #[test]
    fn test_break_poly_errors() {
        let model = english();
        assert_eq!(
            break_poly(&[], 10, &model),
            Err(CipherError::EmptyInput("ciphertext"))
        );
        assert!(matches!(
            break_poly(&[1, 2, 3], 0, &model),
            Err(CipherError::InvalidRange { .. })
        ));
        assert!(matches!(
            break_poly(&[1, 26], 1, &model),
            Err(CipherError::OutOfRange { residue: 26, .. })
        ));
    }
}
