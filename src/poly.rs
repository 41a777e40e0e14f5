//! Repeating-key (Vigenère) cipher over residues.

use rand::Rng;

use crate::error::{check_residues, check_size, CipherError, Result};

/// `c[i] = (p[i] + key[i mod len(key)]) mod n`
pub fn encode_poly(plain: &[usize], key: &[usize], size: usize) -> Result<Vec<usize>> {
    apply_tiled(plain, key, size, |p, k| (p + k) % size)
}

/// `p[i] = (c[i] - key[i mod len(key)]) mod n`
pub fn decode_poly(cipher: &[usize], key: &[usize], size: usize) -> Result<Vec<usize>> {
    apply_tiled(cipher, key, size, |c, k| (c + size - k) % size)
}

fn apply_tiled(
    seq: &[usize],
    key: &[usize],
    size: usize,
    op: impl Fn(usize, usize) -> usize,
) -> Result<Vec<usize>> {
    check_size(size)?;
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    check_residues(key, size)?;
    check_residues(seq, size)?;

    Ok(seq
        .iter()
        .zip(key.iter().cycle())
        .map(|(&s, &k)| op(s, k))
        .collect())
}

/// Draws a key of `len` uniformly random residues.
pub fn random_key(rng: &mut impl Rng, len: usize, size: usize) -> Result<Vec<usize>> {
    check_size(size)?;
    if len == 0 {
        return Err(CipherError::EmptyKey);
    }
    Ok((0..len).map(|_| rng.gen_range(0..size)).collect())
}
