//! Single-key shift (Caesar) cipher over residues.

use crate::error::{check_residues, check_size, Result};

/// `c[i] = (p[i] + k) mod n`
pub fn encode_shift(plain: &[usize], key: usize, size: usize) -> Result<Vec<usize>> {
    check_inputs(plain, key, size)?;
    Ok(plain.iter().map(|&p| (p + key) % size).collect())
}

/// `p[i] = (c[i] - k) mod n`
pub fn decode_shift(cipher: &[usize], key: usize, size: usize) -> Result<Vec<usize>> {
    check_inputs(cipher, key, size)?;
    Ok(cipher.iter().map(|&c| (c + size - key) % size).collect())
}

fn check_inputs(seq: &[usize], key: usize, size: usize) -> Result<()> {
    check_size(size)?;
    check_residues(&[key], size)?;
    check_residues(seq, size)
}
