//! Splitting a sequence into periodic streams and weaving them back together.

use crate::error::{CipherError, Result};

/// Elements whose index is congruent to `offset` modulo `period`, in order.
pub fn extract_stream(seq: &[usize], offset: usize, period: usize) -> Result<Vec<usize>> {
    if offset >= period {
        return Err(CipherError::InvalidOffset { offset, period });
    }
    Ok(seq.iter().skip(offset).step_by(period).copied().collect())
}

/// Round-robins one element at a time from each stream, skipping exhausted streams.
///
/// Streams produced by [`extract_stream`] differ in length by at most one, so this
/// restores the original order even when the total length is not a multiple of
/// the period.
pub fn interleave(streams: &[Vec<usize>]) -> Result<Vec<usize>> {
    if streams.is_empty() {
        return Err(CipherError::EmptyInput("stream list"));
    }

    let total = streams.iter().map(Vec::len).sum();
    let longest = streams.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(total);
    for round in 0..longest {
        out.extend(streams.iter().filter_map(|stream| stream.get(round)));
    }
    Ok(out)
}
