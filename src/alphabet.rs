//! Bidirectional mapping between alphabet symbols and residues mod N.

use std::collections::HashMap;

use crate::error::{check_size, CipherError, Result};

/// An ordered symbol set with a total bijection onto `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        check_size(symbols.len())?;

        let mut index = HashMap::with_capacity(symbols.len());
        for (residue, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, residue).is_some() {
                return Err(CipherError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols, index })
    }

    /// `A..Z`, the canonical ciphertext alphabet.
    pub fn latin_uppercase() -> Self {
        Self::ascii_range(b'A')
    }

    /// `a..z`, the canonical plaintext alphabet.
    pub fn latin_lowercase() -> Self {
        Self::ascii_range(b'a')
    }

    fn ascii_range(first: u8) -> Self {
        let symbols: Vec<char> = (0..26u8).map(|i| (first + i) as char).collect();
        let index = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, index }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    pub fn encode(&self, symbol: char) -> Result<usize> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(CipherError::InvalidSymbol {
                symbol,
                position: 0,
            })
    }

    pub fn decode(&self, residue: usize) -> Result<char> {
        self.symbols
            .get(residue)
            .copied()
            .ok_or(CipherError::OutOfRange {
                residue,
                size: self.len(),
            })
    }

    /// Encodes a whole text, stopping at the first symbol outside the alphabet.
    pub fn encode_all(&self, text: &str) -> Result<Vec<usize>> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.index
                    .get(&symbol)
                    .copied()
                    .ok_or(CipherError::InvalidSymbol { symbol, position })
            })
            .collect()
    }

    pub fn decode_all(&self, seq: &[usize]) -> Result<String> {
        seq.iter().map(|&residue| self.decode(residue)).collect()
    }

    /// Drops every character that is not a member of the alphabet.
    pub fn retain_members(&self, text: &str) -> String {
        text.chars().filter(|&c| self.contains(c)).collect()
    }
}
