use thiserror::Error;

/// Errors raised by the codec, the ciphers and the attack engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    /// `position` is the index of the symbol within the input text (0 for a lone symbol)
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("residue {residue} is outside the alphabet range 0..{size}")]
    OutOfRange { residue: usize, size: usize },

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("cipher key must not be empty")]
    EmptyKey,

    #[error("stream offset {offset} must be less than period {period}")]
    InvalidOffset { offset: usize, period: usize },

    #[error("{name} must be at least 1, got {value}")]
    InvalidRange { name: &'static str, value: usize },

    #[error("symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(char),

    #[error("alphabet size mismatch: expected {expected}, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("malformed frequency table: {0}")]
    FrequencyTable(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;

/// Checks that every residue of `seq` lies in `0..size`.
pub(crate) fn check_residues(seq: &[usize], size: usize) -> Result<()> {
    match seq.iter().find(|&&residue| residue >= size) {
        Some(&residue) => Err(CipherError::OutOfRange { residue, size }),
        None => Ok(()),
    }
}

pub(crate) fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(CipherError::InvalidRange {
            name: "alphabet size",
            value: size,
        });
    }
    Ok(())
}
