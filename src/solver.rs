//! Text-level entry points binding alphabets to a language model.

use tracing::info;

use crate::alphabet::Alphabet;
use crate::attack::{break_poly, recover_period, recover_shift_key};
use crate::error::{CipherError, Result};
use crate::frequency::FrequencyModel;
use crate::poly::{decode_poly, encode_poly};
use crate::shift::{decode_shift, encode_shift};

/// Ciphertext is written in `cipher` symbols, plaintext and keys in `plain` symbols.
#[derive(Debug, Clone)]
pub struct Solver {
    cipher: Alphabet,
    plain: Alphabet,
    model: FrequencyModel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSolution {
    pub key: usize,
    pub score: f64,
    pub plaintext: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolySolution {
    pub period: usize,
    /// Recovered key rendered in the plaintext alphabet
    pub key: String,
    pub plaintext: String,
}

impl Solver {
    pub fn new(cipher: Alphabet, plain: Alphabet, model: FrequencyModel) -> Result<Self> {
        let expected = cipher.len();
        for found in [plain.len(), model.alphabet_size()] {
            if found != expected {
                return Err(CipherError::SizeMismatch { expected, found });
            }
        }
        Ok(Self {
            cipher,
            plain,
            model,
        })
    }

    /// `A..Z` ciphertext, `a..z` plaintext and the English model.
    pub fn english() -> Result<Self> {
        Self::new(
            Alphabet::latin_uppercase(),
            Alphabet::latin_lowercase(),
            FrequencyModel::english()?,
        )
    }

    pub fn cipher_alphabet(&self) -> &Alphabet {
        &self.cipher
    }

    pub fn plain_alphabet(&self) -> &Alphabet {
        &self.plain
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    fn size(&self) -> usize {
        self.cipher.len()
    }

    pub fn solve_shift(&self, ciphertext: &str) -> Result<ShiftSolution> {
        let cipher = self.cipher.encode_all(ciphertext)?;
        let best = recover_shift_key(&cipher, &self.model)?;
        info!(key = best.key, score = best.score, "recovered shift key");

        let plain = decode_shift(&cipher, best.key, self.size())?;
        Ok(ShiftSolution {
            key: best.key,
            score: best.score,
            plaintext: self.plain.decode_all(&plain)?,
        })
    }

    pub fn recover_period(&self, ciphertext: &str, max_period: usize) -> Result<usize> {
        let cipher = self.cipher.encode_all(ciphertext)?;
        recover_period(&cipher, max_period, &self.model)
    }

    pub fn solve_poly(&self, ciphertext: &str, max_period: usize) -> Result<PolySolution> {
        let cipher = self.cipher.encode_all(ciphertext)?;
        let broken = break_poly(&cipher, max_period, &self.model)?;
        let key = self.plain.decode_all(&broken.key)?;
        info!(period = broken.period, key = %key, "recovered repeating key");

        Ok(PolySolution {
            period: broken.period,
            key,
            plaintext: self.plain.decode_all(&broken.plaintext)?,
        })
    }

    pub fn encrypt_shift(&self, plaintext: &str, key: usize) -> Result<String> {
        let plain = self.plain.encode_all(plaintext)?;
        self.cipher.decode_all(&encode_shift(&plain, key, self.size())?)
    }

    pub fn decrypt_shift(&self, ciphertext: &str, key: usize) -> Result<String> {
        let cipher = self.cipher.encode_all(ciphertext)?;
        self.plain.decode_all(&decode_shift(&cipher, key, self.size())?)
    }

    /// `key` is written in the plaintext alphabet, e.g. `"queen"`.
    pub fn encrypt_poly(&self, plaintext: &str, key: &str) -> Result<String> {
        let plain = self.plain.encode_all(plaintext)?;
        let key = self.plain.encode_all(key)?;
        self.cipher.decode_all(&encode_poly(&plain, &key, self.size())?)
    }

    pub fn decrypt_poly(&self, ciphertext: &str, key: &str) -> Result<String> {
        let cipher = self.cipher.encode_all(ciphertext)?;
        let key = self.plain.encode_all(key)?;
        self.plain.decode_all(&decode_poly(&cipher, &key, self.size())?)
    }
}
