//! Frequency-analysis attacks on shift and repeating-key (Vigenère) ciphers.
//!
//! Texts are mapped to residues by an [`Alphabet`], attacked against a
//! [`FrequencyModel`], and mapped back. [`Solver`] wires the pieces together for
//! string input; the residue-level functions live in [`shift`], [`poly`],
//! [`streams`] and [`attack`].
//!
//! # Example
//! ```
//! use freqcrack::Solver;
//!
//! let solver = Solver::english().unwrap();
//! let solution = solver.solve_shift("OVDTHUFWVZZPISLRLFZHYLAOLYL").unwrap();
//! assert_eq!(solution.key, 7);
//! assert_eq!(solution.plaintext, "howmanypossiblekeysarethere");
//! ```

pub mod alphabet;
pub mod attack;
pub mod error;
pub mod frequency;
pub mod poly;
pub mod samples;
pub mod shift;
pub mod solver;
pub mod streams;

pub use alphabet::Alphabet;
pub use attack::{PolyBreak, ShiftCandidate};
pub use error::{CipherError, Result};
pub use frequency::FrequencyModel;
pub use solver::{PolySolution, ShiftSolution, Solver};
