//! Error types for the theory core
//!
//! Low-level lookups (note parsing, LOF arithmetic, key signatures) return
//! these errors. The chord and progression transposers never let them escape:
//! they log a warning and hand the input back unchanged.

use thiserror::Error;

/// Errors raised by the pitch, key and chord primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Spelling is not in the note table (empty, bad letter, bad accidentals)
    #[error("Unknown note: '{0}'")]
    UnknownNote(String),

    /// Line-of-fifths arithmetic left the supported window
    #[error("Line-of-fifths position {0} is out of range")]
    OutOfRange(i32),

    /// Key is not one of the 30 registered major/minor keys
    #[error("Invalid key: '{0}'")]
    InvalidKey(String),

    /// No root could be extracted from the chord symbol
    #[error("Malformed chord symbol: '{0}'")]
    MalformedChordSymbol(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
