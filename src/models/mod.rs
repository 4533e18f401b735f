//! Data models for the theory engine
//!
//! Spelled notes, keys, and chord symbols. Parsing lives with the types;
//! the musical rules live in `theory`, `transposition` and `detection`.

pub mod chord;
pub mod key;
pub mod note;

// Re-export commonly used types
pub use chord::{Chord, ChordQuality};
pub use key::{Key, Mode};
pub use note::{Letter, Note};
