//! Static music-theory tables
//!
//! Built once on first use and never mutated afterwards.

pub mod lof;
pub mod signature;

pub use lof::{enharmonic_pair_of, note_at, position_of, simplify};
pub use signature::{registry_keys, signature_of, uses_sharp_polarity, KeySignature};
