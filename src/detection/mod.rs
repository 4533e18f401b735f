//! Key detection for chord progressions
//!
//! Independent of the transposer except for the shared note parsing: chords
//! are reduced to triads, scored against the diatonic vocabulary of every
//! registered key, and ranked.

pub mod detector;
pub mod fitness;
pub mod key_changes;
pub mod normalize;
pub mod vocabulary;

pub use detector::{detect_key, detect_key_with_config, KeyCandidate, KeyDetectionResult};
pub use fitness::fitness;
pub use key_changes::{detect_key_changes, detect_key_changes_with_config, KeyChange};
pub use normalize::{normalize_for_analysis, Triad};
pub use vocabulary::{vocabulary_of, KeyVocabulary};
