//! Songbook Theory WASM API
//!
//! The JavaScript-facing surface of the crate. The chord sheet editor calls
//! these with plain strings and arrays; everything musical happens in the
//! Rust modules underneath.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serde conversion, lenient key/note parsing
//! - `transpose`: Chord, progression and note spelling operations
//! - `detect`: Key detection and key change detection

pub mod helpers;
pub mod detect;
pub mod transpose;

pub use detect::{detect_key, detect_key_changes};
pub use transpose::{
    enharmonic_pair, interval_distance, key_signature, resolve_enharmonic_spelling,
    transpose_chord, transpose_chord_in_context, transpose_progression, transposition_distance,
};
