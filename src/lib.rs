//! Songbook Theory WASM Module
//!
//! Music theory engine for the worship songbook chord sheet editor.
//! Transposes chord symbols while keeping their spelling sensible for the
//! target key, and guesses the key of a chord progression.
//!
//! Everything runs on the line of fifths: a note is a signed position
//! (C = 0, G = +1, F = -1), transposition is integer addition, and each key
//! signature is a contiguous run of that line.

pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod theory;
pub mod transposition;

// Re-export commonly used types
pub use config::DetectionConfig;
pub use detection::{
    detect_key, detect_key_changes, detect_key_changes_with_config, detect_key_with_config,
    fitness, normalize_for_analysis, KeyCandidate, KeyChange, KeyDetectionResult,
};
pub use error::{Result, TheoryError};
pub use models::{Chord, ChordQuality, Key, Letter, Mode, Note};
pub use theory::{enharmonic_pair_of, signature_of, simplify, KeySignature};
pub use transposition::{
    resolve_enharmonic, transpose_chord, transpose_chord_in_context, transpose_note,
    transpose_note_in_context, transpose_progression, transpose_slash_chord,
    transpose_slash_chord_in_context, transposition_distance, Interval,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Songbook theory WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        api::helpers::log_warn(&format!("Logger already initialized: {}", e));
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
