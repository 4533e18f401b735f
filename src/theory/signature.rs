//! Key signature registry
//!
//! The 15 usable major keys (Cb through C#) and their 15 relative minors
//! (Abm through A#m). A signature is a run along the sharp order
//! F C G D A E B, or along the flat order B E A D G C F; never both.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, TheoryError};
use crate::models::key::Key;
use crate::models::note::{Letter, Note};

/// Widest signature in the registry
pub const MAX_SIGNATURE_ACCIDENTALS: i32 = 7;

const SHARP_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

const FLAT_ORDER: [Letter; 7] = [
    Letter::B,
    Letter::E,
    Letter::A,
    Letter::D,
    Letter::G,
    Letter::C,
    Letter::F,
];

/// Major keys in the order candidates are ranked when fitness ties
const MAJOR_TONICS: [&str; 15] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignature {
    pub sharps: Vec<Note>,
    pub flats: Vec<Note>,
}

impl KeySignature {
    fn from_fifths(fifths: i32) -> KeySignature {
        let count = fifths.unsigned_abs() as usize;
        if fifths >= 0 {
            KeySignature {
                sharps: SHARP_ORDER.iter().take(count).map(|l| Note::sharp(*l)).collect(),
                flats: Vec::new(),
            }
        } else {
            KeySignature {
                sharps: Vec::new(),
                flats: FLAT_ORDER.iter().take(count).map(|l| Note::flat(*l)).collect(),
            }
        }
    }

    pub fn accidental_count(&self) -> usize {
        self.sharps.len() + self.flats.len()
    }

    pub fn is_natural(&self) -> bool {
        self.accidental_count() == 0
    }
}

lazy_static! {
    /// All 30 keys: majors first, then each major's relative minor
    static ref REGISTRY_KEYS: Vec<Key> = {
        let majors: Vec<Key> = MAJOR_TONICS
            .iter()
            .filter_map(|name| name.parse::<Note>().ok())
            .map(Key::major)
            .collect();
        let minors: Vec<Key> = majors.iter().filter_map(|key| key.relative().ok()).collect();
        majors.into_iter().chain(minors).collect()
    };

    static ref SIGNATURES: HashMap<Key, KeySignature> = REGISTRY_KEYS
        .iter()
        .map(|key| (*key, KeySignature::from_fifths(key.fifths())))
        .collect();
}

/// The registered keys in ranking order
pub fn registry_keys() -> &'static [Key] {
    &REGISTRY_KEYS
}

pub fn is_registered(key: &Key) -> bool {
    SIGNATURES.contains_key(key)
}

pub fn signature_of(key: &Key) -> Result<KeySignature> {
    SIGNATURES
        .get(key)
        .cloned()
        .ok_or_else(|| TheoryError::InvalidKey(key.to_string()))
}

/// Whether notes in `key` should be spelled with sharps.
///
/// Keys without accidentals (C major, A minor) lean sharp. Keys outside the
/// registry fall back to the direction of their line-of-fifths position.
pub fn uses_sharp_polarity(key: &Key) -> bool {
    match SIGNATURES.get(key) {
        Some(signature) => signature.flats.is_empty(),
        None => {
            log::warn!("Key {} is not in the signature registry, using its fifths direction", key);
            key.fifths() >= 0
        }
    }
}
