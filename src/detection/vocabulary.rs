/// Diatonic chord vocabularies
///
/// Each registered key gets its seven scale-degree triads (I ii iii IV V vi
/// vii° for major, i ii° III iv v VI VII for natural minor) plus the triads
/// of its parallel mode, used to spot borrowed chords. Roots are derived by
/// line-of-fifths offsets from the tonic so every key is spelled the way its
/// signature spells it.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::normalize::Triad;
use crate::error::Result;
use crate::models::chord::ChordQuality;
use crate::models::key::{Key, Mode};
use crate::theory::lof;
use crate::theory::signature::registry_keys;

use crate::models::chord::ChordQuality::{Diminished, Major, Minor};

/// (fifths from tonic, triad quality) per scale degree
const MAJOR_DEGREES: [(i32, ChordQuality); 7] = [
    (0, Major),
    (2, Minor),
    (4, Minor),
    (-1, Major),
    (1, Major),
    (3, Minor),
    (5, Diminished),
];

const MINOR_DEGREES: [(i32, ChordQuality); 7] = [
    (0, Minor),
    (2, Diminished),
    (-3, Major),
    (-1, Minor),
    (1, Minor),
    (-4, Major),
    (-2, Major),
];

pub const TONIC_DEGREE: usize = 0;
pub const SUBDOMINANT_DEGREE: usize = 3;
pub const DOMINANT_DEGREE: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyVocabulary {
    pub key: Key,
    /// Scale-degree triads, tonic first
    pub diatonic: Vec<Triad>,
    /// Triads of the parallel mode (same tonic)
    pub parallel: Vec<Triad>,
}

impl KeyVocabulary {
    pub fn build(key: &Key) -> Result<KeyVocabulary> {
        Ok(KeyVocabulary {
            key: *key,
            diatonic: degree_triads(key)?,
            parallel: degree_triads(&key.parallel())?,
        })
    }

    /// Scale degree (0-based) of a triad, if it is diatonic
    pub fn degree_of(&self, triad: &Triad) -> Option<usize> {
        self.diatonic.iter().position(|t| t == triad)
    }

    pub fn contains(&self, triad: &Triad) -> bool {
        self.degree_of(triad).is_some()
    }

    pub fn in_parallel_mode(&self, triad: &Triad) -> bool {
        self.parallel.contains(triad)
    }
}

fn degree_triads(key: &Key) -> Result<Vec<Triad>> {
    let degrees = match key.mode {
        Mode::Major => &MAJOR_DEGREES,
        Mode::Minor => &MINOR_DEGREES,
    };
    degrees
        .iter()
        .map(|(offset, quality)| -> Result<Triad> {
            Ok((lof::note_at(key.tonic.position() + offset)?, *quality))
        })
        .collect()
}

lazy_static! {
    static ref VOCABULARIES: HashMap<Key, KeyVocabulary> = registry_keys()
        .iter()
        .filter_map(|key| match KeyVocabulary::build(key) {
            Ok(vocabulary) => Some((*key, vocabulary)),
            Err(e) => {
                log::warn!("No vocabulary for {}: {}", key, e);
                None
            }
        })
        .collect();
}

/// Prebuilt vocabulary for a registered key
pub fn vocabulary_of(key: &Key) -> Option<&'static KeyVocabulary> {
    VOCABULARIES.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::normalize::triad_name;
    use crate::models::note::Note;

    fn names(triads: &[Triad]) -> Vec<String> {
        triads.iter().map(triad_name).collect()
    }

    fn vocab(name: &str) -> &'static KeyVocabulary {
        vocabulary_of(&name.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_every_registered_key_has_a_vocabulary() {
        for key in registry_keys() {
            let vocabulary = vocabulary_of(key).unwrap();
            assert_eq!(vocabulary.diatonic.len(), 7);
            assert_eq!(vocabulary.parallel.len(), 7);
            assert_eq!(vocabulary.diatonic[TONIC_DEGREE].0, key.tonic);
        }
    }

    #[test]
    fn test_c_major() {
        assert_eq!(
            names(&vocab("C").diatonic),
            vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]
        );
        assert_eq!(
            names(&vocab("C").parallel),
            vec!["Cm", "Ddim", "Eb", "Fm", "Gm", "Ab", "Bb"]
        );
    }

    #[test]
    fn test_a_minor() {
        assert_eq!(
            names(&vocab("Am").diatonic),
            vec!["Am", "Bdim", "C", "Dm", "Em", "F", "G"]
        );
    }

    #[test]
    fn test_sharp_and_flat_spelling() {
        assert_eq!(
            names(&vocab("E").diatonic),
            vec!["E", "F#m", "G#m", "A", "B", "C#m", "D#dim"]
        );
        assert_eq!(
            names(&vocab("Eb").diatonic),
            vec!["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "Ddim"]
        );
        assert_eq!(
            names(&vocab("C#").diatonic),
            vec!["C#", "D#m", "E#m", "F#", "G#", "A#m", "B#dim"]
        );
    }

    #[test]
    fn test_degree_lookup() {
        let c = vocab("C");
        let g = ("G".parse::<Note>().unwrap(), ChordQuality::Major);
        let gm = ("G".parse::<Note>().unwrap(), ChordQuality::Minor);
        assert_eq!(c.degree_of(&g), Some(DOMINANT_DEGREE));
        assert_eq!(c.degree_of(&gm), None);
        assert!(c.in_parallel_mode(&gm));
    }
}
