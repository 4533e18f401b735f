//! Key fitness scoring
//!
//! A weighted average over the chords of a progression. Each chord earns a
//! function weight (how strongly it points at the candidate key) and is
//! discounted by its position, so the opening chords count most:
//!
//! ```text
//! fitness = Σ function_weight(i) / sqrt(i + 1)  /  Σ 1 / sqrt(i + 1)
//! ```

use super::normalize::{normalize_for_analysis, Triad};
use super::vocabulary::{
    vocabulary_of, KeyVocabulary, DOMINANT_DEGREE, SUBDOMINANT_DEGREE, TONIC_DEGREE,
};
use crate::models::chord::ChordQuality;
use crate::models::key::Key;

pub const TONIC_WEIGHT: f64 = 3.0;
pub const DOMINANT_WEIGHT: f64 = 2.5;
pub const SUBDOMINANT_WEIGHT: f64 = 2.0;
pub const DIMINISHED_WEIGHT: f64 = 1.0;
pub const DIATONIC_WEIGHT: f64 = 1.5;
pub const BORROWED_WEIGHT: f64 = 0.8;
pub const CHROMATIC_WEIGHT: f64 = 0.3;

/// A chord symbol that survived normalization, with its reduced triad
pub(crate) type Analysed<'a> = (&'a str, Triad);

pub(crate) fn analyse<S: AsRef<str>>(chords: &[S]) -> Vec<Analysed<'_>> {
    chords
        .iter()
        .filter_map(|chord| {
            let symbol = chord.as_ref();
            normalize_for_analysis(symbol).map(|triad| (symbol, triad))
        })
        .collect()
}

pub fn position_weight(index: usize) -> f64 {
    1.0 / ((index + 1) as f64).sqrt()
}

/// Outside the key but plausibly borrowed: a parallel-mode triad, or any
/// major chord spelled with a 7 (treated as a secondary dominant)
fn is_likely_borrowed(symbol: &str, triad: &Triad, vocabulary: &KeyVocabulary) -> bool {
    vocabulary.in_parallel_mode(triad) || (triad.1 == ChordQuality::Major && symbol.contains('7'))
}

pub fn function_weight(symbol: &str, triad: &Triad, vocabulary: &KeyVocabulary) -> f64 {
    match vocabulary.degree_of(triad) {
        Some(TONIC_DEGREE) => TONIC_WEIGHT,
        Some(DOMINANT_DEGREE) => DOMINANT_WEIGHT,
        Some(SUBDOMINANT_DEGREE) => SUBDOMINANT_WEIGHT,
        Some(_) if triad.1 == ChordQuality::Diminished => DIMINISHED_WEIGHT,
        Some(_) => DIATONIC_WEIGHT,
        None if is_likely_borrowed(symbol, triad, vocabulary) => BORROWED_WEIGHT,
        None => CHROMATIC_WEIGHT,
    }
}

pub(crate) fn score(analysed: &[Analysed<'_>], vocabulary: &KeyVocabulary) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;

    for (index, (symbol, triad)) in analysed.iter().enumerate() {
        let position = position_weight(index);
        weighted += function_weight(symbol, triad, vocabulary) * position;
        total += position;
    }

    if total == 0.0 {
        0.0
    } else {
        weighted / total
    }
}

/// Fitness of `chords` against `key`; unreadable chords are skipped and
/// do not consume a position
pub fn fitness<S: AsRef<str>>(chords: &[S], key: &Key) -> f64 {
    let analysed = analyse(chords);
    match vocabulary_of(key) {
        Some(vocabulary) => score(&analysed, vocabulary),
        None => match KeyVocabulary::build(key) {
            Ok(vocabulary) => score(&analysed, &vocabulary),
            Err(e) => {
                log::warn!("Cannot score key {}: {}", key, e);
                0.0
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> Key {
        name.parse().unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_single_tonic_scores_tonic_weight() {
        assert!(approx(fitness(&["C"], &key("C")), TONIC_WEIGHT));
        assert!(approx(fitness(&["Am"], &key("Am")), TONIC_WEIGHT));
    }

    #[test]
    fn test_function_weights() {
        let c = key("C");
        assert!(approx(fitness(&["G"], &c), DOMINANT_WEIGHT));
        assert!(approx(fitness(&["F"], &c), SUBDOMINANT_WEIGHT));
        assert!(approx(fitness(&["Bdim"], &c), DIMINISHED_WEIGHT));
        assert!(approx(fitness(&["Dm7"], &c), DIATONIC_WEIGHT));
        assert!(approx(fitness(&["Bb"], &c), BORROWED_WEIGHT));
        assert!(approx(fitness(&["E7"], &c), BORROWED_WEIGHT));
        assert!(approx(fitness(&["E"], &c), CHROMATIC_WEIGHT));
        assert!(approx(fitness(&["F#m"], &c), CHROMATIC_WEIGHT));
    }

    #[test]
    fn test_earlier_chords_weigh_more() {
        let c = key("C");
        let expected = (TONIC_WEIGHT + DOMINANT_WEIGHT * position_weight(1))
            / (1.0 + position_weight(1));
        assert!(approx(fitness(&["C", "G"], &c), expected));
        assert!(fitness(&["C", "E"], &c) > fitness(&["E", "C"], &c));
    }

    #[test]
    fn test_unreadable_chords_are_skipped() {
        let c = key("C");
        assert!(approx(fitness(&["??", "C"], &c), TONIC_WEIGHT));
        assert_eq!(fitness::<&str>(&[], &c), 0.0);
        assert_eq!(fitness(&["N.C."], &c), 0.0);
    }

    #[test]
    fn test_unregistered_key_is_scored_on_the_fly() {
        assert!(approx(fitness(&["D#"], &key("D#")), TONIC_WEIGHT));
    }

    #[test]
    fn test_position_weight() {
        assert!(approx(position_weight(0), 1.0));
        assert!(approx(position_weight(3), 0.5));
    }
}
