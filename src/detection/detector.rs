//! Key detection over a chord progression
//!
//! Every registered key is scored with [`fitness`](super::fitness), the
//! candidates are ranked, and the gap between the winner and the runner-up
//! becomes the confidence shown in the key-suggestion panel.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::fitness::{analyse, score, Analysed};
use super::vocabulary::vocabulary_of;
use crate::config::DetectionConfig;
use crate::models::key::{Key, Mode};
use crate::models::note::{Letter, Note};
use crate::theory::signature::registry_keys;

/// Confidence never reaches certainty
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Fewer usable chords than this and the confidence is discounted
pub const MIN_CHORDS_FOR_FULL_CONFIDENCE: usize = 3;

pub const SHORT_INPUT_PENALTY: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyCandidate {
    pub key: Note,
    pub mode: Mode,
    pub fitness: f64,
}

impl KeyCandidate {
    pub fn as_key(&self) -> Key {
        Key::new(self.key, self.mode)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDetectionResult {
    pub key: Note,
    pub mode: Mode,
    pub confidence: f64,
    pub fitness: f64,
    pub alternatives: Vec<KeyCandidate>,
    /// Input chords inside the winning key's vocabulary, in input order
    pub diatonic_chords: Vec<String>,
    /// Everything else, unreadable symbols included
    pub non_diatonic_chords: Vec<String>,
}

impl KeyDetectionResult {
    /// C major with zero confidence: the answer when there is nothing to go on
    fn unknown<S: AsRef<str>>(chords: &[S]) -> Self {
        KeyDetectionResult {
            key: Note::natural(Letter::C),
            mode: Mode::Major,
            confidence: 0.0,
            fitness: 0.0,
            alternatives: Vec::new(),
            diatonic_chords: Vec::new(),
            non_diatonic_chords: chords.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    pub fn as_key(&self) -> Key {
        Key::new(self.key, self.mode)
    }
}

pub fn detect_key<S: AsRef<str>>(chords: &[S]) -> KeyDetectionResult {
    detect_key_with_config(chords, &DetectionConfig::default())
}

pub fn detect_key_with_config<S: AsRef<str>>(
    chords: &[S],
    config: &DetectionConfig,
) -> KeyDetectionResult {
    let analysed = analyse(chords);
    if analysed.is_empty() {
        log::debug!("No readable chords among {} symbols, defaulting to C major", chords.len());
        return KeyDetectionResult::unknown(chords);
    }

    let ranked = rank_keys(&analysed);
    let best = &ranked[0];
    let second = ranked.get(1).map(|c| c.fitness);

    let mut confidence = confidence_from(best.fitness, second);
    if analysed.len() < MIN_CHORDS_FOR_FULL_CONFIDENCE {
        confidence *= SHORT_INPUT_PENALTY;
    }

    let floor = config.alternative_ratio * best.fitness;
    let alternatives: Vec<KeyCandidate> = ranked
        .iter()
        .skip(1)
        .filter(|candidate| candidate.fitness > floor)
        .take(config.max_alternatives)
        .cloned()
        .collect();

    let (diatonic_chords, non_diatonic_chords) = partition(chords, &best.as_key());

    log::debug!(
        "Detected {} {} (fitness {:.3}, confidence {:.3}) from {} chords",
        best.key,
        best.mode,
        best.fitness,
        confidence,
        analysed.len()
    );

    KeyDetectionResult {
        key: best.key,
        mode: best.mode,
        confidence,
        fitness: best.fitness,
        alternatives,
        diatonic_chords,
        non_diatonic_chords,
    }
}

/// All registered keys, best first; ties keep registry order
fn rank_keys(analysed: &[Analysed<'_>]) -> Vec<KeyCandidate> {
    let mut ranked: Vec<KeyCandidate> = registry_keys()
        .iter()
        .filter_map(|key| {
            vocabulary_of(key).map(|vocabulary| KeyCandidate {
                key: key.tonic,
                mode: key.mode,
                fitness: score(analysed, vocabulary),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
    ranked
}

fn confidence_from(best: f64, second: Option<f64>) -> f64 {
    if best <= 0.0 {
        return 0.0;
    }
    match second {
        Some(second) => MAX_CONFIDENCE.min(best * (0.5 + 0.5 * (best - second) / best)),
        None => best,
    }
}

fn partition<S: AsRef<str>>(chords: &[S], key: &Key) -> (Vec<String>, Vec<String>) {
    let vocabulary = vocabulary_of(key);
    let mut diatonic = Vec::new();
    let mut non_diatonic = Vec::new();

    for chord in chords {
        let symbol = chord.as_ref();
        let in_key = match (vocabulary, super::normalize::normalize_for_analysis(symbol)) {
            (Some(vocabulary), Some(triad)) => vocabulary.contains(&triad),
            _ => false,
        };
        if in_key {
            diatonic.push(symbol.to_string());
        } else {
            non_diatonic.push(symbol.to_string());
        }
    }

    (diatonic, non_diatonic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> Key {
        name.parse().unwrap()
    }

    #[test]
    fn test_empty_input_defaults_to_c_major() {
        let result = detect_key::<&str>(&[]);
        assert_eq!(result.as_key(), key("C"));
        assert_eq!(result.confidence, 0.0);
        assert!(result.alternatives.is_empty());
        assert!(result.diatonic_chords.is_empty());
        assert!(result.non_diatonic_chords.is_empty());
    }

    #[test]
    fn test_all_invalid_defaults_to_c_major() {
        let result = detect_key(&["N.C.", "%", ""]);
        assert_eq!(result.as_key(), key("C"));
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.non_diatonic_chords.len(), 3);
    }

    #[test]
    fn test_pop_progression_in_c() {
        let result = detect_key(&["C", "Am", "F", "G"]);
        assert_eq!(result.key.to_string(), "C");
        assert_eq!(result.mode, Mode::Major);
        assert!(result.confidence > 0.8);
        assert!(result.confidence <= MAX_CONFIDENCE);
    }

    #[test]
    fn test_order_change_keeps_key() {
        let result = detect_key(&["Am", "F", "C", "G"]);
        assert_eq!(result.as_key(), key("C"));
        assert!(result.confidence > 0.8);
    }

    #[test]
    fn test_alternatives_are_ranked_and_capped() {
        let result = detect_key(&["C", "Am", "F", "G"]);
        assert_eq!(result.alternatives.len(), 3);
        assert_eq!(result.alternatives[0].as_key(), key("F"));
        assert_eq!(result.alternatives[1].as_key(), key("Am"));
        assert_eq!(result.alternatives[2].as_key(), key("G"));
        for pair in result.alternatives.windows(2) {
            assert!(pair[0].fitness >= pair[1].fitness);
        }
        assert!(result.alternatives.iter().all(|a| a.fitness < result.fitness));
    }

    #[test]
    fn test_short_input_is_discounted() {
        let result = detect_key(&["G"]);
        assert_eq!(result.as_key(), key("G"));
        assert!((result.confidence - MAX_CONFIDENCE * SHORT_INPUT_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_diatonic_partition() {
        let result = detect_key(&["C", "E7", "Am", "F", "G", "??"]);
        assert_eq!(result.as_key(), key("C"));
        assert_eq!(result.diatonic_chords, vec!["C", "Am", "F", "G"]);
        assert_eq!(result.non_diatonic_chords, vec!["E7", "??"]);
    }

    #[test]
    fn test_minor_progression() {
        let result = detect_key(&["Em", "C", "D", "Em", "Am", "B7", "Em"]);
        assert_eq!(result.as_key(), key("Em"));
    }

    #[test]
    fn test_flat_key_progression() {
        let result = detect_key(&["Bb", "Eb", "F", "Gm", "Bb"]);
        assert_eq!(result.as_key(), key("Bb"));
    }

    #[test]
    fn test_confidence_formula() {
        assert_eq!(confidence_from(0.0, Some(0.0)), 0.0);
        assert!((confidence_from(1.0, Some(0.5)) - 0.75).abs() < 1e-9);
        assert_eq!(confidence_from(2.0, Some(1.0)), MAX_CONFIDENCE);
        assert_eq!(confidence_from(0.6, None), 0.6);
    }

    #[test]
    fn test_result_serializes_for_js() {
        let result = detect_key(&["D", "G", "A"]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["key"], "D");
        assert_eq!(json["mode"], "major");
        assert!(json["alternatives"].is_array());
    }
}
