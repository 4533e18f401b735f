//! Key change detection
//!
//! Splits a progression into consecutive, non-overlapping windows and runs
//! key detection on each one. A change is reported when a window settles
//! confidently on a key other than the one currently tracked.
//!
//! This is a local heuristic. It does not search for the best overall
//! segmentation, and a modulation that straddles a window boundary may be
//! reported late or missed.

use serde::{Deserialize, Serialize};

use super::detector::detect_key_with_config;
use crate::config::DetectionConfig;
use crate::models::key::Key;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyChange {
    /// Index of the first chord of the window where the new key was found
    pub position: usize,
    pub from_key: Key,
    pub to_key: Key,
    pub confidence: f64,
}

pub fn detect_key_changes<S: AsRef<str>>(chords: &[S], window_size: usize) -> Vec<KeyChange> {
    let config = DetectionConfig {
        window_size,
        ..DetectionConfig::default()
    };
    detect_key_changes_with_config(chords, &config)
}

pub fn detect_key_changes_with_config<S: AsRef<str>>(
    chords: &[S],
    config: &DetectionConfig,
) -> Vec<KeyChange> {
    if config.window_size == 0 {
        log::warn!("Key change detection needs a window of at least one chord");
        return Vec::new();
    }

    let mut windows = chords.chunks(config.window_size);
    let Some(first) = windows.next() else {
        return Vec::new();
    };

    let mut current = detect_key_with_config(first, config).as_key();
    let mut changes = Vec::new();

    for (index, window) in windows.enumerate() {
        let detected = detect_key_with_config(window, config);
        let key = detected.as_key();

        if key != current && detected.confidence > config.change_threshold {
            let position = (index + 1) * config.window_size;
            log::debug!(
                "Key change at chord {}: {} -> {} ({:.2})",
                position,
                current,
                key,
                detected.confidence
            );
            changes.push(KeyChange {
                position,
                from_key: current,
                to_key: key,
                confidence: detected.confidence,
            });
            current = key;
        }
    }

    changes
}
