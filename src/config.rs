//! Tunables for key detection
//!
//! Defaults reproduce the documented behaviour. JS callers may pass a partial
//! object; missing fields take their default.

use serde::{Deserialize, Serialize};

/// Chords per window when scanning for key changes
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// A window must beat this confidence before a key change is reported
pub const DEFAULT_CHANGE_THRESHOLD: f64 = 0.7;

pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// Alternatives must reach this fraction of the winner's fitness
pub const DEFAULT_ALTERNATIVE_RATIO: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub window_size: usize,
    pub change_threshold: f64,
    pub max_alternatives: usize,
    pub alternative_ratio: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            change_threshold: DEFAULT_CHANGE_THRESHOLD,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            alternative_ratio: DEFAULT_ALTERNATIVE_RATIO,
        }
    }
}
