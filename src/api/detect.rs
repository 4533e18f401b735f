//! Key detection API
//!
//! Feeds the key-suggestion panel. Detection itself never fails; the only
//! errors surfaced to JavaScript are values that cannot be deserialized.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, now_ms, serialize};
use crate::config::DetectionConfig;
use crate::detection::{detect_key as detect_key_core, detect_key_changes_with_config};
use crate::{wasm_info, wasm_log};

/// Detect the most likely key of a chord list.
///
/// # Parameters
/// - `chords_js`: JavaScript array of chord symbol strings
///
/// # Returns
/// `{ key, mode, confidence, fitness, alternatives, diatonic_chords, non_diatonic_chords }`
#[wasm_bindgen(js_name = detectKey)]
pub fn detect_key(chords_js: JsValue) -> Result<JsValue, JsValue> {
    let chords: Vec<String> = deserialize(chords_js, "Invalid chord list")?;
    wasm_info!("detectKey called: {} chords", chords.len());

    let started = now_ms();
    let result = detect_key_core(&chords);
    if let (Some(start), Some(end)) = (started, now_ms()) {
        wasm_log!(
            "  {} {} at {:.2} confidence in {:.2}ms",
            result.key,
            result.mode,
            result.confidence,
            end - start
        );
    }

    serialize(&result, "Failed to serialize key detection result")
}

/// Find modulations in a chord list.
///
/// `config_js` may be omitted; any fields it leaves out take their defaults.
#[wasm_bindgen(js_name = detectKeyChanges)]
pub fn detect_key_changes(chords_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let chords: Vec<String> = deserialize(chords_js, "Invalid chord list")?;
    let config: DetectionConfig = deserialize_or_default(config_js, "Invalid detection config")?;
    wasm_info!(
        "detectKeyChanges called: {} chords, window {}, threshold {}",
        chords.len(),
        config.window_size,
        config.change_threshold
    );

    let changes = detect_key_changes_with_config(&chords, &config);
    wasm_log!("  Found {} key changes", changes.len());

    serialize(&changes, "Failed to serialize key changes")
}
