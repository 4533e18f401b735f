//! Transposition API
//!
//! JavaScript entry points for the chord sheet's transpose controls. Bad
//! keys and notes never throw: the input comes back unchanged and a
//! warning goes to the console.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, parse_key, parse_note, serialize, to_js_array};
use crate::theory::{enharmonic_pair_of, signature_of};
use crate::transposition::{
    resolve_enharmonic, transpose_progression as transpose_progression_core,
    transpose_slash_chord, transpose_slash_chord_in_context,
    transposition_distance as transposition_distance_core, Interval,
};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Transpose one chord symbol (slash bass included) by `fifths`
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(symbol: &str, fifths: i32) -> String {
    transpose_slash_chord(symbol, fifths)
}

/// Transpose one chord symbol and spell it for `key`
#[wasm_bindgen(js_name = transposeChordInContext)]
pub fn transpose_chord_in_context(symbol: &str, fifths: i32, key: &str) -> String {
    match parse_key(key, "transposeChordInContext") {
        Some(target) => transpose_slash_chord_in_context(symbol, fifths, &target),
        None => symbol.to_string(),
    }
}

/// Transpose a whole chord list from one key to another.
///
/// # Parameters
/// - `chords_js`: JavaScript array of chord symbol strings
/// - `from`, `to`: key names such as `"G"`, `"Bb"`, `"F#m"`
///
/// # Returns
/// An array the same length as the input. If either key cannot be read the
/// chords are returned untouched.
#[wasm_bindgen(js_name = transposeProgression)]
pub fn transpose_progression(chords_js: JsValue, from: &str, to: &str) -> Result<js_sys::Array, JsValue> {
    let chords: Vec<String> = deserialize(chords_js, "Invalid chord list")?;
    wasm_info!("transposeProgression called: {} chords, {} -> {}", chords.len(), from, to);

    let (Some(from_key), Some(to_key)) = (
        parse_key(from, "transposeProgression source key"),
        parse_key(to, "transposeProgression target key"),
    ) else {
        return Ok(to_js_array(chords));
    };

    let transposed = transpose_progression_core(&chords, &from_key, &to_key);
    wasm_log!("  Transposed by {} fifths", transposition_distance_core(&from_key, &to_key));

    Ok(to_js_array(transposed))
}

/// Fifths from one key's tonic to another's, or `undefined` if either key is unreadable
#[wasm_bindgen(js_name = transpositionDistance)]
pub fn transposition_distance(from: &str, to: &str) -> Option<i32> {
    let from_key = parse_key(from, "transpositionDistance source key")?;
    let to_key = parse_key(to, "transpositionDistance target key")?;
    Some(transposition_distance_core(&from_key, &to_key))
}

/// Fifths distance for a named interval (`"M2"`, `"P5"`, ...)
#[wasm_bindgen(js_name = intervalDistance)]
pub fn interval_distance(name: &str, ascending: bool) -> Option<i32> {
    match name.parse::<Interval>() {
        Ok(interval) if ascending => Some(interval.up()),
        Ok(interval) => Some(interval.down()),
        Err(e) => {
            wasm_warn!("intervalDistance: {}", e);
            None
        }
    }
}

#[wasm_bindgen(js_name = enharmonicPairOf)]
pub fn enharmonic_pair(note: &str) -> Option<String> {
    let note = parse_note(note, "enharmonicPairOf")?;
    enharmonic_pair_of(&note).map(|pair| pair.to_string())
}

/// Spell `note` the way `key` would write it
#[wasm_bindgen(js_name = resolveEnharmonic)]
pub fn resolve_enharmonic_spelling(note: &str, key: &str) -> String {
    match (parse_note(note, "resolveEnharmonic"), parse_key(key, "resolveEnharmonic")) {
        (Some(parsed), Some(target)) => resolve_enharmonic(&parsed, &target).to_string(),
        _ => note.to_string(),
    }
}

/// Sharps and flats of a registered key as `{ sharps: [...], flats: [...] }`,
/// or `null` for a key outside the registry
#[wasm_bindgen(js_name = keySignature)]
pub fn key_signature(key: &str) -> Result<JsValue, JsValue> {
    let Some(parsed) = parse_key(key, "keySignature") else {
        return Ok(JsValue::NULL);
    };

    match signature_of(&parsed) {
        Ok(signature) => serialize(&signature, "Failed to serialize key signature"),
        Err(e) => {
            wasm_warn!("keySignature: {}", e);
            Ok(JsValue::NULL)
        }
    }
}
