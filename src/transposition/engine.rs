/// Chord transposition along the line of fifths
///
/// Distances are signed fifths counts, never semitones: "up a fourth" is
/// -1 and "up an augmented unison" is +7, even though both land a semitone
/// apart from their enharmonic rivals. The caller picks the interval; the
/// engine only moves and respells.
///
/// Note-level functions return `Result`. Chord-level and progression-level
/// functions never fail: a symbol that cannot be transposed is returned as
/// given and a warning is logged, so one bad chord never blocks a song.

use crate::error::{Result, TheoryError};
use crate::models::chord::Chord;
use crate::models::key::Key;
use crate::models::note::Note;
use crate::theory::lof;
use crate::theory::signature::{is_registered, uses_sharp_polarity};

/// Fifths between two key tonics
pub fn transposition_distance(from: &Key, to: &Key) -> i32 {
    to.tonic.position() - from.tonic.position()
}

/// Move a note along the line of fifths and strip any double accidental
pub fn transpose_note(note: &Note, fifths: i32) -> Result<Note> {
    let moved = lof::note_at(note.position().saturating_add(fifths))?;
    Ok(lof::simplify(&moved))
}

/// Respell `note` for the key it now lives in.
///
/// Double accidentals always lose. Otherwise a black-key note takes the
/// sharp or flat spelling matching the key's signature; everything else is
/// left alone. A key outside the registry has no signature to follow, so
/// single accidentals keep their spelling there.
pub fn resolve_enharmonic(note: &Note, target_key: &Key) -> Note {
    let simplified = lof::simplify(note);
    if simplified != *note {
        return simplified;
    }

    match lof::enharmonic_pair_of(note) {
        Some(pair) if is_registered(target_key) => {
            let wants_sharp = uses_sharp_polarity(target_key);
            if (note.accidentals() > 0) == wants_sharp {
                *note
            } else {
                pair
            }
        }
        _ => *note,
    }
}

/// `InvalidKey` unless `target_key` is in the signature registry
pub fn transpose_note_in_context(note: &Note, fifths: i32, target_key: &Key) -> Result<Note> {
    ensure_registered(target_key)?;
    let moved = transpose_note(note, fifths)?;
    Ok(resolve_enharmonic(&moved, target_key))
}

fn ensure_registered(key: &Key) -> Result<()> {
    if is_registered(key) {
        Ok(())
    } else {
        Err(TheoryError::InvalidKey(key.to_string()))
    }
}

/// Symbols pass through untouched when the key they are headed for is unknown
fn keep_for_unknown_key(symbol: &str, key: &Key) -> Option<String> {
    match ensure_registered(key) {
        Ok(()) => None,
        Err(e) => {
            log::warn!("Leaving chord '{}' untransposed: {}", symbol, e);
            Some(symbol.to_string())
        }
    }
}

fn respell_root<F>(symbol: &str, respell: F) -> Result<String>
where
    F: Fn(&Note) -> Result<Note>,
{
    let (root, quality) = Chord::split_root(symbol.trim())?;
    let new_root = respell(&root)?;
    Ok(format!("{}{}", new_root, quality))
}

fn respell_root_or_keep<F>(symbol: &str, respell: F) -> String
where
    F: Fn(&Note) -> Result<Note>,
{
    match respell_root(symbol, respell) {
        Ok(transposed) => transposed,
        Err(e) => {
            log::warn!("Leaving chord '{}' untransposed: {}", symbol, e);
            symbol.to_string()
        }
    }
}

fn respell_slash_or_keep<F>(symbol: &str, respell: F) -> String
where
    F: Fn(&Note) -> Result<Note>,
{
    let Some((upper, bass)) = Chord::split_bass(symbol.trim()) else {
        return respell_root_or_keep(symbol, respell);
    };

    let upper = respell_root_or_keep(upper, &respell);
    let bass = match respell(&bass) {
        Ok(moved) => moved,
        Err(e) => {
            log::warn!("Leaving bass of '{}' untransposed: {}", symbol, e);
            bass
        }
    };
    format!("{}/{}", upper, bass)
}

/// Transpose the root of a chord symbol, keeping its quality text verbatim
pub fn transpose_chord(symbol: &str, fifths: i32) -> String {
    respell_root_or_keep(symbol, |root| transpose_note(root, fifths))
}

pub fn transpose_chord_in_context(symbol: &str, fifths: i32, target_key: &Key) -> String {
    if let Some(unchanged) = keep_for_unknown_key(symbol, target_key) {
        return unchanged;
    }
    respell_root_or_keep(symbol, |root| {
        transpose_note_in_context(root, fifths, target_key)
    })
}

/// Like `transpose_chord`, moving a slash bass as well
pub fn transpose_slash_chord(symbol: &str, fifths: i32) -> String {
    respell_slash_or_keep(symbol, |note| transpose_note(note, fifths))
}

pub fn transpose_slash_chord_in_context(symbol: &str, fifths: i32, target_key: &Key) -> String {
    if let Some(unchanged) = keep_for_unknown_key(symbol, target_key) {
        return unchanged;
    }
    respell_slash_or_keep(symbol, |note| {
        transpose_note_in_context(note, fifths, target_key)
    })
}

/// Move every chord of a song from one key to another.
///
/// A zero distance (same key, or same tonic in the other mode) hands the
/// chords back exactly as written, and so does a key outside the registry.
pub fn transpose_progression<S: AsRef<str>>(chords: &[S], from: &Key, to: &Key) -> Vec<String> {
    let as_written = || -> Vec<String> {
        chords.iter().map(|c| c.as_ref().to_string()).collect()
    };

    if let Err(e) = ensure_registered(from).and_then(|_| ensure_registered(to)) {
        log::warn!("Leaving {} chords untransposed: {}", chords.len(), e);
        return as_written();
    }

    let fifths = transposition_distance(from, to);
    log::debug!(
        "Transposing {} chords from {} to {} ({:+} fifths)",
        chords.len(),
        from,
        to,
        fifths
    );

    if fifths == 0 {
        return as_written();
    }

    chords
        .iter()
        .map(|chord| transpose_slash_chord_in_context(chord.as_ref(), fifths, to))
        .collect()
}
