//! Line-of-fifths registry
//!
//! Every supported spelling has exactly one integer position: C = 0, each
//! step right is a perfect fifth up (G = 1, D = 2, ...), each step left a
//! fifth down (F = -1, Bb = -2, ...). The window runs from Fbbb to B###,
//! which covers three times the widest key signature in either direction.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::error::{Result, TheoryError};
use crate::models::note::{Letter, Note};

pub const MIN_POSITION: i32 = -22;
pub const MAX_POSITION: i32 = 26;

/// Letters in line-of-fifths order, starting from F
const FIFTHS_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

lazy_static! {
    /// Spellings indexed by `position - MIN_POSITION`
    static ref LINE: Vec<Note> = (MIN_POSITION..=MAX_POSITION).map(spelling_at).collect();

    /// Double and triple accidentals mapped to their plainest alias
    static ref SIMPLIFIED: HashMap<Note, Note> = LINE
        .iter()
        .filter(|note| !note.is_simple())
        .map(|note| (*note, plainest_spelling(note)))
        .collect();

    /// The five black-key pitch classes, both ways round
    static ref ENHARMONIC_PAIRS: HashMap<Note, Note> = {
        let pairs = [
            (Note::sharp(Letter::C), Note::flat(Letter::D)),
            (Note::sharp(Letter::D), Note::flat(Letter::E)),
            (Note::sharp(Letter::F), Note::flat(Letter::G)),
            (Note::sharp(Letter::G), Note::flat(Letter::A)),
            (Note::sharp(Letter::A), Note::flat(Letter::B)),
        ];
        let mut table = HashMap::with_capacity(pairs.len() * 2);
        for (sharp, flat) in pairs {
            table.insert(sharp, flat);
            table.insert(flat, sharp);
        }
        table
    };
}

fn spelling_at(position: i32) -> Note {
    let shifted = position + 1;
    let letter = FIFTHS_ORDER[shifted.rem_euclid(7) as usize];
    // Only called inside the window, where the run never exceeds three
    Note::new(letter, shifted.div_euclid(7) as i8).unwrap_or(Note::natural(letter))
}

/// Natural if the pitch class has one, else a single accidental in the
/// direction the original spelling was already leaning.
fn plainest_spelling(note: &Note) -> Note {
    let pitch_class = note.pitch_class();
    let with_semitones = |semitones: u8| {
        Letter::ALL
            .into_iter()
            .find(|letter| letter.semitones() == semitones % 12)
    };

    if let Some(letter) = with_semitones(pitch_class) {
        return Note::natural(letter);
    }
    let single = if note.accidentals() > 0 {
        with_semitones(pitch_class + 11).map(Note::sharp)
    } else {
        with_semitones(pitch_class + 1).map(Note::flat)
    };
    single.unwrap_or(*note)
}

/// Line-of-fifths position of a spelled note name
pub fn position_of(name: &str) -> Result<i32> {
    let note: Note = name.parse()?;
    Ok(note.position())
}

/// Spelling at a line-of-fifths position
pub fn note_at(position: i32) -> Result<Note> {
    if !(MIN_POSITION..=MAX_POSITION).contains(&position) {
        return Err(TheoryError::OutOfRange(position));
    }
    Ok(LINE[(position - MIN_POSITION) as usize])
}

/// Plain alias for a double/triple accidental; anything else comes back as is
pub fn simplify(note: &Note) -> Note {
    SIMPLIFIED.get(note).copied().unwrap_or(*note)
}

/// The other single-accidental spelling of a black-key pitch class
pub fn enharmonic_pair_of(note: &Note) -> Option<Note> {
    ENHARMONIC_PAIRS.get(note).copied()
}
