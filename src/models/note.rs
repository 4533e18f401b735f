/// Spelled pitch classes
///
/// A `Note` is a letter plus a signed accidental count. Enharmonic spellings
/// are deliberately distinct values: `C#` and `Db` sound the same but sit at
/// different positions on the line of fifths, and the transposer relies on
/// that difference to keep spelling intent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TheoryError};

/// Widest accidental run accepted in either direction (`###` / `bbb`)
pub const MAX_ACCIDENTALS: i8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position of the natural on the line of fifths (F=-1, C=0, ... B=5)
    pub const fn fifths(self) -> i32 {
        match self {
            Letter::F => -1,
            Letter::C => 0,
            Letter::G => 1,
            Letter::D => 2,
            Letter::A => 3,
            Letter::E => 4,
            Letter::B => 5,
        }
    }

    /// Semitones above C
    pub const fn semitones(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Case-insensitive letter lookup
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// A letter with zero or more sharps (positive) or flats (negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: Letter,
    accidentals: i8,
}

impl Note {
    /// Build a note, rejecting accidental runs longer than `MAX_ACCIDENTALS`
    pub fn new(letter: Letter, accidentals: i8) -> Result<Note> {
        if accidentals.abs() > MAX_ACCIDENTALS {
            return Err(TheoryError::UnknownNote(spell(letter, accidentals)));
        }
        Ok(Note { letter, accidentals })
    }

    pub const fn natural(letter: Letter) -> Note {
        Note { letter, accidentals: 0 }
    }

    pub const fn sharp(letter: Letter) -> Note {
        Note { letter, accidentals: 1 }
    }

    pub const fn flat(letter: Letter) -> Note {
        Note { letter, accidentals: -1 }
    }

    pub const fn letter(&self) -> Letter {
        self.letter
    }

    pub const fn accidentals(&self) -> i8 {
        self.accidentals
    }

    /// Signed line-of-fifths position: each sharp is seven fifths up
    pub const fn position(&self) -> i32 {
        self.letter.fifths() + 7 * self.accidentals as i32
    }

    /// Sounding pitch class, 0 = C
    pub fn pitch_class(&self) -> u8 {
        (self.letter.semitones() as i32 + self.accidentals as i32).rem_euclid(12) as u8
    }

    /// Natural or single sharp/flat
    pub const fn is_simple(&self) -> bool {
        self.accidentals >= -1 && self.accidentals <= 1
    }
}

fn spell(letter: Letter, accidentals: i8) -> String {
    let mut name = String::with_capacity(4);
    name.push(letter.as_char());
    let mark = if accidentals > 0 { "#" } else { "b" };
    for _ in 0..accidentals.unsigned_abs() {
        name.push_str(mark);
    }
    name
}

/// Split a leading note name off `s`, greedily consuming its accidental run.
///
/// Accepts `#`, `x` (double sharp), `b` and the Unicode sharp/flat glyphs.
/// The run stops at the first accidental pointing the other way, so `C#b5`
/// yields `C#` with remainder `b5`.
pub(crate) fn parse_note_prefix(s: &str) -> Result<(Note, &str)> {
    let mut chars = s.chars();
    let letter = chars
        .next()
        .and_then(Letter::from_char)
        .ok_or_else(|| TheoryError::UnknownNote(s.to_string()))?;

    let mut end = letter.as_char().len_utf8();
    let mut accidentals: i32 = 0;
    let mut direction: i32 = 0;

    for c in chars {
        let step: i32 = match c {
            '#' | '♯' => 1,
            'x' | '𝄪' => 2,
            'b' | '♭' => -1,
            '𝄫' => -2,
            _ => break,
        };
        if direction != 0 && direction != step.signum() {
            break;
        }
        direction = step.signum();
        accidentals += step;
        end += c.len_utf8();
    }

    if accidentals.abs() > MAX_ACCIDENTALS as i32 {
        return Err(TheoryError::UnknownNote(s[..end].to_string()));
    }

    Ok((
        Note {
            letter,
            accidentals: accidentals as i8,
        },
        &s[end..],
    ))
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&spell(self.letter, self.accidentals))
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (note, rest) = parse_note_prefix(trimmed)?;
        if !rest.is_empty() {
            return Err(TheoryError::UnknownNote(s.to_string()));
        }
        Ok(note)
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> String {
        note.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naturals() {
        for letter in Letter::ALL {
            let name = letter.as_char().to_string();
            assert_eq!(name.parse::<Note>().unwrap(), Note::natural(letter));
        }
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!("F#".parse::<Note>().unwrap(), Note::sharp(Letter::F));
        assert_eq!("Bb".parse::<Note>().unwrap(), Note::flat(Letter::B));
        assert_eq!("Fx".parse::<Note>().unwrap(), Note::new(Letter::F, 2).unwrap());
        assert_eq!("F##".parse::<Note>().unwrap(), Note::new(Letter::F, 2).unwrap());
        assert_eq!("Bbb".parse::<Note>().unwrap(), Note::new(Letter::B, -2).unwrap());
        assert_eq!("E♭".parse::<Note>().unwrap(), Note::flat(Letter::E));
        assert_eq!("c#".parse::<Note>().unwrap(), Note::sharp(Letter::C));
    }

    #[test]
    fn test_parse_mixed_sharp_glyphs() {
        assert_eq!("Cx#".parse::<Note>().unwrap(), Note::new(Letter::C, 3).unwrap());
        assert_eq!("F♯".parse::<Note>().unwrap(), Note::sharp(Letter::F));
        assert_eq!("B𝄫".parse::<Note>().unwrap(), Note::new(Letter::B, -2).unwrap());
        assert!("Cxx".parse::<Note>().is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Note>().is_err());
        assert!("H".parse::<Note>().is_err());
        assert!("1".parse::<Note>().is_err());
        assert!("C####".parse::<Note>().is_err());
        assert!("Cm".parse::<Note>().is_err());
        assert!("C#b".parse::<Note>().is_err());
    }

    #[test]
    fn test_prefix_split_stops_at_opposite_accidental() {
        let (note, rest) = parse_note_prefix("C#b5").unwrap();
        assert_eq!(note, Note::sharp(Letter::C));
        assert_eq!(rest, "b5");

        let (note, rest) = parse_note_prefix("Ebbmaj7").unwrap();
        assert_eq!(note, Note::new(Letter::E, -2).unwrap());
        assert_eq!(rest, "maj7");
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::natural(Letter::C).to_string(), "C");
        assert_eq!(Note::sharp(Letter::F).to_string(), "F#");
        assert_eq!(Note::new(Letter::F, 2).unwrap().to_string(), "F##");
        assert_eq!(Note::new(Letter::B, -2).unwrap().to_string(), "Bbb");
    }

    #[test]
    fn test_positions() {
        assert_eq!(Note::natural(Letter::C).position(), 0);
        assert_eq!(Note::natural(Letter::G).position(), 1);
        assert_eq!(Note::natural(Letter::F).position(), -1);
        assert_eq!(Note::sharp(Letter::F).position(), 6);
        assert_eq!(Note::flat(Letter::B).position(), -2);
    }

    #[test]
    fn test_enharmonics_are_distinct() {
        let cs = Note::sharp(Letter::C);
        let db = Note::flat(Letter::D);
        assert_ne!(cs, db);
        assert_ne!(cs.position(), db.position());
        assert_eq!(cs.pitch_class(), db.pitch_class());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Note::sharp(Letter::F)).unwrap();
        assert_eq!(json, "\"F#\"");
        let parsed: Note = serde_json::from_str("\"Bb\"").unwrap();
        assert_eq!(parsed, Note::flat(Letter::B));
        assert!(serde_json::from_str::<Note>("\"H\"").is_err());
    }
}
