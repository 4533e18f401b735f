/// Key centers: a tonic note plus a mode
///
/// Keys parse from the usual lead-sheet spelling: `"G"`, `"Bb"`, `"F#m"`,
/// `"Ebmin"`, `"C# minor"`. Enharmonic keys (`C#` / `Db`) are distinct, since
/// they carry different signatures and spell their chords differently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::note::{parse_note_prefix, Note};
use crate::error::{Result, TheoryError};
use crate::theory::lof;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }

    pub fn parallel(self) -> Mode {
        match self {
            Mode::Major => Mode::Minor,
            Mode::Minor => Mode::Major,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    pub tonic: Note,
    pub mode: Mode,
}

impl Key {
    pub const fn new(tonic: Note, mode: Mode) -> Key {
        Key { tonic, mode }
    }

    pub const fn major(tonic: Note) -> Key {
        Key::new(tonic, Mode::Major)
    }

    pub const fn minor(tonic: Note) -> Key {
        Key::new(tonic, Mode::Minor)
    }

    /// Signed accidental count of the signature (sharps positive).
    ///
    /// A minor key shares its signature with the major a minor third up,
    /// which is three fifths further along the line.
    pub const fn fifths(&self) -> i32 {
        match self.mode {
            Mode::Major => self.tonic.position(),
            Mode::Minor => self.tonic.position() - 3,
        }
    }

    /// The key sharing this key's signature in the other mode
    pub fn relative(&self) -> Result<Key> {
        match self.mode {
            Mode::Major => Ok(Key::minor(lof::note_at(self.tonic.position() + 3)?)),
            Mode::Minor => Ok(Key::major(lof::note_at(self.tonic.position() - 3)?)),
        }
    }

    /// Same tonic, other mode
    pub fn parallel(&self) -> Key {
        Key::new(self.tonic, self.mode.parallel())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Mode::Major => write!(f, "{}", self.tonic),
            Mode::Minor => write!(f, "{}m", self.tonic),
        }
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TheoryError::InvalidKey(s.to_string());
        let (tonic, rest) = parse_note_prefix(s.trim()).map_err(|_| invalid())?;

        // Lead sheets write a capital M for major, so only the rest is case-folded
        let suffix = rest.trim();
        if suffix == "M" {
            return Ok(Key::major(tonic));
        }

        let mode = match suffix.to_lowercase().as_str() {
            "" | "maj" | "major" => Mode::Major,
            "m" | "min" | "minor" => Mode::Minor,
            _ => return Err(invalid()),
        };

        Ok(Key::new(tonic, mode))
    }
}

impl TryFrom<String> for Key {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> String {
        key.to_string()
    }
}
