/// Chord symbols as lead sheets write them
///
/// A chord is a root note, an opaque quality suffix (`m7`, `sus4`, `maj9`,
/// `6/9`, ...) and an optional slash bass. Transposition only ever touches
/// the root and bass; the quality text is carried through byte for byte.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::note::{parse_note_prefix, Note};
use crate::error::{Result, TheoryError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    pub quality: String,
    pub bass: Option<Note>,
}

impl Chord {
    /// Split a symbol into its root and everything after it.
    ///
    /// The root is the letter plus its full accidental run; the remainder is
    /// returned untouched, slash part included.
    pub fn split_root(symbol: &str) -> Result<(Note, &str)> {
        parse_note_prefix(symbol)
            .map_err(|_| TheoryError::MalformedChordSymbol(symbol.to_string()))
    }

    /// Split a slash chord into upper structure and bass.
    ///
    /// Only the text after the last `/` is considered, and only when it is a
    /// complete note name; `C6/9` has no bass.
    pub fn split_bass(symbol: &str) -> Option<(&str, Note)> {
        let slash = symbol.rfind('/')?;
        let bass = symbol[slash + 1..].trim().parse::<Note>().ok()?;
        Some((&symbol[..slash], bass))
    }

    pub fn parse(symbol: &str) -> Result<Chord> {
        let trimmed = symbol.trim();
        let (upper, bass) = match Chord::split_bass(trimmed) {
            Some((upper, bass)) => (upper, Some(bass)),
            None => (trimmed, None),
        };
        let (root, quality) = Chord::split_root(upper)?;

        Ok(Chord {
            root,
            quality: quality.to_string(),
            bass,
        })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Triad family a chord reduces to for key analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl ChordQuality {
    /// Reduce a quality suffix to its triad family.
    ///
    /// First match wins: an `m` not followed by `aj` is minor, then `dim`,
    /// then `aug`, otherwise major. Extensions are dropped.
    pub fn from_suffix(quality: &str) -> ChordQuality {
        if is_minor_suffix(quality) {
            ChordQuality::Minor
        } else if quality.contains("dim") {
            ChordQuality::Diminished
        } else if quality.contains("aug") {
            ChordQuality::Augmented
        } else {
            ChordQuality::Major
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
        }
    }
}

fn is_minor_suffix(quality: &str) -> bool {
    quality.starts_with('m') && !quality[1..].starts_with("aj")
}
