//! Chord reduction for key analysis
//!
//! Detection only cares about the root and the triad family. Sevenths,
//! suspensions, added tones and slash basses are discarded here, and only
//! here; the transposer never sees this reduced form.

use crate::models::chord::{Chord, ChordQuality};
use crate::models::note::Note;
use crate::theory::lof;

/// Root plus coarse quality, the unit the vocabulary tables are written in
pub type Triad = (Note, ChordQuality);

/// Reduce a chord symbol to its triad, or `None` when no root can be read
pub fn normalize_for_analysis(symbol: &str) -> Option<Triad> {
    let trimmed = symbol.trim();
    let upper = Chord::split_bass(trimmed)
        .map(|(upper, _)| upper)
        .unwrap_or(trimmed);
    let (root, quality) = Chord::split_root(upper).ok()?;

    Some((lof::simplify(&root), ChordQuality::from_suffix(quality)))
}

pub fn triad_name(triad: &Triad) -> String {
    format!("{}{}", triad.0, triad.1.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced(symbol: &str) -> String {
        normalize_for_analysis(symbol)
            .map(|t| triad_name(&t))
            .unwrap_or_default()
    }

    #[test]
    fn test_extensions_are_dropped() {
        assert_eq!(reduced("Cmaj7"), "C");
        assert_eq!(reduced("G7sus4"), "G");
        assert_eq!(reduced("Am7"), "Am");
        assert_eq!(reduced("Bm7b5"), "Bm");
        assert_eq!(reduced("F#dim7"), "F#dim");
        assert_eq!(reduced("Eaug"), "Eaug");
        assert_eq!(reduced("Dadd9"), "D");
    }

    #[test]
    fn test_slash_bass_is_ignored() {
        assert_eq!(reduced("D/F#"), "D");
        assert_eq!(reduced("Am/G"), "Am");
        assert_eq!(reduced("C6/9"), "C");
    }

    #[test]
    fn test_double_accidental_roots_are_simplified() {
        assert_eq!(reduced("Bbb"), "A");
        assert_eq!(reduced("Fxm"), "Gm");
    }

    #[test]
    fn test_unreadable_symbols() {
        assert!(normalize_for_analysis("").is_none());
        assert!(normalize_for_analysis("N.C.").is_none());
        assert!(normalize_for_analysis("%").is_none());
    }
}
