// Transposition behavior through the public crate API

use songbook_theory::theory::lof::{note_at, MAX_POSITION, MIN_POSITION};
use songbook_theory::theory::{registry_keys, signature_of, simplify};
use songbook_theory::{
    resolve_enharmonic, transpose_chord_in_context, transpose_note, transpose_progression,
    transpose_slash_chord, transposition_distance, Interval, Key, Note,
};

fn key(name: &str) -> Key {
    name.parse().expect("test key should parse")
}

fn note(name: &str) -> Note {
    name.parse().expect("test note should parse")
}

fn all_notes() -> Vec<Note> {
    (MIN_POSITION..=MAX_POSITION)
        .map(|p| note_at(p).expect("position inside the window"))
        .collect()
}

#[test]
fn test_round_trip_keeps_pitch_class() {
    for n in all_notes() {
        for d in -12..=12 {
            let Ok(there) = transpose_note(&n, d) else { continue };
            let back = transpose_note(&there, -d).expect("return trip stays in range");
            assert_eq!(back.pitch_class(), n.pitch_class(), "{} by {} and back", n, d);
        }
    }
}

#[test]
fn test_round_trip_keeps_spelling_for_simple_notes() {
    for n in all_notes().into_iter().filter(Note::is_simple) {
        for d in -12..=12 {
            let Ok(raw) = note_at(n.position() + d) else { continue };
            if !raw.is_simple() {
                continue;
            }
            let there = transpose_note(&n, d).expect("in range");
            assert_eq!(there, raw);
            assert_eq!(transpose_note(&there, -d).expect("in range"), n, "{} by {}", n, d);
        }
    }
}

#[test]
fn test_simplify_is_idempotent_and_keeps_pitch() {
    for n in all_notes() {
        let once = simplify(&n);
        assert_eq!(simplify(&once), once);
        assert_eq!(once.pitch_class(), n.pitch_class());
        assert!(once.accidentals().abs() <= 1);
    }
}

#[test]
fn test_identity_transposition_for_every_key() {
    let chords = vec!["C", "F#m7", "Bb/D", "Gsus4", "N.C.", "", "C6/9"];
    for k in registry_keys() {
        assert_eq!(transpose_progression(&chords, k, k), chords, "identity in {}", k);
    }
}

#[test]
fn test_signatures_have_one_polarity() {
    for k in registry_keys() {
        let signature = signature_of(k).expect("registered key");
        assert!(signature.sharps.is_empty() || signature.flats.is_empty(), "{}", k);
        assert!(signature.accidental_count() <= 7);
    }
}

#[test]
fn test_bb_up_a_fifth_in_c_sharp_is_plain_f() {
    let result = transpose_chord_in_context("Bb", 1, &key("C#"));
    assert_eq!(result, "F");
    assert!(!result.contains("bb") && !result.contains("##") && !result.contains('x'));
}

#[test]
fn test_resolve_enharmonic_follows_key_polarity() {
    assert_eq!(resolve_enharmonic(&note("C#"), &key("F")), note("Db"));
    assert_eq!(resolve_enharmonic(&note("Db"), &key("D")), note("C#"));
}

#[test]
fn test_unreadable_chord_is_returned_unchanged() {
    assert_eq!(
        transpose_chord_in_context("InvalidRoot123", 2, &key("G")),
        "InvalidRoot123"
    );
}

#[test]
fn test_slash_and_six_nine_chords() {
    assert_eq!(transpose_slash_chord("G/B", 2), "A/C#");
    assert_eq!(transpose_slash_chord("C6/9", 2), "D6/9");
    assert_eq!(transpose_slash_chord("Am7/G", -1), "Dm7/C");
}

#[test]
fn test_worship_set_from_g_to_b_flat() {
    let from = key("G");
    let to = key("Bb");
    assert_eq!(transposition_distance(&from, &to), -3);

    let chords = ["G", "Em", "C", "D7", "G/B"];
    assert_eq!(
        transpose_progression(&chords, &from, &to),
        vec!["Bb", "Gm", "Eb", "F7", "Bb/D"]
    );
}

#[test]
fn test_named_intervals_match_key_distances() {
    assert_eq!(Interval::MajorSecond.up(), transposition_distance(&key("C"), &key("D")));
    assert_eq!(Interval::MinorThird.up(), transposition_distance(&key("G"), &key("Bb")));
    assert_eq!(Interval::PerfectFifth.down(), transposition_distance(&key("G"), &key("C")));
}
