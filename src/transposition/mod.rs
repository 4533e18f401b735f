pub mod engine;
pub mod interval;

pub use engine::{
    resolve_enharmonic, transpose_chord, transpose_chord_in_context, transpose_note,
    transpose_note_in_context, transpose_progression, transpose_slash_chord,
    transpose_slash_chord_in_context, transposition_distance,
};
pub use interval::Interval;
