/// Named intervals and their line-of-fifths distances
///
/// A transpose control in the UI offers "up a whole step", "down a minor
/// third" and so on. Each named interval carries exactly one fifths
/// distance, which is what the engine wants; the semitone count is kept
/// only for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "P1")]
    Unison,
    #[serde(rename = "A1")]
    AugmentedUnison,
    #[serde(rename = "m2")]
    MinorSecond,
    #[serde(rename = "M2")]
    MajorSecond,
    #[serde(rename = "m3")]
    MinorThird,
    #[serde(rename = "M3")]
    MajorThird,
    #[serde(rename = "P4")]
    PerfectFourth,
    #[serde(rename = "A4")]
    AugmentedFourth,
    #[serde(rename = "d5")]
    DiminishedFifth,
    #[serde(rename = "P5")]
    PerfectFifth,
    #[serde(rename = "m6")]
    MinorSixth,
    #[serde(rename = "M6")]
    MajorSixth,
    #[serde(rename = "m7")]
    MinorSeventh,
    #[serde(rename = "M7")]
    MajorSeventh,
    #[serde(rename = "P8")]
    Octave,
}

impl Interval {
    pub const ALL: [Interval; 15] = [
        Interval::Unison,
        Interval::AugmentedUnison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::AugmentedFourth,
        Interval::DiminishedFifth,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
        Interval::Octave,
    ];

    /// Fifths travelled when moving up by this interval
    pub const fn fifths(self) -> i32 {
        match self {
            Interval::Unison | Interval::Octave => 0,
            Interval::AugmentedUnison => 7,
            Interval::MinorSecond => -5,
            Interval::MajorSecond => 2,
            Interval::MinorThird => -3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => -1,
            Interval::AugmentedFourth => 6,
            Interval::DiminishedFifth => -6,
            Interval::PerfectFifth => 1,
            Interval::MinorSixth => -4,
            Interval::MajorSixth => 3,
            Interval::MinorSeventh => -2,
            Interval::MajorSeventh => 5,
        }
    }

    pub const fn semitones(self) -> u8 {
        match self {
            Interval::Unison => 0,
            Interval::AugmentedUnison | Interval::MinorSecond => 1,
            Interval::MajorSecond => 2,
            Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::AugmentedFourth | Interval::DiminishedFifth => 6,
            Interval::PerfectFifth => 7,
            Interval::MinorSixth => 8,
            Interval::MajorSixth => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
            Interval::Octave => 12,
        }
    }

    pub const fn up(self) -> i32 {
        self.fifths()
    }

    pub const fn down(self) -> i32 {
        -self.fifths()
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Interval::Unison => "P1",
            Interval::AugmentedUnison => "A1",
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::AugmentedFourth => "A4",
            Interval::DiminishedFifth => "d5",
            Interval::PerfectFifth => "P5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
            Interval::Octave => "P8",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Interval {
    type Err = String;

    // Case matters: m2 is a minor second, M2 a major one
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|interval| interval.short_name() == s.trim())
            .ok_or_else(|| format!("Invalid interval: '{}'. Expected one of: P1, A1, m2, M2, m3, M3, P4, A4, d5, P5, m6, M6, m7, M7, P8", s))
    }
}
