use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Which weekly play session the recommendation is for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    /// Prioritize completing the large drawing.
    #[default]
    First,
    /// Prioritize the medium drawing and ignore the large one.
    Second,
    /// Prioritize the medium drawing while still weighing the large one.
    SecondAlternate,
}

/// Lookahead search variant chosen for the current progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Mode {
    /// Three-probe search minimizing open large placements; medium placements break ties for
    /// the first `med_depth` probes.
    Default { med_depth: u8 },
    /// One- or two-probe search minimizing open medium placements.
    MedFind { depth: u8 },
    /// Three-probe search minimizing open medium placements over every step.
    WeightedMedFind,
    /// Three-probe search over weighted medium placements, plus large placements for the first
    /// `large_depth` probes.
    WeightedAllFind { large_depth: u8 },
    /// One- or two-probe search minimizing open large placements.
    LargeFind { depth: u8 },
    /// Single probe over the whole grid keeping as many placements open as possible.
    SmallFind { med_found: bool, large_found: bool },
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default { .. } => "default",
            Self::MedFind { .. } => "med-find",
            Self::WeightedMedFind => "weighted-med-find",
            Self::WeightedAllFind { .. } => "weighted-all-find",
            Self::LargeFind { .. } => "large-find",
            Self::SmallFind { .. } => "small-find",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of the decision table: how to search, and what to tell the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub mode: Mode,
    pub advisories: Vec<Advisory>,
}

pub fn select_plan(session: Session, stats: &Statistics) -> Plan {
    let mode = select_mode(session, stats);
    log::debug!("solver mode: {mode}");
    Plan {
        mode,
        advisories: advisories(session, stats),
    }
}

fn depth(value: i16) -> u8 {
    value.clamp(0, u8::MAX as i16) as u8
}

pub fn select_mode(session: Session, stats: &Statistics) -> Mode {
    let large = i16::from(stats.large);
    let medium = i16::from(stats.medium);
    let empty = i16::from(stats.empty);
    let remaining = stats.remaining();
    let small_find = Mode::SmallFind {
        med_found: stats.medium_found(),
        large_found: stats.large_found(),
    };

    match session {
        Session::First => {
            // budget left once the large drawing is fully opened
            let after_large = 5 - empty;
            if large == 0 && remaining >= 6 {
                let med_depth = if medium == 0 { depth(after_large - 2) } else { 0 };
                Mode::Default { med_depth }
            } else if medium == 0 && after_large >= 4 {
                Mode::MedFind {
                    depth: depth(after_large - 3),
                }
            } else {
                small_find
            }
        }
        Session::Second => {
            let after_medium = 7 - empty - large;
            if medium == 0 && after_medium >= 2 {
                Mode::WeightedMedFind
            } else if medium == 0 && after_medium >= 0 {
                Mode::MedFind {
                    depth: depth(after_medium),
                }
            } else {
                small_find
            }
        }
        Session::SecondAlternate => {
            let after_medium = 7 - empty - large;
            if medium == 0 && remaining >= 4 {
                let large_depth = if large == 0 { depth(after_medium - 4) } else { 0 };
                Mode::WeightedAllFind { large_depth }
            } else if large == 0 && after_medium >= 6 {
                Mode::LargeFind {
                    depth: depth(after_medium - 5),
                }
            } else {
                small_find
            }
        }
    }
}
