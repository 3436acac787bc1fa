use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Extra guidance shown next to the recommended probe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    OpenLarge,
    OpenMedium,
    BlockLarge,
    BlockMedium,
    UseDefaultSecond,
    OpenLargeForPoints,
}

impl Advisory {
    pub const fn guidance(self) -> &'static str {
        use Advisory::*;
        match self {
            OpenLarge => {
                "Fully open the large drawing, both in-game and in the solver, to ensure a \
                 retelling and improve solver performance."
            }
            OpenMedium => {
                "Fully open the medium drawing, both in-game and in the solver, to maximize \
                 expected score and improve solver performance."
            }
            BlockLarge => {
                "Fully block off the large drawing in the solver (don't touch it in-game) to \
                 improve solver performance."
            }
            BlockMedium => {
                "Fully block off the medium drawing in the solver (don't touch it in-game) to \
                 improve solver performance."
            }
            UseDefaultSecond => {
                "The alternate second-attempt mode is active. The default second-attempt mode \
                 is recommended; keep this one only for a lower but steadier leaf income."
            }
            OpenLargeForPoints => {
                "Fully open the large drawing, both in-game and in the solver, to improve \
                 solver performance."
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.guidance())
    }
}

/// Threshold checks for the given session, in display order.
pub fn advisories(session: Session, stats: &Statistics) -> Vec<Advisory> {
    let (large, medium, empty) = (stats.large, stats.medium, stats.empty);
    let remaining = stats.remaining();
    let large_partial = large > 0 && large < LARGE_CELLS;
    let medium_partial = medium > 0 && medium < MEDIUM_CELLS;
    let large_completable = remaining + large as i16 >= LARGE_CELLS as i16;
    let medium_completable = remaining + medium as i16 >= MEDIUM_CELLS as i16;

    let mut out = Vec::new();
    match session {
        Session::First => {
            if large_partial && large_completable {
                out.push(Advisory::OpenLarge);
            }
            if large == LARGE_CELLS && medium_partial && empty < 2 {
                out.push(Advisory::OpenMedium);
            }
            if medium_partial && empty >= 2 {
                out.push(Advisory::BlockMedium);
            }
        }
        Session::Second => {
            if medium_partial && medium_completable {
                out.push(Advisory::OpenMedium);
            }
            if large > 0 {
                out.push(Advisory::BlockLarge);
            }
        }
        Session::SecondAlternate => {
            out.push(Advisory::UseDefaultSecond);
            if medium_partial && medium_completable {
                out.push(Advisory::OpenMedium);
            }
            if medium == MEDIUM_CELLS && large_partial && large_completable {
                out.push(Advisory::OpenLargeForPoints);
            }
            if large_partial && empty >= 2 {
                out.push(Advisory::BlockLarge);
            }
        }
    }
    out
}
