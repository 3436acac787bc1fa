use serde::{Deserialize, Serialize};

use crate::*;

/// Player-recorded state of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Unprobed,
    /// Solver-only annotation that takes a cell out of consideration for good.
    Blocked,
    EmptyRevealed,
    LargePieceRevealed,
    MediumPieceRevealed,
}

impl CellState {
    pub const fn is_unprobed(self) -> bool {
        matches!(self, Self::Unprobed)
    }

    /// Next state when the player records a probe result on this cell.
    pub const fn cycle_probe(self) -> Self {
        use CellState::*;
        match self {
            Unprobed | Blocked => EmptyRevealed,
            EmptyRevealed => LargePieceRevealed,
            LargePieceRevealed => MediumPieceRevealed,
            MediumPieceRevealed => Unprobed,
        }
    }

    pub const fn toggle_blocked(self) -> Self {
        match self {
            Self::Blocked => Self::Unprobed,
            _ => Self::Blocked,
        }
    }

    pub const fn glyph(self) -> char {
        use CellState::*;
        match self {
            Unprobed => '.',
            Blocked => '#',
            EmptyRevealed => 'o',
            LargePieceRevealed => 'L',
            MediumPieceRevealed => 'M',
        }
    }

    pub const fn from_glyph(glyph: char) -> Result<Self> {
        use CellState::*;
        Ok(match glyph {
            '.' => Unprobed,
            '#' => Blocked,
            'o' => EmptyRevealed,
            'L' => LargePieceRevealed,
            'M' => MediumPieceRevealed,
            other => return Err(SolverError::InvalidCell(other)),
        })
    }
}
