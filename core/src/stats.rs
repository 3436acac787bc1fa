use serde::{Deserialize, Serialize};

use crate::*;

/// Probes available per week, shared by both sessions.
pub const ATTEMPT_BUDGET: i16 = 11;

/// Cells covered by the large drawing (3x2 or 2x3).
pub const LARGE_CELLS: u8 = 6;

/// Cells covered by the medium drawing (2x2).
pub const MEDIUM_CELLS: u8 = 4;

/// Progress counters derived from a grid snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub large: u8,
    pub medium: u8,
    pub empty: u8,
}

impl Statistics {
    pub fn new(large: u8, medium: u8, empty: u8) -> Result<Self> {
        let stats = Self {
            large,
            medium,
            empty,
        };
        stats.validate()?;
        Ok(stats)
    }

    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let mut stats = Self::default();
        for (_, cell) in grid.iter() {
            match cell {
                CellState::LargePieceRevealed => stats.large += 1,
                CellState::MediumPieceRevealed => stats.medium += 1,
                CellState::EmptyRevealed => stats.empty += 1,
                CellState::Unprobed | CellState::Blocked => {}
            }
        }
        stats.validate()?;
        Ok(stats)
    }

    pub fn validate(&self) -> Result<()> {
        if self.large > LARGE_CELLS {
            return Err(SolverError::TooManyLargeCells(self.large));
        }
        if self.medium > MEDIUM_CELLS {
            return Err(SolverError::TooManyMediumCells(self.medium));
        }
        Ok(())
    }

    /// Probes spent so far; blocked cells cost nothing.
    pub const fn spent(&self) -> i16 {
        self.large as i16 + self.medium as i16 + self.empty as i16
    }

    /// Probes left this week. Negative when the player recorded more probes than the budget.
    pub const fn remaining(&self) -> i16 {
        ATTEMPT_BUDGET - self.spent()
    }

    pub const fn large_found(&self) -> bool {
        self.large != 0
    }

    pub const fn medium_found(&self) -> bool {
        self.medium != 0
    }
}
