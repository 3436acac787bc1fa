use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of the 6x6 hidden-picture grid as recorded by the player.
///
/// The engine only ever reads a `Grid`; mutation is left to the collaborator through
/// [`Grid::cycle_probe`], [`Grid::toggle_blocked`] and [`Grid::reset`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<CellState>", into = "Array2<CellState>")]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((GRID_SIZE, GRID_SIZE).to_nd_index()),
        }
    }

    /// Wraps a caller-supplied board indexed `[x, y]`, rejecting anything that is not 6x6.
    pub fn from_array(cells: Array2<CellState>) -> Result<Self> {
        let expected = (GRID_SIZE as usize, GRID_SIZE as usize);
        if cells.dim() != expected {
            return Err(SolverError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(SolverError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    pub fn get(&self, coords: Coord2) -> Option<CellState> {
        in_bounds(coords).then(|| self.cell_at(coords))
    }

    /// Records the next probe result on `coords`, returning the new state.
    pub fn cycle_probe(&mut self, coords: Coord2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = cell.cycle_probe();
        Ok(*cell)
    }

    pub fn toggle_blocked(&mut self, coords: Coord2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = cell.toggle_blocked();
        Ok(*cell)
    }

    pub fn reset(&mut self) {
        self.cells.fill(CellState::Unprobed);
    }

    /// Row-major iteration over every cell and its state.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellState)> + '_ {
        iter_cells().map(|coords| (coords, self.cell_at(coords)))
    }

    /// Cells that can no longer hold an unseen piece of a hidden region.
    pub fn occupancy(&self) -> Occupancy {
        self.iter()
            .filter(|(_, cell)| !cell.is_unprobed())
            .map(|(coords, _)| coords)
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Grid {
    type Output = CellState;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<CellState>> for Grid {
    type Error = SolverError;

    fn try_from(cells: Array2<CellState>) -> Result<Self> {
        Self::from_array(cells)
    }
}

impl From<Grid> for Array2<CellState> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

/// Parses six rows of six glyphs (see [`CellState::glyph`]), one row per line.
impl FromStr for Grid {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != GRID_SIZE as usize {
            return Err(SolverError::InvalidBoardShape);
        }

        let mut grid = Self::new();
        for (y, row) in (0..GRID_SIZE).zip(rows) {
            let glyphs: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != GRID_SIZE as usize {
                return Err(SolverError::InvalidBoardShape);
            }
            for (x, glyph) in (0..GRID_SIZE).zip(glyphs) {
                grid.cells[(x, y).to_nd_index()] = CellState::from_glyph(glyph)?;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                write!(f, "{}", self.cell_at((x, y)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
