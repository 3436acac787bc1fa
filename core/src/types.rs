/// Single coordinate axis used for grid positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Width and height of the hidden-picture grid.
pub const GRID_SIZE: Coord = 6;

/// Total number of cells on the grid.
pub const GRID_CELLS: usize = GRID_SIZE as usize * GRID_SIZE as usize;

/// Lowest coordinate, on either axis, of the inner 4x4 sub-grid.
pub const INNER_MIN: Coord = 1;

/// Highest coordinate, on either axis, of the inner 4x4 sub-grid.
pub const INNER_MAX: Coord = 4;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((x, y): Coord2) -> bool {
    x < GRID_SIZE && y < GRID_SIZE
}

pub const fn is_inner((x, y): Coord2) -> bool {
    x >= INNER_MIN && x <= INNER_MAX && y >= INNER_MIN && y <= INNER_MAX
}

/// Row-major iteration over every cell of the grid.
pub fn iter_cells() -> impl Iterator<Item = Coord2> {
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| (x, y)))
}

/// Row-major iteration over the inner 4x4 sub-grid.
pub fn iter_inner_cells() -> impl Iterator<Item = Coord2> {
    (INNER_MIN..=INNER_MAX).flat_map(|y| (INNER_MIN..=INNER_MAX).map(move |x| (x, y)))
}
