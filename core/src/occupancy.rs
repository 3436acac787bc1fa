use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Bitset over the 36 grid cells, bit `y * 6 + x` set for every cell that is no longer
/// available to a hidden region (revealed or blocked).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupancy(u64);

impl Occupancy {
    pub const EMPTY: Self = Self(0);

    const fn bit((x, y): Coord2) -> u64 {
        1 << (y as u32 * GRID_SIZE as u32 + x as u32)
    }

    /// Mask of the `width` x `height` rectangle whose top-left corner is `anchor`.
    ///
    /// The rectangle must fit within the grid.
    pub const fn rect((ax, ay): Coord2, width: Coord, height: Coord) -> Self {
        let mut bits = 0;
        let mut y = ay;
        while y < ay + height {
            let mut x = ax;
            while x < ax + width {
                bits |= Self::bit((x, y));
                x += 1;
            }
            y += 1;
        }
        Self(bits)
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn contains(self, coords: Coord2) -> bool {
        self.0 & Self::bit(coords) != 0
    }

    /// Copy of this occupancy with `coords` marked, used for hypothetical probes.
    pub const fn with(self, coords: Coord2) -> Self {
        Self(self.0 | Self::bit(coords))
    }

    pub fn insert(&mut self, coords: Coord2) {
        self.0 |= Self::bit(coords);
    }

    pub fn remove(&mut self, coords: Coord2) {
        self.0 &= !Self::bit(coords);
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_superset_of(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl FromIterator<Coord2> for Occupancy {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        let mut occupancy = Self::EMPTY;
        for coords in iter {
            occupancy.insert(coords);
        }
        occupancy
    }
}

impl fmt::Debug for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Occupancy({:#011x})", self.0)
    }
}
