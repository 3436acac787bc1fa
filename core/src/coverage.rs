use core::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Anchors (top-left corners) of open rectangle placements. Sized for the 2x2 shape, which has
/// the most placements on a 6x6 grid.
pub type AnchorSet = SmallVec<[Coord2; 25]>;

/// Footprint of a hidden region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub width: Coord,
    pub height: Coord,
}

impl Shape {
    /// Large drawing lying horizontally.
    pub const WIDE: Self = Self::new(3, 2);
    /// Large drawing standing vertically.
    pub const TALL: Self = Self::new(2, 3);
    /// Medium drawing.
    pub const MED: Self = Self::new(2, 2);

    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    /// Every anchor at which this shape fits within the grid, row-major.
    pub fn anchors(self) -> impl Iterator<Item = Coord2> {
        let x_end = GRID_SIZE.saturating_sub(self.width) + 1;
        let y_end = GRID_SIZE.saturating_sub(self.height) + 1;
        (0..y_end).flat_map(move |y| (0..x_end).map(move |x| (x, y)))
    }

    pub const fn mask_at(self, anchor: Coord2) -> Occupancy {
        Occupancy::rect(anchor, self.width, self.height)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Whether the shape placed at `anchor` covers only unprobed cells.
///
/// `anchor` must keep the shape within the grid.
pub fn is_open(shape: Shape, occupancy: Occupancy, anchor: Coord2) -> bool {
    !shape.mask_at(anchor).intersects(occupancy)
}

/// Open placements of `shape`. With `restrict`, only those anchors are re-checked: marking more
/// cells can only close placements, so a previous result is a valid superset to filter.
pub fn open_anchors(shape: Shape, occupancy: Occupancy, restrict: Option<&AnchorSet>) -> AnchorSet {
    match restrict {
        Some(anchors) => anchors
            .iter()
            .copied()
            .filter(|&anchor| is_open(shape, occupancy, anchor))
            .collect(),
        None => shape
            .anchors()
            .filter(|&anchor| is_open(shape, occupancy, anchor))
            .collect(),
    }
}

/// Open placements of every region shape for one (possibly hypothetical) occupancy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSets {
    pub wide: AnchorSet,
    pub tall: AnchorSet,
    pub medium: AnchorSet,
}

impl OpenSets {
    pub fn new(occupancy: Occupancy) -> Self {
        Self {
            wide: open_anchors(Shape::WIDE, occupancy, None),
            tall: open_anchors(Shape::TALL, occupancy, None),
            medium: open_anchors(Shape::MED, occupancy, None),
        }
    }

    /// Re-evaluates these sets against `occupancy`, which must be a superset of the
    /// occupancy they were computed for.
    pub fn narrowed(&self, occupancy: Occupancy) -> Self {
        Self {
            wide: open_anchors(Shape::WIDE, occupancy, Some(&self.wide)),
            tall: open_anchors(Shape::TALL, occupancy, Some(&self.tall)),
            medium: open_anchors(Shape::MED, occupancy, Some(&self.medium)),
        }
    }

    /// Open placements of the large drawing in either orientation.
    pub fn large_count(&self) -> u32 {
        (self.wide.len() + self.tall.len()) as u32
    }

    pub fn medium_count(&self) -> u32 {
        self.medium.len() as u32
    }
}
