//! Bounded brute-force lookahead over hypothetical probes.
//!
//! Every variant is a pure function of an [`Occupancy`] snapshot and its parameters. Candidates
//! are enumerated row-major and only a strictly better score replaces the incumbent, so the
//! first candidate in enumeration order wins every tie.

use core::fmt::Debug;

use smallvec::SmallVec;

use crate::*;
pub use pair::*;
pub use small::*;
pub use triple::*;

mod pair;
mod small;
mod triple;

type Candidates = SmallVec<[Coord2; GRID_CELLS]>;

/// Runs the search variant selected by `mode` on `grid`.
///
/// Returns `None` only when no legal probe combination exists for that variant.
pub fn search(grid: &Grid, mode: Mode) -> Option<Coord2> {
    let occupancy = grid.occupancy();
    match mode {
        Mode::Default { med_depth } => default_find(occupancy, med_depth),
        Mode::MedFind { depth } => med_find(occupancy, depth),
        Mode::WeightedMedFind => weighted_med_find(occupancy),
        Mode::WeightedAllFind { large_depth } => weighted_all_find(occupancy, large_depth),
        Mode::LargeFind { depth } => large_find(occupancy, depth),
        Mode::SmallFind {
            med_found,
            large_found,
        } => small_find(occupancy, med_found, large_found),
    }
}

/// Unprobed cells of the inner 4x4 sub-grid, row-major.
fn inner_candidates(occupancy: Occupancy) -> Candidates {
    iter_inner_cells()
        .filter(|&coords| !occupancy.contains(coords))
        .collect()
}

/// Unprobed cells of the whole grid, row-major.
fn all_candidates(occupancy: Occupancy) -> Candidates {
    iter_cells()
        .filter(|&coords| !occupancy.contains(coords))
        .collect()
}

/// Open placement counts after one step of a hypothetical probe sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Step {
    large: u32,
    medium: u32,
}

impl From<&OpenSets> for Step {
    fn from(open: &OpenSets) -> Self {
        Self {
            large: open.large_count(),
            medium: open.medium_count(),
        }
    }
}

/// Incumbent tracker that keeps the first candidate with the lowest score.
struct Best<S, T> {
    current: Option<(S, T)>,
}

impl<S: Ord + Debug, T: Debug> Best<S, T> {
    fn new() -> Self {
        Self { current: None }
    }

    fn offer(&mut self, score: S, candidate: T) {
        if self.current.as_ref().is_none_or(|(best, _)| score < *best) {
            self.current = Some((score, candidate));
        }
    }

    fn finish(self, variant: &str) -> Option<T> {
        match self.current {
            Some((score, candidate)) => {
                log::debug!("{variant}: best line {candidate:?} with score {score:?}");
                Some(candidate)
            }
            None => {
                log::debug!("{variant}: no candidate probes left");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_keeps_first_of_equal_scores() {
        let mut best = Best::new();
        best.offer(3, 'a');
        best.offer(3, 'b');
        best.offer(4, 'c');

        assert_eq!(best.finish("test"), Some('a'));
    }

    #[test]
    fn best_replaces_on_strict_improvement() {
        let mut best = Best::new();
        best.offer((2, 9), 'a');
        best.offer((2, 1), 'b');
        best.offer((1, 9), 'c');
        best.offer((1, 9), 'd');

        assert_eq!(best.finish("test"), Some('c'));
    }

    #[test]
    fn candidates_skip_marked_cells() {
        let occupancy = Occupancy::from_iter([(1, 1), (0, 0), (4, 4)]);

        let inner = inner_candidates(occupancy);
        assert_eq!(inner.len(), 14);
        assert_eq!(inner[0], (2, 1));

        let all = all_candidates(occupancy);
        assert_eq!(all.len(), 33);
        assert_eq!(all[0], (1, 0));
    }

    #[test]
    fn dispatch_follows_mode() {
        let grid = Grid::new();

        assert_eq!(
            search(&grid, Mode::MedFind { depth: 1 }),
            med_find(Occupancy::EMPTY, 1)
        );
        assert_eq!(
            search(
                &grid,
                Mode::SmallFind {
                    med_found: true,
                    large_found: true
                }
            ),
            Some((0, 0))
        );
    }
}
