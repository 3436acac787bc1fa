#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use advisory::*;
pub use cell::*;
pub use coverage::*;
pub use error::*;
pub use grid::*;
pub use mode::*;
pub use occupancy::*;
pub use search::*;
pub use stats::*;
pub use types::*;

mod advisory;
mod cell;
mod coverage;
mod error;
mod grid;
mod mode;
mod occupancy;
mod search;
mod stats;
mod types;

/// Next probe to make and the guidance that goes with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub mode: Mode,
    /// `None` when the selected search has no legal probe left to suggest.
    pub target: Option<Coord2>,
    pub advisories: Vec<Advisory>,
}

impl Recommendation {
    pub fn is_target(&self, coords: Coord2) -> bool {
        self.target == Some(coords)
    }
}

/// Recomputes the recommendation for `grid` from scratch.
///
/// Fails only when the grid records more cells of a drawing than that drawing covers.
pub fn recommend(grid: &Grid, session: Session) -> Result<Recommendation> {
    let stats = Statistics::from_grid(grid)?;
    log::debug!(
        "session {session:?}: {} cells marked, large {}, medium {}, empty {}, remaining {}",
        grid.occupancy().count(),
        stats.large,
        stats.medium,
        stats.empty,
        stats.remaining()
    );

    let Plan { mode, advisories } = select_plan(session, &stats);
    let target = search(grid, mode);
    Ok(Recommendation {
        mode,
        target,
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &str) -> Grid {
        rows.parse().unwrap()
    }

    #[test]
    fn fresh_grid_first_session_uses_default_search() {
        let rec = recommend(&Grid::new(), Session::First).unwrap();

        assert_eq!(rec.mode, Mode::Default { med_depth: 3 });
        assert!(is_inner(rec.target.unwrap()));
        assert!(rec.advisories.is_empty());
    }

    #[test]
    fn found_large_switches_to_medium_hunt() {
        let grid = grid(
            "
            ......
            .LLL..
            .LLL..
            ......
            ......
            ......
            ",
        );

        let rec = recommend(&grid, Session::First).unwrap();

        assert_eq!(rec.mode, Mode::MedFind { depth: 2 });
        let target = rec.target.unwrap();
        assert_eq!(grid.cell_at(target), CellState::Unprobed);
        assert!(is_inner(target));
    }

    #[test]
    fn exhausted_budget_may_target_border() {
        let grid = grid(
            "
            ......
            .oooo.
            .oooo.
            .o....
            ......
            ......
            ",
        );

        let rec = recommend(&grid, Session::First).unwrap();

        assert_eq!(
            rec.mode,
            Mode::SmallFind {
                med_found: false,
                large_found: false
            }
        );
        // every placement over (0, 0) already includes the probed (1, 1)
        assert_eq!(rec.target, Some((0, 0)));
        assert!(rec.is_target((0, 0)));
    }

    #[test]
    fn partial_large_gets_single_open_advisory() {
        let grid = grid(
            "
            ......
            ..LLL.
            ......
            ......
            ......
            ......
            ",
        );

        let rec = recommend(&grid, Session::First).unwrap();

        assert_eq!(rec.advisories, [Advisory::OpenLarge]);
    }

    #[test]
    fn recommendation_is_repeatable() {
        let grid = grid(
            "
            .#....
            ..o...
            ...L..
            ...L#.
            ......
            ...o..
            ",
        );

        for session in [Session::First, Session::Second, Session::SecondAlternate] {
            assert_eq!(
                recommend(&grid, session).unwrap(),
                recommend(&grid.clone(), session).unwrap()
            );
        }
    }

    #[test]
    fn blocked_cells_are_never_targeted() {
        let mut grid = Grid::new();
        for coords in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            grid.toggle_blocked(coords).unwrap();
        }

        for session in [Session::First, Session::Second, Session::SecondAlternate] {
            let rec = recommend(&grid, session).unwrap();
            assert_eq!(grid.cell_at(rec.target.unwrap()), CellState::Unprobed);
        }
    }

    #[test]
    fn exhausted_second_session_looks_two_probes_ahead() {
        let grid = grid(
            "
            .....o
            .o..o.
            o.....
            .....o
            ......
            o..o..
            ",
        );
        let rec = recommend(&grid, Session::Second).unwrap();

        assert_eq!(rec.mode, Mode::MedFind { depth: 0 });
        assert_eq!(rec.target, Some((3, 3)));
    }

    #[test]
    fn rejects_overfilled_regions() {
        let grid = grid(
            "
            MMM...
            MM....
            ......
            ......
            ......
            ......
            ",
        );

        assert_eq!(
            recommend(&grid, Session::Second),
            Err(SolverError::TooManyMediumCells(5))
        );
    }

    #[test]
    fn serializes_with_tagged_mode() {
        let rec = Recommendation {
            mode: Mode::MedFind { depth: 2 },
            target: Some((1, 4)),
            advisories: alloc::vec![Advisory::UseDefaultSecond],
        };

        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["mode"]["mode"], "med-find");
        assert_eq!(json["mode"]["depth"], 2);
        assert_eq!(json["target"][0], 1);
        assert_eq!(json["target"][1], 4);
        assert_eq!(json["advisories"][0], "use_default_second");
    }
}
