use core::cmp::Reverse;

use super::*;

/// Single probe over the whole grid that keeps the most placements of the still-unfound regions
/// open.
///
/// Used once neither drawing can be completed within the budget: the best remaining play is
/// to stay away from them, so outer cells are fair game here.
pub fn small_find(occupancy: Occupancy, med_found: bool, large_found: bool) -> Option<Coord2> {
    let base = OpenSets::new(occupancy);
    let mut best = Best::new();

    for coords in all_candidates(occupancy) {
        let open = base.narrowed(occupancy.with(coords));
        let mut remaining = 0;
        if !med_found {
            remaining += open.medium_count();
        }
        if !large_found {
            remaining += open.large_count();
        }
        best.offer(Reverse(remaining), coords);
    }

    best.finish("small-find")
}
