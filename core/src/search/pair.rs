use super::*;

/// Region whose open placements a one- or two-probe search minimizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Target {
    Medium,
    Large,
}

impl Target {
    fn count(self, open: &OpenSets) -> u32 {
        match self {
            Self::Medium => open.medium_count(),
            Self::Large => open.large_count(),
        }
    }

    const fn variant(self) -> &'static str {
        match self {
            Self::Medium => "med-find",
            Self::Large => "large-find",
        }
    }
}

/// Depth 1 looks at single probes, any other depth (0 included) at ordered pairs.
fn best_pair(occupancy: Occupancy, target: Target, depth: u8) -> Option<Coord2> {
    let cells = inner_candidates(occupancy);
    let base = OpenSets::new(occupancy);

    if depth == 1 {
        let mut best = Best::new();
        for &first in &cells {
            let remaining = target.count(&base.narrowed(occupancy.with(first)));
            best.offer(remaining, first);
        }
        return best.finish(target.variant());
    }

    let mut best = Best::new();
    for &first in &cells {
        let occupancy1 = occupancy.with(first);
        let open1 = base.narrowed(occupancy1);
        let remaining1 = target.count(&open1);

        for &second in &cells {
            if second == first {
                continue;
            }
            let remaining2 = target.count(&open1.narrowed(occupancy1.with(second)));
            best.offer((remaining1 + remaining2, remaining1), [first, second]);
        }
    }
    best.finish(target.variant()).map(|[first, _]| first)
}

/// Minimizes open medium placements over the next probe when `depth` is 1, over the next two
/// otherwise.
pub fn med_find(occupancy: Occupancy, depth: u8) -> Option<Coord2> {
    best_pair(occupancy, Target::Medium, depth)
}

/// Minimizes open large placements, both orientations, over the next probe when `depth` is 1,
/// over the next two otherwise.
pub fn large_find(occupancy: Occupancy, depth: u8) -> Option<Coord2> {
    best_pair(occupancy, Target::Large, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_probe_ties_go_to_first_inner_cell() {
        // every inner cell is covered by four 2x2 placements
        assert_eq!(med_find(Occupancy::EMPTY, 1), Some((1, 1)));
    }

    #[test]
    fn zero_depth_searches_pairs() {
        let occupancy: Occupancy = "
            .....o
            .o..o.
            o.....
            .....o
            ......
            o..o..
        "
        .parse::<Grid>()
        .unwrap()
        .occupancy();

        assert_eq!(med_find(occupancy, 1), Some((2, 3)));
        assert_eq!(med_find(occupancy, 0), Some((3, 3)));
        assert_eq!(med_find(occupancy, 0), med_find(occupancy, 2));
        assert_eq!(large_find(occupancy, 0), large_find(occupancy, 2));
    }

    #[test]
    fn single_probe_large_find_prefers_center() {
        // (2, 2), (3, 2), (2, 3) and (3, 3) each close 12 placements
        assert_eq!(large_find(Occupancy::EMPTY, 1), Some((2, 2)));
    }

    #[test]
    fn deeper_horizons_behave_like_two_probes() {
        let occupancy = Occupancy::from_iter([(0, 0), (2, 3), (5, 1)]);

        assert_eq!(med_find(occupancy, 3), med_find(occupancy, 2));
        assert_eq!(large_find(occupancy, 7), large_find(occupancy, 2));
    }

    #[test]
    fn equal_medium_pairs_prefer_fewer_after_first_probe() {
        // (2, 2) then (2, 4) and (2, 3) then (2, 1) both total 3, but (2, 3) alone leaves 2
        // placements against 3 for (2, 2).
        let occupancy = Occupancy::from_iter([
            (3, 0),
            (1, 1),
            (4, 1),
            (0, 3),
            (4, 3),
            (4, 4),
            (1, 5),
        ]);

        assert_eq!(med_find(occupancy, 2), Some((2, 3)));
    }

    #[test]
    fn equal_large_pairs_prefer_fewer_after_first_probe() {
        // (1, 2) then (2, 4) and (2, 3) then (1, 1) both total 31, but (2, 3) alone leaves 19
        // placements against 20 for (1, 2).
        let occupancy = Occupancy::from_iter([(4, 2)]);

        assert_eq!(large_find(occupancy, 2), Some((2, 3)));
    }

    #[test]
    fn skips_cells_that_close_nothing() {
        // Only the 3x2 placement at (3, 4) is left. (1, 4) comes first but closes nothing,
        // (3, 4) and (4, 4) both close it.
        let open = [(1, 4), (3, 4), (4, 4)];
        let occupancy: Occupancy = iter_inner_cells()
            .filter(|coords| !open.contains(coords))
            .collect();

        assert_eq!(large_find(occupancy, 1), Some((3, 4)));
        assert_eq!(large_find(occupancy, 2), Some((3, 4)));
    }

    #[test]
    fn medium_pair_avoids_marked_cells() {
        let occupancy = Occupancy::rect((1, 1), 3, 2);
        let target = med_find(occupancy, 2).unwrap();

        assert!(is_inner(target));
        assert!(!occupancy.contains(target));
    }

    #[test]
    fn no_inner_candidates_yields_none() {
        let occupancy: Occupancy = iter_inner_cells().collect();

        assert_eq!(med_find(occupancy, 1), None);
        assert_eq!(large_find(occupancy, 2), None);
    }
}
