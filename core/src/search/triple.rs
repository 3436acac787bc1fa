use super::*;

/// Depth-3 search over ordered triples of distinct unprobed inner cells.
///
/// Open placements are narrowed incrementally from one hypothetical probe to the next, and
/// `score` sees the counts after each of the three probes. Returns the winning line.
fn best_triple<S: Ord + Debug>(
    occupancy: Occupancy,
    variant: &str,
    score: impl Fn(&[Step; 3]) -> S,
) -> Option<[Coord2; 3]> {
    let cells = inner_candidates(occupancy);
    let base = OpenSets::new(occupancy);
    let mut best = Best::new();

    for &first in &cells {
        let occupancy1 = occupancy.with(first);
        let open1 = base.narrowed(occupancy1);
        let step1 = Step::from(&open1);

        for &second in &cells {
            if second == first {
                continue;
            }
            let occupancy2 = occupancy1.with(second);
            let open2 = open1.narrowed(occupancy2);
            let step2 = Step::from(&open2);

            for &third in &cells {
                if third == first || third == second {
                    continue;
                }
                let open3 = open2.narrowed(occupancy2.with(third));
                let steps = [step1, step2, Step::from(&open3)];
                best.offer(score(&steps), [first, second, third]);
            }
        }
    }

    best.finish(variant)
}

/// Whether the 0-based `step` still falls within a `depth`-probe horizon.
const fn within(step: usize, depth: u8) -> bool {
    step < depth as usize
}

/// Minimizes open large placements after three probes. Ties go to the line that closes large
/// placements soonest, counting medium placements too for the first `med_depth` probes.
pub fn default_find(occupancy: Occupancy, med_depth: u8) -> Option<Coord2> {
    best_triple(occupancy, "default", |steps| {
        let tiebreak: u32 = steps
            .iter()
            .enumerate()
            .map(|(n, step)| step.large + if within(n, med_depth) { step.medium } else { 0 })
            .sum();
        (steps[2].large, tiebreak)
    })
    .map(|[first, ..]| first)
}

/// Minimizes open medium placements summed over three probes.
pub fn weighted_med_find(occupancy: Occupancy) -> Option<Coord2> {
    best_triple(occupancy, "weighted-med-find", |steps| {
        steps.iter().map(|step| step.medium).sum::<u32>()
    })
    .map(|[first, ..]| first)
}

/// Minimizes triple-weighted medium placements summed over three probes, adding large
/// placements for the first `large_depth` probes.
pub fn weighted_all_find(occupancy: Occupancy, large_depth: u8) -> Option<Coord2> {
    best_triple(occupancy, "weighted-all-find", |steps| {
        steps
            .iter()
            .enumerate()
            .map(|(n, step)| 3 * step.medium + if within(n, large_depth) { step.large } else { 0 })
            .sum::<u32>()
    })
    .map(|[first, ..]| first)
}
