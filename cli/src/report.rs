use sketchfind_core::*;

/// Glyph used in place of the recommended cell.
const TARGET_GLYPH: char = '*';

/// Plain-text report: the grid with the target marked, then mode, target and advisories.
pub fn render(grid: &Grid, recommendation: &Recommendation) -> String {
    let mut out = String::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let glyph = if recommendation.is_target((x, y)) {
                TARGET_GLYPH
            } else {
                grid.cell_at((x, y)).glyph()
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&format!("mode: {}\n", recommendation.mode));
    match recommendation.target {
        Some((x, y)) => out.push_str(&format!("probe: x={x} y={y}\n")),
        None => out.push_str("probe: none, no unprobed cell fits this mode\n"),
    }
    for advisory in &recommendation.advisories {
        out.push_str(&format!("! {advisory}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_target_and_lists_advisories() {
        let grid: Grid = "
            ......
            ..LLL.
            ......
            ......
            ......
            ......
        "
        .parse()
        .unwrap();
        let recommendation = Recommendation {
            mode: Mode::MedFind { depth: 2 },
            target: Some((1, 3)),
            advisories: vec![Advisory::OpenLarge],
        };

        let text = render(&grid, &recommendation);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "..LLL.");
        assert_eq!(lines[3], ".*....");
        assert!(text.contains("mode: med-find\n"));
        assert!(text.contains("probe: x=1 y=3\n"));
        assert!(text.contains("! Fully open the large drawing"));
    }

    #[test]
    fn reports_missing_target() {
        let recommendation = Recommendation {
            mode: Mode::WeightedMedFind,
            target: None,
            advisories: vec![],
        };

        let text = render(&Grid::new(), &recommendation);

        assert!(!text.contains(TARGET_GLYPH));
        assert!(text.contains("probe: none"));
    }
}
