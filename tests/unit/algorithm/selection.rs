//! Tests for neighbor avoidance and inverse-CDF weighted color picks

#[cfg(test)]
mod tests {
    use mondrian_frame::algorithm::palette::{Color, weighted_candidates};
    use mondrian_frame::algorithm::selection::{
        avoided_colors, choose_color, pick_weighted, total_weight, viable_candidates,
    };
    use mondrian_frame::spatial::ColorGrid;
    use rand::{SeedableRng, rngs::StdRng};

    // Tests fixed draws land on the documented cumulative ranges
    // Verified by using <= instead of < in the walk
    #[test]
    fn test_pick_weighted_fixed_draws() {
        let candidates = weighted_candidates();

        assert_eq!(pick_weighted(&candidates, 5.0), Color::Gray);
        assert_eq!(pick_weighted(&candidates, 50.0), Color::Yellow);
        assert_eq!(pick_weighted(&candidates, 75.0), Color::Red);
        assert_eq!(pick_weighted(&candidates, 95.0), Color::Blue);
    }

    // Tests range boundaries: 0-10 gray, 10-70 yellow, 70-80 red, 80-100 blue
    // Verified by subtracting the weight before comparing
    #[test]
    fn test_pick_weighted_boundaries() {
        let candidates = weighted_candidates();

        assert_eq!(pick_weighted(&candidates, 0.0), Color::Gray);
        assert_eq!(pick_weighted(&candidates, 9.999), Color::Gray);
        assert_eq!(pick_weighted(&candidates, 10.0), Color::Yellow);
        assert_eq!(pick_weighted(&candidates, 69.999), Color::Yellow);
        assert_eq!(pick_weighted(&candidates, 70.0), Color::Red);
        assert_eq!(pick_weighted(&candidates, 80.0), Color::Blue);
        assert_eq!(pick_weighted(&candidates, 99.999), Color::Blue);
    }

    // Tests an empty candidate list falls back to yellow
    // Verified by returning gray on fallback
    #[test]
    fn test_pick_weighted_empty_is_yellow() {
        assert_eq!(pick_weighted(&[], 0.0), Color::Yellow);
        assert_eq!(pick_weighted(&[], 42.0), Color::Yellow);
    }

    // Tests filtered lists keep order and rescale the draw range
    // Verified by removing the avoid filter
    #[test]
    fn test_viable_candidates_without_red_and_blue() {
        let candidates = viable_candidates(&[Color::Red, Color::Blue]);
        let colors: Vec<Color> = candidates.iter().map(|c| c.color).collect();

        assert_eq!(colors, vec![Color::Gray, Color::Yellow]);
        assert_eq!(total_weight(&candidates), 70);
        assert_eq!(pick_weighted(&candidates, 5.0), Color::Gray);
        assert_eq!(pick_weighted(&candidates, 65.0), Color::Yellow);
    }

    // Tests the avoid set reads top and left and skips grid borders
    // Verified by reading the bottom neighbor instead of the top
    #[test]
    fn test_avoided_colors_reads_top_and_left() {
        let mut grid = ColorGrid::new(2, 2);
        assert!(grid.assign(0, 1, Color::Red).is_ok());
        assert!(grid.assign(1, 0, Color::Blue).is_ok());

        assert_eq!(avoided_colors(&grid, 1, 1), vec![Color::Red, Color::Blue]);
        assert!(avoided_colors(&grid, 0, 0).is_empty());
        // Row 0 has no top neighbor; left of (0, 1) is unset
        assert!(avoided_colors(&grid, 0, 1).is_empty());
    }

    // Tests yellow neighbors are never avoided
    // Verified by removing the yellow exemption
    #[test]
    fn test_yellow_neighbors_are_not_avoided() {
        let mut grid = ColorGrid::new(2, 2);
        assert!(grid.assign(0, 1, Color::Yellow).is_ok());
        assert!(grid.assign(1, 0, Color::Yellow).is_ok());

        assert!(avoided_colors(&grid, 1, 1).is_empty());
    }

    // Tests chosen colors never repeat a non-yellow neighbor
    // Verified by skipping the avoid filter in choose_color
    #[test]
    fn test_choose_color_avoids_neighbors() {
        let mut grid = ColorGrid::new(2, 2);
        assert!(grid.assign(0, 1, Color::Red).is_ok());
        assert!(grid.assign(1, 0, Color::Blue).is_ok());

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let color = choose_color(&grid, 1, 1, &mut rng);
            assert!(
                color == Color::Gray || color == Color::Yellow,
                "picked avoided color {color:?}"
            );
        }
    }

    // Tests yellow dominates an unconstrained cell
    // Verified by giving every candidate equal weight
    #[test]
    fn test_choose_color_distribution_is_yellow_heavy() {
        let grid = ColorGrid::new(1, 1);
        let mut rng = StdRng::seed_from_u64(11);

        let yellow = (0..2000)
            .filter(|_| choose_color(&grid, 0, 0, &mut rng) == Color::Yellow)
            .count();

        assert!(
            (1000..1400).contains(&yellow),
            "expected roughly 60% yellow, got {yellow}/2000"
        );
    }
}
