//! Tests for the fixed palette, its weights and neighbor exemption

#[cfg(test)]
mod tests {
    use mondrian_frame::algorithm::palette::{Color, weighted_candidates};

    // Tests weights are the documented relative shares summing to 100
    // Verified by swapping red and blue weights
    #[test]
    fn test_weights_sum_to_one_hundred() {
        let candidates = weighted_candidates();
        let weights: Vec<u32> = candidates.iter().map(|c| c.weight).collect();

        assert_eq!(weights, vec![10, 60, 10, 20]);
        assert_eq!(weights.iter().sum::<u32>(), 100);
    }

    // Tests candidate order is gray, yellow, red, blue
    // Verified by reordering Color::ALL
    #[test]
    fn test_candidate_order() {
        let colors: Vec<Color> = weighted_candidates().iter().map(|c| c.color).collect();
        assert_eq!(
            colors,
            vec![Color::Gray, Color::Yellow, Color::Red, Color::Blue]
        );
    }

    // Tests only yellow is exempt from neighbor avoidance
    // Verified by exempting gray as well
    #[test]
    fn test_only_yellow_is_exempt() {
        assert!(!Color::Yellow.is_avoided_by_neighbors());
        assert!(Color::Gray.is_avoided_by_neighbors());
        assert!(Color::Red.is_avoided_by_neighbors());
        assert!(Color::Blue.is_avoided_by_neighbors());
    }

    // Tests every palette entry has a distinct fill color
    #[test]
    fn test_fill_colors_are_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in Color::ALL.iter().skip(i + 1) {
                assert_ne!(a.rgb(), b.rgb(), "{a:?} and {b:?} share a fill");
            }
        }
    }
}
