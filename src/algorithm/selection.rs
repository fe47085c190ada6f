use crate::{
    algorithm::palette::{Color, WeightedColor, weighted_candidates},
    spatial::grid::ColorGrid,
};
use rand::Rng;

/// Colors that may not be repeated at `(row, col)`
///
/// Collects the top and left neighbors when they hold a color other than
/// yellow. Neighbors outside the grid are skipped.
pub fn avoided_colors(grid: &ColorGrid, row: usize, col: usize) -> Vec<Color> {
    let top = row.checked_sub(1).and_then(|r| grid.get(r, col));
    let left = col.checked_sub(1).and_then(|c| grid.get(row, c));

    [top, left]
        .into_iter()
        .flatten()
        .filter(|color| color.is_avoided_by_neighbors())
        .collect()
}

/// Weighted candidate list with every avoided color removed
pub fn viable_candidates(avoid: &[Color]) -> Vec<WeightedColor> {
    weighted_candidates()
        .into_iter()
        .filter(|candidate| !avoid.contains(&candidate.color))
        .collect()
}

/// Total weight of a candidate list
pub fn total_weight(candidates: &[WeightedColor]) -> u32 {
    candidates.iter().map(|candidate| candidate.weight).sum()
}

/// Inverse-CDF pick for a draw in `[0, total_weight)`
///
/// Walks candidates in list order, subtracting each weight from the draw,
/// and returns the first candidate whose weight exceeds what remains.
/// Falls back to yellow when no candidate is left.
pub fn pick_weighted(candidates: &[WeightedColor], draw: f64) -> Color {
    let mut remaining = draw;
    for candidate in candidates {
        let weight = f64::from(candidate.weight);
        if remaining < weight {
            return candidate.color;
        }
        remaining -= weight;
    }

    // Draws at or beyond the total land on the last candidate
    candidates
        .last()
        .map_or(Color::Yellow, |candidate| candidate.color)
}

/// Choose a block color for `(row, col)` given the neighbors placed so far
///
/// Reads only the top and left cells, so callers must visit the grid in
/// row-major order for the neighbor rule to hold.
pub fn choose_color<R: Rng>(grid: &ColorGrid, row: usize, col: usize, rng: &mut R) -> Color {
    let avoid = avoided_colors(grid, row, col);
    let candidates = viable_candidates(&avoid);

    let total = total_weight(&candidates);
    if total == 0 {
        return Color::Yellow;
    }

    let draw = rng.random_range(0.0..f64::from(total));
    pick_weighted(&candidates, draw)
}
