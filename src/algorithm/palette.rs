//! Fixed block palette and its sampling weights

use crate::io::configuration::{BLUE_WEIGHT, GRAY_WEIGHT, RED_WEIGHT, YELLOW_WEIGHT};

/// Block color drawn from the fixed four-color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Neutral gray
    Gray,
    /// Dominant yellow, never avoided by neighbors
    Yellow,
    /// Primary red
    Red,
    /// Primary blue
    Blue,
}

impl Color {
    /// Every palette color in candidate order
    pub const ALL: [Self; 4] = [Self::Gray, Self::Yellow, Self::Red, Self::Blue];

    /// Opaque RGB used when filling a block of this color
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Gray => [0xC9, 0xC7, 0xC2],
            Self::Yellow => [0xF2, 0xC1, 0x2E],
            Self::Red => [0xCF, 0x2E, 0x2A],
            Self::Blue => [0x1F, 0x4E, 0x9C],
        }
    }

    /// Relative sampling weight of this color
    pub const fn weight(self) -> u32 {
        match self {
            Self::Gray => GRAY_WEIGHT,
            Self::Yellow => YELLOW_WEIGHT,
            Self::Red => RED_WEIGHT,
            Self::Blue => BLUE_WEIGHT,
        }
    }

    /// Whether a neighbor of this color excludes the same color next to it
    pub const fn is_avoided_by_neighbors(self) -> bool {
        !matches!(self, Self::Yellow)
    }
}

/// A palette color paired with its relative sampling weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedColor {
    /// Candidate color
    pub color: Color,
    /// Relative weight of the candidate
    pub weight: u32,
}

/// Full candidate list in the fixed order used for inverse-CDF sampling
pub fn weighted_candidates() -> Vec<WeightedColor> {
    Color::ALL
        .iter()
        .map(|&color| WeightedColor {
            color,
            weight: color.weight(),
        })
        .collect()
}
