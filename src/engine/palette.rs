// src/engine/palette.rs
//! Fixed color palettes and the rules for cycling through them.

use crate::model::ColorField;

/// Fill colors, semi-transparent.
pub const FILL_COLORS: [&str; 6] = [
    "rgba(59, 130, 246, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(245, 158, 11, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(139, 92, 246, 0.8)",
    "rgba(236, 72, 153, 0.8)",
];

/// Border colors, index-aligned with [`FILL_COLORS`].
pub const BORDER_COLORS: [&str; 6] = [
    "rgba(59, 130, 246, 1)",
    "rgba(16, 185, 129, 1)",
    "rgba(245, 158, 11, 1)",
    "rgba(239, 68, 68, 1)",
    "rgba(139, 92, 246, 1)",
    "rgba(236, 72, 153, 1)",
];

pub const PALETTE_SIZE: usize = FILL_COLORS.len();

/// Border width applied to every series.
pub const BORDER_WIDTH: u32 = 1;

/// A fill/border color assignment for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPair {
    pub fill: ColorField,
    pub border: ColorField,
}

/// One color pair for the whole series, chosen by `index mod PALETTE_SIZE`.
pub fn cycled(index: usize) -> ColorPair {
    let slot = index % PALETTE_SIZE;
    ColorPair {
        fill: ColorField::Single(FILL_COLORS[slot].to_string()),
        border: ColorField::Single(BORDER_COLORS[slot].to_string()),
    }
}

/// One color per item, for the first `min(count, PALETTE_SIZE)` items.
pub fn sequence(count: usize) -> ColorPair {
    let take = count.min(PALETTE_SIZE);
    ColorPair {
        fill: ColorField::Sequence(FILL_COLORS[..take].iter().map(|c| c.to_string()).collect()),
        border: ColorField::Sequence(
            BORDER_COLORS[..take].iter().map(|c| c.to_string()).collect(),
        ),
    }
}
