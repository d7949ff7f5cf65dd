//! Fixed sub-pattern templates searched for in composite images

use crate::io::error::{AssemblyError, Result};
use crate::spatial::bitmap::Bitmap;

// The classic sea monster, anchored at the top-left of its 3x20 box.
const SEA_MONSTER_OFFSETS: [[usize; 2]; 15] = [
    [0, 18],
    [1, 0],
    [1, 5],
    [1, 6],
    [1, 11],
    [1, 12],
    [1, 17],
    [1, 18],
    [1, 19],
    [2, 1],
    [2, 4],
    [2, 7],
    [2, 10],
    [2, 13],
    [2, 16],
];

/// Template of on-pixel offsets relative to an anchor point
///
/// Templates are fixed once built; scanning slides the anchor across a
/// bitmap and tests every offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    offsets: Vec<[usize; 2]>,
    height: usize,
    width: usize,
}

impl SearchPattern {
    /// The built-in sea monster template
    pub fn sea_monster() -> Self {
        Self::from_offsets(SEA_MONSTER_OFFSETS.to_vec())
    }

    /// Parse a template from text, `#` marking on cells
    ///
    /// Any other character is an off cell, so templates can use spaces
    /// or dots for padding.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::EmptyPattern` when the text contains no
    /// `#` cells.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut offsets = Vec::new();
        for (row, line) in text.lines().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                if symbol == '#' {
                    offsets.push([row, col]);
                }
            }
        }
        if offsets.is_empty() {
            return Err(AssemblyError::EmptyPattern);
        }
        Ok(Self::from_offsets(offsets))
    }

    fn from_offsets(offsets: Vec<[usize; 2]>) -> Self {
        let height = offsets.iter().map(|offset| offset[0] + 1).max().unwrap_or(0);
        let width = offsets.iter().map(|offset| offset[1] + 1).max().unwrap_or(0);
        Self {
            offsets,
            height,
            width,
        }
    }

    /// On-cell offsets relative to the anchor
    pub fn offsets(&self) -> &[[usize; 2]] {
        &self.offsets
    }

    /// Bounding-box height in rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding-box width in columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether every template cell is on at the given anchor
    ///
    /// Anchors where the template would run past the bitmap edge are
    /// never a match.
    pub fn is_match_at(&self, bitmap: &Bitmap, row: usize, col: usize) -> bool {
        let size = bitmap.size();
        self.offsets.iter().all(|offset| {
            let pixel_row = row + offset[0];
            let pixel_col = col + offset[1];
            pixel_row < size && pixel_col < size && bitmap.get(pixel_row, pixel_col)
        })
    }
}
