//! Tiles with precomputed directional edge signatures
//!
//! Each border row/column is read in both directions and encoded as a
//! binary number (MSB = first pixel read). The resulting signature SET is
//! invariant under the eight symmetry transforms, which is what lets two
//! tiles match regardless of the orientation either was parsed in.

use crate::spatial::bitmap::Bitmap;
use crate::spatial::transform::Transform;

/// A directional reading of one tile border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top row, read left to right
    TopLeftToRight,
    /// Top row, read right to left
    TopRightToLeft,
    /// Bottom row, read left to right
    BottomLeftToRight,
    /// Bottom row, read right to left
    BottomRightToLeft,
    /// Left column, read top to bottom
    LeftTopToBottom,
    /// Left column, read bottom to top
    LeftBottomToTop,
    /// Right column, read top to bottom
    RightTopToBottom,
    /// Right column, read bottom to top
    RightBottomToTop,
}

impl Edge {
    /// All directional edge readings
    pub const ALL: [Self; 8] = [
        Self::TopLeftToRight,
        Self::TopRightToLeft,
        Self::BottomLeftToRight,
        Self::BottomRightToLeft,
        Self::LeftTopToBottom,
        Self::LeftBottomToTop,
        Self::RightTopToBottom,
        Self::RightBottomToTop,
    ];

    /// Position in the per-tile signature table
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeftToRight => 0,
            Self::TopRightToLeft => 1,
            Self::BottomLeftToRight => 2,
            Self::BottomRightToLeft => 3,
            Self::LeftTopToBottom => 4,
            Self::LeftBottomToTop => 5,
            Self::RightTopToBottom => 6,
            Self::RightBottomToTop => 7,
        }
    }

    // Border layout: (horizontal, far side, natural reading order)
    const fn layout(self) -> (bool, bool, bool) {
        match self {
            Self::TopLeftToRight => (true, false, true),
            Self::TopRightToLeft => (true, false, false),
            Self::BottomLeftToRight => (true, true, true),
            Self::BottomRightToLeft => (true, true, false),
            Self::LeftTopToBottom => (false, false, true),
            Self::LeftBottomToTop => (false, false, false),
            Self::RightTopToBottom => (false, true, true),
            Self::RightBottomToTop => (false, true, false),
        }
    }
}

/// A square tile with an identifier and eight precomputed edge signatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: u32,
    bitmap: Bitmap,
    edge_values: [u64; 8],
    signature_set: Vec<u64>,
}

impl Tile {
    /// Construct a tile and precompute its edge signatures
    pub fn new(id: u32, bitmap: Bitmap) -> Self {
        let mut edge_values = [0u64; 8];
        for edge in Edge::ALL {
            if let Some(slot) = edge_values.get_mut(edge.index()) {
                *slot = slice_value(&bitmap, edge);
            }
        }
        let mut signature_set = edge_values.to_vec();
        signature_set.sort_unstable();
        signature_set.dedup();
        Self {
            id,
            bitmap,
            edge_values,
            signature_set,
        }
    }

    /// Tile identifier
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Edge width in pixels
    pub fn size(&self) -> usize {
        self.bitmap.size()
    }

    /// Pixel grid
    pub const fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Signature for one directional edge reading
    pub fn edge(&self, edge: Edge) -> u64 {
        self.edge_values.get(edge.index()).copied().unwrap_or(0)
    }

    /// Deduplicated set of the eight edge signatures
    ///
    /// Unlike the per-direction values, the set is identical for every
    /// orientation of the tile.
    pub fn signatures(&self) -> &[u64] {
        &self.signature_set
    }

    /// Copy of this tile with a transform applied
    pub fn transformed(&self, transform: Transform) -> Self {
        Self::new(self.id, self.bitmap.transformed(transform))
    }

    /// The eight orientations, in the fixed transform order
    pub fn variations(&self) -> impl Iterator<Item = Self> + '_ {
        Transform::ALL
            .iter()
            .map(|&transform| self.transformed(transform))
    }

    /// First orientation whose `edge` signature equals `value`
    ///
    /// Transforms are tried in `Transform::ALL` order, so the result is
    /// deterministic. Returns `None` when no orientation satisfies the
    /// constraint; during assembly that indicates a malformed puzzle.
    pub fn match_edge(&self, edge: Edge, value: u64) -> Option<Self> {
        self.variations()
            .find(|variation| variation.edge(edge) == value)
    }
}

// Edges wider than 64 pixels would overflow the signature and are out of
// scope for this input format.
fn slice_value(bitmap: &Bitmap, edge: Edge) -> u64 {
    let size = bitmap.size();
    let (horizontal, far, natural) = edge.layout();
    let index = if far { size.saturating_sub(1) } else { 0 };
    let mut value = 0;
    for step in 0..size {
        let position = if natural { step } else { size - 1 - step };
        let pixel = if horizontal {
            bitmap.get(index, position)
        } else {
            bitmap.get(position, index)
        };
        value = (value << 1) | u64::from(pixel);
    }
    value
}
