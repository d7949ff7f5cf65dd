//! Orientation search and roughness scoring for composite images
//!
//! The composite is tried in each of the eight symmetry orientations, in
//! the fixed transform order. Within an orientation the template sweeps
//! the image row-major; every occurrence clears the pixels it covers in
//! the working copy, and later candidates test against that cleared
//! copy. The first orientation with at least one occurrence wins.

use crate::analysis::patterns::SearchPattern;
use crate::spatial::bitmap::Bitmap;
use crate::spatial::transform::Transform;

/// Outcome of a successful orientation search
#[derive(Debug, Clone)]
pub struct PatternScan {
    /// Transform that produced the matching orientation
    pub orientation: Transform,
    /// The composite in the matching orientation, unmodified
    pub image: Bitmap,
    /// Anchor positions of every occurrence found
    pub anchors: Vec<[usize; 2]>,
    /// On pixels not covered by any occurrence
    pub roughness: usize,
}

/// Search the eight orientations of the composite for the pattern
///
/// Returns `None` when no orientation contains an occurrence.
pub fn scan(image: &Bitmap, pattern: &SearchPattern) -> Option<PatternScan> {
    Transform::ALL.iter().find_map(|&orientation| {
        let oriented = image.transformed(orientation);
        let mut working = oriented.clone();
        let mut anchors = Vec::new();
        let size = working.size();
        for row in 0..size {
            for col in 0..size {
                if pattern.is_match_at(&working, row, col) {
                    anchors.push([row, col]);
                    for offset in pattern.offsets() {
                        working.set(row + offset[0], col + offset[1], false);
                    }
                }
            }
        }
        (!anchors.is_empty()).then(|| PatternScan {
            orientation,
            image: oriented,
            anchors,
            roughness: working.count_ones(),
        })
    })
}

/// Roughness of the composite: on pixels outside every occurrence
///
/// Reports 0 when no orientation contains the pattern.
pub fn roughness(image: &Bitmap, pattern: &SearchPattern) -> usize {
    scan(image, pattern).map_or(0, |result| result.roughness)
}
