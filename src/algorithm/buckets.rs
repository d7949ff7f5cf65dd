//! Edge-signature buckets tracking which tiles expose each signature
//!
//! A signature held by exactly one tile marks an exterior edge of the
//! finished image; one held by two tiles marks an interior seam. Buckets
//! shrink as tiles are committed to the grid, so a seam lookup made
//! after the placed neighbor's eviction sees only the remaining
//! candidate.

use crate::spatial::tiles::Tile;
use std::collections::{HashMap, HashSet};

/// Signature to ids of the tiles currently exposing it
#[derive(Debug, Clone, Default)]
pub struct EdgeBuckets {
    buckets: HashMap<u64, HashSet<u32>>,
}

impl EdgeBuckets {
    /// Register every signature of every tile
    pub fn from_tiles<'a, I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        let mut buckets: HashMap<u64, HashSet<u32>> = HashMap::new();
        for tile in tiles {
            for &signature in tile.signatures() {
                buckets.entry(signature).or_default().insert(tile.id());
            }
        }
        Self { buckets }
    }

    /// Number of tiles currently exposing a signature
    pub fn bucket_size(&self, signature: u64) -> usize {
        self.buckets.get(&signature).map_or(0, HashSet::len)
    }

    /// Whether a signature belongs to exactly one tile (an exterior edge)
    pub fn is_exterior(&self, signature: u64) -> bool {
        self.bucket_size(signature) == 1
    }

    /// Count of a tile's signatures that are currently exterior
    pub fn exterior_edges(&self, tile: &Tile) -> usize {
        tile.signatures()
            .iter()
            .filter(|&&signature| self.is_exterior(signature))
            .count()
    }

    /// A tile still exposing the signature, if any remains
    ///
    /// During assembly each required seam signature has exactly one
    /// remaining candidate once the placed neighbor has been evicted.
    pub fn candidate(&self, signature: u64) -> Option<u32> {
        self.buckets
            .get(&signature)
            .and_then(|ids| ids.iter().next().copied())
    }

    /// Remove a tile's id from every bucket its signatures occupy
    pub fn evict(&mut self, tile: &Tile) {
        for signature in tile.signatures() {
            if let Some(ids) = self.buckets.get_mut(signature) {
                ids.remove(&tile.id());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::bitmap::Bitmap;

    fn tile_from(id: u32, rows: &[&str]) -> Tile {
        let pixels = rows
            .iter()
            .map(|row| row.chars().map(|symbol| symbol == '#').collect())
            .collect();
        Tile::new(id, Bitmap::from_rows(pixels).unwrap())
    }

    #[test]
    fn test_seam_becomes_exterior_after_eviction() {
        // Right column of `left` equals the left column of `right` (101).
        let left = tile_from(1, &["..#", "...", "..#"]);
        let right = tile_from(2, &["#..", "...", "#.."]);
        let seam = 0b101;

        let mut buckets = EdgeBuckets::from_tiles([&left, &right]);
        assert_eq!(buckets.bucket_size(seam), 2);
        assert!(!buckets.is_exterior(seam));

        buckets.evict(&left);
        assert!(buckets.is_exterior(seam));
        assert_eq!(buckets.candidate(seam), Some(2));

        buckets.evict(&right);
        assert_eq!(buckets.bucket_size(seam), 0);
        assert_eq!(buckets.candidate(seam), None);
    }
}
