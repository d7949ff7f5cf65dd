//! Corner anchoring and greedy row-major grid assembly
//!
//! Assembly relies on the puzzle invariant that every interior edge
//! signature is shared by exactly two tiles and every exterior one by a
//! single tile. The invariant is not validated up front; a lookup that
//! comes up empty surfaces as a fatal error.

use crate::algorithm::buckets::EdgeBuckets;
use crate::io::error::{AssemblyError, Result};
use crate::spatial::tiles::{Edge, Tile};
use std::collections::BTreeMap;

// A raw corner exposes two geometric sides with no partner tile, which
// appear as four exterior entries in its signature set.
const CORNER_EXTERIOR_SIGNATURES: usize = 4;

/// Owns the tile set and edge buckets while the grid is being filled
#[derive(Debug, Clone)]
pub struct Assembler {
    tiles: BTreeMap<u32, Tile>,
    buckets: EdgeBuckets,
}

impl Assembler {
    /// Take ownership of the tile set and index its edge signatures
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::DuplicateTile` when two tiles share an
    /// identifier, and `AssemblyError::NonSquareLayout` when the tile
    /// count cannot form a square grid.
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for tile in tiles {
            let id = tile.id();
            if map.insert(id, tile).is_some() {
                return Err(AssemblyError::DuplicateTile { id });
            }
        }
        grid_side(map.len())?;
        let buckets = EdgeBuckets::from_tiles(map.values());
        Ok(Self { tiles: map, buckets })
    }

    /// Fill the grid, consuming the assembler
    ///
    /// Tiles are placed in row-major order: the first row matches each
    /// previous tile's right edge, and every later row anchors its first
    /// tile on the bottom edge of the tile above before proceeding
    /// across the same way.
    ///
    /// # Errors
    ///
    /// Returns an error when no corner tile exists or when no tile (or
    /// no orientation of the remaining tile) satisfies a required edge
    /// signature, which indicates a malformed or ambiguous puzzle
    /// instance.
    pub fn solve(mut self) -> Result<Assembly> {
        let side = grid_side(self.tiles.len())?;
        let mut grid: Vec<Vec<Tile>> = Vec::with_capacity(side);

        let corner = self.top_left_corner()?;
        let mut row_anchor_value = corner.edge(Edge::BottomLeftToRight);
        let mut match_value = corner.edge(Edge::RightTopToBottom);

        let mut first_row = Vec::with_capacity(side);
        first_row.push(corner);
        for _ in 1..side {
            let tile = self.take_match(Edge::LeftTopToBottom, match_value)?;
            match_value = tile.edge(Edge::RightTopToBottom);
            first_row.push(tile);
        }
        grid.push(first_row);

        for _ in 1..side {
            let anchor = self.take_match(Edge::TopLeftToRight, row_anchor_value)?;
            row_anchor_value = anchor.edge(Edge::BottomLeftToRight);
            match_value = anchor.edge(Edge::RightTopToBottom);

            let mut row = Vec::with_capacity(side);
            row.push(anchor);
            for _ in 1..side {
                let tile = self.take_match(Edge::LeftTopToBottom, match_value)?;
                match_value = tile.edge(Edge::RightTopToBottom);
                row.push(tile);
            }
            grid.push(row);
        }

        Ok(Assembly { grid })
    }

    // Lowest-numbered tile with two exterior sides, reoriented so the
    // exterior edges face up and left before its signatures retire.
    fn top_left_corner(&mut self) -> Result<Tile> {
        // A lone tile is its own corner and keeps its parsed orientation.
        if self.tiles.len() == 1 {
            let corner = self
                .tiles
                .values()
                .next()
                .cloned()
                .ok_or(AssemblyError::MissingCorner)?;
            self.buckets.evict(&corner);
            return Ok(corner);
        }
        let corner = self
            .tiles
            .values()
            .find(|tile| self.buckets.exterior_edges(tile) >= CORNER_EXTERIOR_SIGNATURES)
            .cloned()
            .ok_or(AssemblyError::MissingCorner)?;
        let oriented = corner
            .variations()
            .find(|variation| {
                self.buckets
                    .is_exterior(variation.edge(Edge::LeftTopToBottom))
                    && self
                        .buckets
                        .is_exterior(variation.edge(Edge::TopLeftToRight))
            })
            .ok_or(AssemblyError::MissingCorner)?;
        self.buckets.evict(&oriented);
        Ok(oriented)
    }

    // Retrieve the remaining tile exposing `value`, reoriented so that
    // `edge` reads exactly `value`, and retire its signatures.
    fn take_match(&mut self, edge: Edge, value: u64) -> Result<Tile> {
        let id = self
            .buckets
            .candidate(value)
            .ok_or(AssemblyError::UnmatchedEdge { signature: value })?;
        let tile = self
            .tiles
            .get(&id)
            .ok_or(AssemblyError::UnmatchedEdge { signature: value })?;
        let oriented = tile
            .match_edge(edge, value)
            .ok_or(AssemblyError::NoOrientation {
                id,
                signature: value,
            })?;
        self.buckets.evict(&oriented);
        Ok(oriented)
    }
}

/// Completed square arrangement of oriented tiles
#[derive(Debug, Clone)]
pub struct Assembly {
    grid: Vec<Vec<Tile>>,
}

impl Assembly {
    /// Grid side length in tiles
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// Tile at a grid position
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.grid.get(row).and_then(|tiles| tiles.get(col))
    }

    /// Identifiers of the four corner tiles, row-major
    ///
    /// A 1-tile grid reports its only tile in all four positions.
    pub fn corner_ids(&self) -> [u32; 4] {
        let last = self.size().saturating_sub(1);
        [
            self.tile(0, 0),
            self.tile(0, last),
            self.tile(last, 0),
            self.tile(last, last),
        ]
        .map(|tile| tile.map_or(0, Tile::id))
    }

    /// Product of the four corner tile identifiers
    pub fn corner_product(&self) -> u64 {
        self.corner_ids().iter().map(|&id| u64::from(id)).product()
    }
}

// Grid side length; the tile count must be a perfect square.
fn grid_side(count: usize) -> Result<usize> {
    let side = (count as f64).sqrt().round() as usize;
    if side * side == count {
        Ok(side)
    } else {
        Err(AssemblyError::NonSquareLayout { tiles: count })
    }
}
