//! Merging an assembled grid into one composite bitmap

use crate::algorithm::assembler::Assembly;
use crate::spatial::bitmap::Bitmap;
use crate::spatial::tiles::Tile;

/// Strip each tile's border ring and concatenate the interiors
///
/// The composite is square with side `grid size * (tile size - 2)`;
/// composite pixel (r, c) comes from the interior of the tile at grid
/// position (r / f, c / f), where f is the interior width.
pub fn merge(assembly: &Assembly) -> Bitmap {
    let tile_size = assembly.tile(0, 0).map_or(0, Tile::size);
    let fragment = tile_size.saturating_sub(2);
    let size = assembly.size() * fragment;
    Bitmap::from_fn(size, |row, col| {
        let residue_row = row % fragment + 1;
        let residue_col = col % fragment + 1;
        assembly
            .tile(row / fragment, col / fragment)
            .is_some_and(|tile| tile.bitmap().get(residue_row, residue_col))
    })
}
