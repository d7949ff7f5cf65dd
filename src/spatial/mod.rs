//! Spatial data structures: bitmaps, tiles, and symmetry transforms

/// Square boolean pixel grids
pub mod bitmap;
/// Tiles with precomputed directional edge signatures
pub mod tiles;
/// The eight square symmetries as pure coordinate remappings
pub mod transform;

pub use bitmap::Bitmap;
pub use tiles::{Edge, Tile};
pub use transform::Transform;
