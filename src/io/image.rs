//! PNG export of the oriented composite with occurrences highlighted

use crate::analysis::patterns::SearchPattern;
use crate::analysis::roughness::PatternScan;
use crate::io::configuration::{FOAM_COLOR, PATTERN_COLOR, RENDER_SCALE, SEA_COLOR};
use crate::io::error::{AssemblyError, Result};
use image::{ImageBuffer, Rgba};
use std::collections::HashSet;

/// Render the oriented composite as a PNG
///
/// Off pixels use the sea color, on pixels the foam color, and pixels
/// covered by a pattern occurrence the pattern color. Each composite
/// cell is drawn as a `RENDER_SCALE`-wide square.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be saved.
pub fn export_scan_as_png(
    scan: &PatternScan,
    pattern: &SearchPattern,
    output_path: &str,
) -> Result<()> {
    let mut covered = HashSet::new();
    for anchor in &scan.anchors {
        for offset in pattern.offsets() {
            covered.insert((anchor[0] + offset[0], anchor[1] + offset[1]));
        }
    }

    let side = (scan.image.size() as u32) * RENDER_SCALE;
    let mut img = ImageBuffer::new(side, side);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = (y / RENDER_SCALE) as usize;
        let col = (x / RENDER_SCALE) as usize;
        let rgba = if covered.contains(&(row, col)) {
            PATTERN_COLOR
        } else if scan.image.get(row, col) {
            FOAM_COLOR
        } else {
            SEA_COLOR
        };
        *pixel = Rgba(rgba);
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| AssemblyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AssemblyError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
