//! Text parsing of tile blocks
//!
//! Input is blank-line-separated blocks, each a `Tile <id>:` header
//! followed by equal-length rows of `#` (on) and `.` (off) pixels.
//! Line endings and surrounding whitespace are tolerated; anything else
//! is a fatal parse error.

use crate::io::error::{AssemblyError, Result};
use crate::spatial::bitmap::Bitmap;
use crate::spatial::tiles::Tile;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Read and parse a tile file
///
/// # Errors
///
/// Returns `AssemblyError::InputRead` when the file cannot be read, and
/// any [`parse_tiles`] error for malformed content.
pub fn read_tiles<P: AsRef<Path>>(path: P) -> Result<Vec<Tile>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| AssemblyError::InputRead {
        path: path_ref.to_path_buf(),
        source,
    })?;
    parse_tiles(&contents)
}

/// Parse tile blocks from input text
///
/// # Errors
///
/// Returns an error for malformed headers, ragged or non-square pixel
/// grids, unknown pixel characters, or duplicate tile identifiers.
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut seen = BTreeSet::new();
    for block in blocks(input) {
        let tile = parse_block(&block)?;
        if !seen.insert(tile.id()) {
            return Err(AssemblyError::DuplicateTile { id: tile.id() });
        }
        tiles.push(tile);
    }
    Ok(tiles)
}

// Blank-line-separated groups of non-empty trimmed lines.
fn blocks(input: &str) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed.to_string());
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

fn parse_block(lines: &[String]) -> Result<Tile> {
    let (header, rows) = lines
        .split_first()
        .ok_or_else(|| AssemblyError::MalformedHeader {
            line: String::new(),
        })?;
    let id = parse_header(header)?;
    if rows.is_empty() {
        return Err(AssemblyError::MalformedTile {
            id,
            reason: "tile has no pixel rows".to_string(),
        });
    }
    let mut pixels = Vec::with_capacity(rows.len());
    for row in rows {
        pixels.push(parse_row(id, row)?);
    }
    let bitmap = Bitmap::from_rows(pixels).map_err(|error| AssemblyError::MalformedTile {
        id,
        reason: error.to_string(),
    })?;
    Ok(Tile::new(id, bitmap))
}

// Accepts `Tile <id>:`, tolerating extra interior whitespace.
fn parse_header(line: &str) -> Result<u32> {
    line.strip_prefix("Tile ")
        .and_then(|rest| rest.trim().strip_suffix(':'))
        .and_then(|digits| digits.trim().parse().ok())
        .ok_or_else(|| AssemblyError::MalformedHeader {
            line: line.to_string(),
        })
}

fn parse_row(id: u32, row: &str) -> Result<Vec<bool>> {
    row.chars()
        .map(|symbol| match symbol {
            '#' => Ok(true),
            '.' => Ok(false),
            other => Err(AssemblyError::MalformedTile {
                id,
                reason: format!("unexpected pixel character '{other}'"),
            }),
        })
        .collect()
}
