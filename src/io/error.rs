//! Error types for parsing, assembly, and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all assembler operations
#[derive(Debug)]
pub enum AssemblyError {
    /// Failed to read an input file from the filesystem
    InputRead {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A tile block does not start with a `Tile <id>:` header
    MalformedHeader {
        /// The offending header line
        line: String,
    },

    /// A tile block's pixel rows are unusable
    MalformedTile {
        /// Identifier from the block header
        id: u32,
        /// Description of what is wrong with the block
        reason: String,
    },

    /// Two tile blocks share an identifier
    DuplicateTile {
        /// The repeated identifier
        id: u32,
    },

    /// Pixel rows do not form a square grid
    NonSquareBitmap {
        /// Number of rows provided
        rows: usize,
        /// Width of the first row
        cols: usize,
    },

    /// The tile count cannot form a square arrangement
    NonSquareLayout {
        /// Number of tiles provided
        tiles: usize,
    },

    /// No tile (or no orientation of one) qualifies as the anchor corner
    MissingCorner,

    /// No unplaced tile exposes a required edge signature
    ///
    /// Indicates a malformed or ambiguous puzzle instance; the
    /// edge-sharing invariant guarantees a candidate for well-formed
    /// input.
    UnmatchedEdge {
        /// The signature no remaining tile exposes
        signature: u64,
    },

    /// No orientation of the candidate tile produces the required edge
    NoOrientation {
        /// Identifier of the candidate tile
        id: u32,
        /// The signature the orientation search failed to satisfy
        signature: u64,
    },

    /// A search pattern template contains no on cells
    EmptyPattern,

    /// The CLI target is not a usable input path
    InvalidTarget {
        /// The rejected path
        path: PathBuf,
        /// Why the path was rejected
        reason: &'static str,
    },

    /// Failed to save a rendered composite to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRead { path, source } => {
                write!(f, "Failed to read input '{}': {source}", path.display())
            }
            Self::MalformedHeader { line } => {
                write!(f, "Malformed tile header '{line}'")
            }
            Self::MalformedTile { id, reason } => {
                write!(f, "Malformed tile {id}: {reason}")
            }
            Self::DuplicateTile { id } => {
                write!(f, "Duplicate tile identifier {id}")
            }
            Self::NonSquareBitmap { rows, cols } => {
                write!(f, "Pixel rows form a {rows}x{cols} grid, not a square")
            }
            Self::NonSquareLayout { tiles } => {
                write!(f, "{tiles} tiles cannot form a square arrangement")
            }
            Self::MissingCorner => {
                write!(f, "No tile qualifies as the anchor corner")
            }
            Self::UnmatchedEdge { signature } => {
                write!(f, "No unplaced tile exposes edge signature {signature}")
            }
            Self::NoOrientation { id, signature } => {
                write!(
                    f,
                    "No orientation of tile {id} produces edge signature {signature}"
                )
            }
            Self::EmptyPattern => {
                write!(f, "Search pattern template contains no '#' cells")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AssemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for assembler results
pub type Result<T> = std::result::Result<T, AssemblyError>;

impl From<std::io::Error> for AssemblyError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for AssemblyError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = AssemblyError::UnmatchedEdge { signature: 682 };
        assert_eq!(
            err.to_string(),
            "No unplaced tile exposes edge signature 682"
        );

        let err = AssemblyError::NonSquareLayout { tiles: 8 };
        assert_eq!(
            err.to_string(),
            "8 tiles cannot form a square arrangement"
        );
    }

    #[test]
    fn test_source_chaining() {
        let err = AssemblyError::InputRead {
            path: PathBuf::from("puzzle.txt"),
            source: std::io::Error::other("boom"),
        };
        assert!(err.source().is_some());
        assert!(AssemblyError::MissingCorner.source().is_none());
    }
}
