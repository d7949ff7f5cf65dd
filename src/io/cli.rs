//! Command-line interface for batch-solving tile puzzles

use crate::algorithm::assembler::Assembler;
use crate::algorithm::merge::merge;
use crate::analysis::patterns::SearchPattern;
use crate::analysis::roughness::{PatternScan, scan};
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{AssemblyError, Result};
use crate::io::image::export_scan_as_png;
use crate::io::parser::read_tiles;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "jigsawtile")]
#[command(
    author,
    version,
    about = "Assemble edge-matched tile puzzles and score image roughness"
)]
/// Command-line arguments for the tile assembler
pub struct Cli {
    /// Input tile file or directory of tile files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Render each assembled composite as a PNG next to its input
    #[arg(short, long)]
    pub render: bool,

    /// Search pattern template file (`#` marks pattern cells)
    #[arg(short, long)]
    pub pattern: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, parsing, assembly, or
    /// rendering fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let pattern = self.load_pattern()?;

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &pattern)?;
        }

        if let Some(pm) = &mut self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn load_pattern(&self) -> Result<SearchPattern> {
        match &self.cli.pattern {
            Some(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|source| AssemblyError::InputRead {
                        path: path.clone(),
                        source,
                    })?;
                SearchPattern::from_text(&text)
            }
            None => Ok(SearchPattern::sea_monster()),
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(AssemblyError::InvalidTarget {
                    path: self.cli.target.clone(),
                    reason: "target file must be a .txt tile file",
                })
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(AssemblyError::InvalidTarget {
                path: self.cli.target.clone(),
                reason: "target must be a tile file or directory",
            })
        }
    }

    // The two answers are the program's output
    #[allow(clippy::print_stdout)]
    fn process_file(&self, input_path: &Path, pattern: &SearchPattern) -> Result<()> {
        let start_time = Instant::now();

        if let Some(pm) = &self.progress_manager {
            pm.start_file(input_path);
        }

        let tiles = read_tiles(input_path)?;
        let assembly = Assembler::new(tiles)?.solve()?;
        let product = assembly.corner_product();
        let composite = merge(&assembly);
        let result = scan(&composite, pattern);
        let roughness = result.as_ref().map_or(0, |found| found.roughness);

        println!(
            "{}: corner product {product}, roughness {roughness} ({:.2?})",
            input_path.display(),
            start_time.elapsed()
        );

        if self.cli.render {
            self.render_scan(input_path, result.as_ref(), pattern)?;
        }

        if let Some(pm) = &self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    // Composites render only when an orientation matched the pattern
    #[allow(clippy::print_stderr)]
    fn render_scan(
        &self,
        input_path: &Path,
        result: Option<&PatternScan>,
        pattern: &SearchPattern,
    ) -> Result<()> {
        if let Some(found) = result {
            let output_path = Self::get_output_path(input_path);
            let output_str = output_path
                .to_str()
                .ok_or_else(|| AssemblyError::InvalidTarget {
                    path: output_path.clone(),
                    reason: "output path is not valid UTF-8",
                })?;
            export_scan_as_png(found, pattern, output_str)
        } else {
            if !self.cli.quiet {
                eprintln!(
                    "No pattern occurrence found; skipping render for {}",
                    input_path.display()
                );
            }
            Ok(())
        }
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
