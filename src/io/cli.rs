//! Command-line interface for batch solving of connector-pipe puzzles

use crate::algorithm::executor::{PropagationSolver, SolveReport, SolverConfig};
use crate::algorithm::propagation::PassMode;
use crate::algorithm::scramble::scramble;
use crate::io::configuration::{FAILURE_SUFFIX, OUTPUT_SUFFIX, PUZZLE_EXTENSION};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::puzzle::load_puzzle;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pipelock")]
#[command(
    author,
    version,
    about = "Lock every tile of a connector-pipe puzzle into its unique orientation"
)]
/// Command-line arguments for the puzzle solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file or directory of `.txt` puzzles to solve
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process puzzles even if a solution file exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Also render the solved grid as a PNG image
    #[arg(short, long)]
    pub png: bool,

    /// Evaluate each pass against the grid as it stood when the pass began
    #[arg(short, long)]
    pub snapshot: bool,

    /// Randomly re-orient every rotatable tile with this seed before solving
    #[arg(long, value_name = "SEED")]
    pub scramble: Option<u64>,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration selected by the flags
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            pass_mode: if self.snapshot {
                PassMode::Snapshot
            } else {
                PassMode::InPlace
            },
        }
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
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

    /// Solve puzzles according to CLI arguments
    ///
    /// Returns the reports of every puzzle solved in this run.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, puzzle loading, solving or
    /// writing results fails
    pub fn process(&mut self) -> Result<Vec<SolveReport>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let reports = files
            .iter()
            .enumerate()
            .map(|(index, file)| self.process_file(file, index))
            .collect::<Result<Vec<_>>>();

        // Bars are cleared even when a puzzle fails
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        reports
    }

    /// Progress display, absent in quiet mode
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| SolverError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "list directory",
                    source: e,
                })?;
            for entry in entries {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
                    && !Self::is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a puzzle file or a directory of puzzles",
            ))
        }
    }

    fn is_output_file(path: &Path) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, OUTPUT_SUFFIX, PUZZLE_EXTENSION);
        if output_path.exists() {
            info!("Skipping: {} (solution exists)", input_path.display());
            false
        } else {
            true
        }
    }

    // Allow print for the per-puzzle answer line
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<SolveReport> {
        let mut grid = load_puzzle(input_path)?;
        if let Some(seed) = self.cli.scramble {
            grid = scramble(&grid, seed);
        }

        let mut solver = PropagationSolver::new(grid, self.cli.solver_config());

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(
                index,
                input_path,
                solver.grid().tile_count(),
                solver.grid().locked_count(),
            );
        }

        let outcome = loop {
            match solver.execute_pass() {
                Ok(more) => {
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.update_pass(index, solver.passes(), solver.grid().locked_count());
                    }
                    if !more {
                        break Ok(solver.report());
                    }
                }
                Err(error) => break Err(error),
            }
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, outcome.is_ok());
        }

        let report = match outcome {
            Ok(report) => report,
            Err(error) => {
                warn!(
                    "{} failed after {} passes; grid at failure:\n{}",
                    input_path.display(),
                    solver.passes(),
                    solver.grid()
                );
                if self.cli.png {
                    let failed_path = Self::get_output_path(input_path, FAILURE_SUFFIX, "png");
                    export_grid_as_png(solver.grid(), &failed_path)?;
                }
                return Err(error);
            }
        };

        let output_path = Self::get_output_path(input_path, OUTPUT_SUFFIX, PUZZLE_EXTENSION);
        let mut contents = report.solution.join("\n");
        contents.push('\n');
        std::fs::write(&output_path, contents).map_err(|e| SolverError::FileSystem {
            path: output_path.clone(),
            operation: "write solution",
            source: e,
        })?;

        if self.cli.png {
            let png_path = Self::get_output_path(input_path, OUTPUT_SUFFIX, "png");
            export_grid_as_png(solver.grid(), &png_path)?;
        }

        println!(
            "{}: {} rotations in {} passes",
            input_path.display(),
            report.total_rotations,
            report.total_passes
        );

        Ok(report)
    }

    /// Path next to `input_path` with `suffix` appended to the stem
    pub fn get_output_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
