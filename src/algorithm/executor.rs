use crate::{
    algorithm::propagation::{PassMode, PassOutcome, run_pass_into},
    io::error::{Result, SolverError, WithContext},
    spatial::grid::Grid,
};
use log::{debug, info};

/// Solver parameters
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverConfig {
    /// Whether locks become visible within the pass that makes them
    pub pass_mode: PassMode,
}

/// Metrics and rendering of a finished solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Sum of quarter turns applied to every tile
    pub total_rotations: usize,
    /// Full-grid passes needed to lock every tile
    pub total_passes: usize,
    /// Tiles that were symmetric and locked before the first pass
    pub initially_locked: usize,
    /// Solved grid rendered back to glyph rows
    pub solution: Vec<String>,
}

/// Drives propagation passes over a grid until every tile is locked
///
/// The solver owns the grid for the whole solve. When a pass fails the grid
/// keeps its partially locked state and stays readable through [`Self::grid`]
/// for diagnostics; it is not a valid solution.
pub struct PropagationSolver {
    grid: Grid,
    config: SolverConfig,
    passes: usize,
    rotations: usize,
    initially_locked: usize,
}

impl PropagationSolver {
    /// Create a solver for `grid`
    pub fn new(grid: Grid, config: SolverConfig) -> Self {
        let initially_locked = grid.locked_count();
        Self {
            grid,
            config,
            passes: 0,
            rotations: 0,
            initially_locked,
        }
    }

    /// Build a grid from glyph rows and wrap it in a solver
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not form a valid grid
    pub fn from_glyph_rows<R: AsRef<[char]>>(rows: &[R], config: SolverConfig) -> Result<Self> {
        Ok(Self::new(Grid::from_glyph_rows(rows)?, config))
    }

    /// Access the grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take the grid out of the solver
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Passes executed so far
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Quarter turns applied so far
    pub const fn rotations(&self) -> usize {
        self.rotations
    }

    /// Active configuration
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Execute a single pass if the grid is not solved yet
    ///
    /// Returns `Ok(true)` while more passes are needed and `Ok(false)` once
    /// the grid is solved. An already solved grid costs no pass.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A tile has no compatible orientation (`InconsistentCell`)
    /// - The pass locked nothing while tiles remain unlocked (`NonConvergence`)
    pub fn execute_pass(&mut self) -> Result<bool> {
        if self.grid.is_solved() {
            return Ok(false);
        }

        self.passes += 1;
        let mut outcome = PassOutcome::default();
        if let Err(error) = run_pass_into(&mut self.grid, self.config.pass_mode, &mut outcome) {
            // Locks made before the failing tile remain in the grid
            self.rotations += outcome.rotations;
            return Err(error).with_pass(self.passes);
        }
        self.record(&outcome)?;

        Ok(!self.grid.is_solved())
    }

    fn record(&mut self, outcome: &PassOutcome) -> Result<()> {
        self.rotations += outcome.rotations;
        debug!(
            "Pass {} locked {} tiles with {} rotations ({} total so far)",
            self.passes,
            outcome.locked(),
            outcome.rotations,
            self.rotations
        );

        if outcome.locked() == 0 && !self.grid.is_solved() {
            return Err(SolverError::NonConvergence {
                pass: self.passes,
                unlocked: self.grid.unlocked_count(),
            });
        }

        Ok(())
    }

    /// Run passes until the grid is solved
    ///
    /// # Errors
    ///
    /// Returns the first pass error; see [`Self::execute_pass`]
    pub fn solve(&mut self) -> Result<SolveReport> {
        while self.execute_pass()? {}

        let report = self.report();
        info!(
            "Solved {}x{} grid after {} passes with {} rotations",
            self.grid.width(),
            self.grid.height(),
            report.total_passes,
            report.total_rotations
        );
        Ok(report)
    }

    /// Snapshot of the current metrics and rendering
    pub fn report(&self) -> SolveReport {
        SolveReport {
            total_rotations: self.rotations,
            total_passes: self.passes,
            initially_locked: self.initially_locked,
            solution: self.grid.glyph_rows(),
        }
    }
}

/// Solve a grid in one call
///
/// # Errors
///
/// Returns an error if propagation hits an inconsistency or stalls
pub fn solve(grid: Grid, config: SolverConfig) -> Result<SolveReport> {
    PropagationSolver::new(grid, config).solve()
}
