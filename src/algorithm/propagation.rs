use crate::{
    algorithm::bitset::WeightSet,
    io::error::{Result, SolverError, computation_error},
    spatial::connector::{Connector, Direction},
    spatial::grid::Grid,
};
use log::{debug, trace};

/// How a pass observes tiles locked earlier in the same pass
///
/// Domains only ever shrink, so both modes reach the same fixed point with
/// the same rotations. `InPlace` lets later tiles see locks made earlier in
/// the pass and usually needs fewer passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassMode {
    /// Lock tiles as soon as they are decided, in row-major order
    #[default]
    InPlace,
    /// Decide every tile against the grid as it stood when the pass began
    Snapshot,
}

/// A tile whose orientation became final during a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Tile coordinates `[x, y]`
    pub position: [usize; 2],
    /// Glyph after rotation
    pub glyph: char,
    /// Clockwise quarter turns applied to reach the final orientation
    pub rotations: usize,
}

/// Result of one full pass over the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassOutcome {
    /// Locks made in this pass, in the order they happened
    pub locks: Vec<LockEvent>,
    /// Quarter turns applied in this pass
    pub rotations: usize,
}

impl PassOutcome {
    /// Number of tiles locked in this pass
    pub fn locked(&self) -> usize {
        self.locks.len()
    }
}

/// Weights the neighbor in `direction` may present on the shared edge
///
/// A locked neighbor offers exactly its current weight. An unlocked one
/// offers every weight it would show on that edge in any of its orientations.
pub fn edge_constraint(grid: &Grid, x: usize, y: usize, direction: Direction) -> WeightSet {
    let neighbor = grid.neighbor(x, y, direction);
    let facing = direction.opposite();

    if neighbor.is_locked() {
        WeightSet::single(neighbor.weight(facing))
    } else {
        neighbor
            .rotation_group()
            .iter()
            .map(|orientation| orientation.weight(facing))
            .collect()
    }
}

/// Orientations of the tile at `(x, y)` that agree with all four neighbors
///
/// A locked tile's domain is its current pattern. Coordinates outside the
/// grid have an empty domain.
pub fn candidate_domain(grid: &Grid, x: usize, y: usize) -> Vec<Connector> {
    let Some(tile) = grid.tile(x, y) else {
        return Vec::new();
    };
    if tile.is_locked() {
        return vec![tile.connector()];
    }

    let constraints = Direction::ALL.map(|direction| {
        (direction, edge_constraint(grid, x, y, direction))
    });

    tile.rotation_group()
        .iter()
        .filter(|orientation| {
            constraints
                .iter()
                .all(|(direction, allowed)| allowed.contains(orientation.weight(*direction)))
        })
        .collect()
}

/// Run one row-major pass, locking every tile whose domain collapses to one orientation
///
/// Tiles with several candidates are left untouched for a later pass.
///
/// # Errors
///
/// Returns an error if:
/// - A tile has no orientation compatible with its neighbors (`InconsistentCell`,
///   with the pass number left at 0 for the caller to fill in)
/// - A surviving candidate is not an orientation of its tile
pub fn run_pass(grid: &mut Grid, mode: PassMode) -> Result<PassOutcome> {
    let mut outcome = PassOutcome::default();
    run_pass_into(grid, mode, &mut outcome)?;
    Ok(outcome)
}

/// Run one pass like [`run_pass`], recording locks into `outcome` as they happen
///
/// Locks made before a failing tile stay in the grid, and they stay in
/// `outcome` too.
///
/// # Errors
///
/// Returns the same errors as [`run_pass`]
pub fn run_pass_into(grid: &mut Grid, mode: PassMode, outcome: &mut PassOutcome) -> Result<()> {
    let snapshot = matches!(mode, PassMode::Snapshot).then(|| grid.clone());

    for [x, y] in grid.positions() {
        if grid.tile(x, y).is_none_or(|tile| tile.is_locked()) {
            continue;
        }

        let reference = snapshot.as_ref().unwrap_or(&*grid);
        let domain = candidate_domain(reference, x, y);
        trace!("Tile ({x}, {y}) has {} candidate orientations", domain.len());

        match domain.as_slice() {
            [] => {
                return Err(SolverError::InconsistentCell {
                    position: [x, y],
                    pass: 0,
                });
            }
            [survivor] => {
                let tile = grid.tile_mut(x, y).ok_or_else(|| {
                    computation_error("run_pass", &format!("tile ({x}, {y}) is outside the grid"))
                })?;
                let rotations = tile.lock_as(*survivor).ok_or_else(|| {
                    computation_error(
                        "run_pass",
                        &format!("{survivor} is not an orientation of tile ({x}, {y})"),
                    )
                })?;

                outcome.rotations += rotations;
                debug!(
                    "Locked {} ({x}, {y}) after {rotations} rotations ({} in this pass)",
                    tile.glyph(),
                    outcome.rotations
                );
                outcome.locks.push(LockEvent {
                    position: [x, y],
                    glyph: tile.glyph(),
                    rotations,
                });
            }
            _ => {}
        }
    }

    Ok(())
}
