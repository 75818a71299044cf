//! Constraint propagation solver for rotating connector-pipe tile puzzles
//!
//! Every tile of the grid carries single- or double-line connectors on its
//! four sides and may be turned in quarter steps. Given a fixed entry above
//! the top-left tile and a fixed exit below the bottom-right tile, repeated
//! propagation passes narrow each tile's possible orientations until every
//! tile is locked, without any backtracking.

#![forbid(unsafe_code)]

/// Propagation passes, solver orchestration and puzzle scrambling
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Connector patterns, tiles and the bounded grid
pub mod spatial;

pub use io::error::{Result, SolverError};
