//! Spatial data structures for connector puzzles
//!
//! This module contains spatial-related functionality including:
//! - Connector patterns and their rotation algebra
//! - The glyph codec shared by every grid
//! - Tile state and the bounded grid with boundary sentinels

/// Connector patterns, directions and edge compatibility
pub mod connector;
/// Bidirectional glyph to connector table
pub mod glyphs;
/// Grid storage, neighbor lookup and boundary sentinels
pub mod grid;
/// Rotatable tiles with lock state
pub mod tiles;

pub use grid::Grid;
pub use tiles::Tile;
