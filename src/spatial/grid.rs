//! Puzzle grid with boundary sentinels
//!
//! Tiles are stored row-major in an `Array2` indexed `[y, x]`. Lookups that
//! fall outside the grid resolve to synthetic locked tiles so that the edge
//! compatibility rule needs no special cases at the border: the entry just
//! above the top-left cell and the exit just below the bottom-right cell are
//! single-line vertical connectors, every other outside cell is empty.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, SolverError};
use crate::spatial::connector::{Connector, Direction, compatible_across_edge};
use crate::spatial::tiles::Tile;
use ndarray::Array2;
use std::fmt;

/// Pattern of the entry and exit sentinels (`│`)
pub const BOUNDARY_CONNECTOR: Connector = Connector::pack(1, 0, 1, 0);

/// Entry sentinel coordinate `[x, y]`, just above the top-left tile
pub const START_POSITION: [i64; 2] = [0, -1];

/// An edge whose two sides present different connector weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMismatch {
    /// Grid tile on the inner side of the edge, as `[x, y]`
    pub position: [usize; 2],
    /// Side of that tile the edge lies on
    pub direction: Direction,
    /// Weight shown by the tile and by its neighbor
    pub weights: [u8; 2],
}

/// Rectangular grid of rotatable tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// Build a grid from rows of glyphs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows or the rows are empty
    /// - Rows differ in length
    /// - A dimension exceeds [`MAX_GRID_DIMENSION`]
    /// - A glyph is not part of the connector alphabet
    pub fn from_glyph_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SolverError::InvalidPuzzle {
                    reason: format!(
                        "row {y} has {} tiles, expected {width} like row 0",
                        row.len()
                    ),
                });
            }
            for (x, &glyph) in row.iter().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(SolverError::UnrecognizedGlyph {
                    glyph,
                    position: [x, y],
                })?;
                tiles.push(tile);
            }
        }

        let tiles = Array2::from_shape_vec((height, width), tiles).map_err(|e| {
            SolverError::InvalidPuzzle {
                reason: format!("tiles do not form a {width}x{height} grid: {e}"),
            }
        })?;

        Self::from_tiles(tiles)
    }

    /// Wrap an existing tile array
    ///
    /// # Errors
    ///
    /// Returns an error if the array is empty or a dimension exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (height, width) = tiles.dim();
        if width == 0 || height == 0 {
            return Err(SolverError::InvalidPuzzle {
                reason: "grid contains no tiles".to_string(),
            });
        }
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(SolverError::InvalidPuzzle {
                reason: format!(
                    "grid of {width}x{height} exceeds the {MAX_GRID_DIMENSION} tile limit"
                ),
            });
        }
        Ok(Self { tiles })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Total number of real tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Underlying tile array, indexed `[y, x]`
    pub const fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    /// Exit sentinel coordinate `[x, y]`, just below the bottom-right tile
    pub fn end_position(&self) -> [i64; 2] {
        [self.width() as i64 - 1, self.height() as i64]
    }

    /// Real tile at `(x, y)`
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tiles.get([y, x])
    }

    /// Mutable real tile at `(x, y)`
    pub fn tile_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.tiles.get_mut([y, x])
    }

    /// Tile at any coordinate, substituting sentinels outside the grid
    pub fn tile_at(&self, position: [i64; 2]) -> Tile {
        if position == START_POSITION || position == self.end_position() {
            return Tile::sentinel(BOUNDARY_CONNECTOR);
        }

        let [x, y] = position;
        if x >= 0 && y >= 0 {
            if let Some(tile) = self.tile(x as usize, y as usize) {
                return *tile;
            }
        }

        Tile::sentinel(Connector::EMPTY)
    }

    /// Tile adjacent to `(x, y)` in `direction`
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Tile {
        let [dx, dy] = direction.offset();
        self.tile_at([x as i64 + dx, y as i64 + dy])
    }

    /// True when every real tile is locked
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_locked)
    }

    /// Number of locked real tiles
    pub fn locked_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_locked()).count()
    }

    /// Number of real tiles still waiting for an orientation
    pub fn unlocked_count(&self) -> usize {
        self.tile_count() - self.locked_count()
    }

    /// All `[x, y]` coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + use<> {
        let (height, width) = self.tiles.dim();
        (0..height).flat_map(move |y| (0..width).map(move |x| [x, y]))
    }

    /// Every edge, boundary edges included, whose sides disagree
    ///
    /// Internal edges are reported once, from the tile on their left or top.
    pub fn mismatched_edges(&self) -> Vec<EdgeMismatch> {
        let mut mismatches = Vec::new();

        for [x, y] in self.positions() {
            let Some(tile) = self.tile(x, y) else {
                continue;
            };

            for direction in Direction::ALL {
                let [dx, dy] = direction.offset();
                let neighbor_position = [x as i64 + dx, y as i64 + dy];
                let inside = neighbor_position[0] >= 0
                    && neighbor_position[1] >= 0
                    && self
                        .tile(neighbor_position[0] as usize, neighbor_position[1] as usize)
                        .is_some();

                // Internal edges are visited from both sides
                if inside && matches!(direction, Direction::Up | Direction::Left) {
                    continue;
                }

                let neighbor = self.tile_at(neighbor_position);
                let weights = [
                    tile.weight(direction),
                    neighbor.weight(direction.opposite()),
                ];
                if !compatible_across_edge(weights[0], weights[1]) {
                    mismatches.push(EdgeMismatch {
                        position: [x, y],
                        direction,
                        weights,
                    });
                }
            }
        }

        mismatches
    }

    /// Render each row back to glyphs
    pub fn glyph_rows(&self) -> Vec<String> {
        self.tiles
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Tile::glyph).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph_rows().join("\n"))
    }
}
