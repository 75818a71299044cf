//! Rotatable connector tiles
//!
//! A tile starts unlocked unless its pattern is rotationally symmetric, and
//! is locked exactly once when propagation settles its orientation.

use crate::spatial::connector::{Connector, Direction, RotationGroup};
use crate::spatial::glyphs::{connector_for, glyph_for};
use std::fmt;

/// Glyph shown for a pattern the codec cannot draw
const UNDRAWABLE_GLYPH: char = '?';

/// A single grid cell with its current orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    connector: Connector,
    glyph: char,
    locked: bool,
}

impl Tile {
    /// Create a tile from a glyph of the connector alphabet
    ///
    /// Returns `None` for glyphs outside the alphabet. Rotationally symmetric
    /// patterns (including the empty one) start locked.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        connector_for(glyph).map(|connector| Self {
            connector,
            glyph,
            locked: connector.is_rotationally_locked(),
        })
    }

    /// Create a tile from a pattern, locked only if it is symmetric
    pub fn from_connector(connector: Connector) -> Self {
        Self {
            connector,
            glyph: glyph_for(connector).unwrap_or(UNDRAWABLE_GLYPH),
            locked: connector.is_rotationally_locked(),
        }
    }

    /// Create an always-locked tile, used for boundary sentinels
    pub fn sentinel(connector: Connector) -> Self {
        Self {
            locked: true,
            ..Self::from_connector(connector)
        }
    }

    /// Current pattern
    pub const fn connector(&self) -> Connector {
        self.connector
    }

    /// Current glyph
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Whether the orientation is final
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Weight this tile presents on one side
    pub const fn weight(&self, direction: Direction) -> u8 {
        self.connector.weight(direction)
    }

    /// Orientations this tile could still take
    pub fn rotation_group(&self) -> RotationGroup {
        self.connector.rotation_group()
    }

    /// Rotate an unlocked tile clockwise by `steps` quarter turns
    ///
    /// Locked tiles are left untouched and `false` is returned.
    pub fn rotate(&mut self, steps: usize) -> bool {
        if self.locked {
            return false;
        }
        self.connector = self.connector.rotated(steps);
        self.glyph = glyph_for(self.connector).unwrap_or(UNDRAWABLE_GLYPH);
        true
    }

    /// Rotate into `target` and lock the tile
    ///
    /// Returns the number of clockwise quarter turns applied, or `None` when
    /// the tile is already locked or `target` is not one of its orientations.
    pub fn lock_as(&mut self, target: Connector) -> Option<usize> {
        if self.locked {
            return None;
        }
        let steps = self.rotation_group().steps_to(target)?;
        self.rotate(steps);
        self.locked = true;
        Some(steps)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph)
    }
}
