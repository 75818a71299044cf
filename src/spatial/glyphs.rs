//! Bidirectional table between line-drawing glyphs and connector patterns
//!
//! Single-line strokes carry weight 1 and double-line strokes weight 2. The
//! alphabet is closed under rotation, so every orientation of a known glyph
//! renders back to a glyph.

use crate::spatial::connector::Connector;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Glyphs in code page 437 order, with (up, right, down, left) weights
const GLYPH_WEIGHTS: [(char, [u8; 4]); 41] = [
    (' ', [0, 0, 0, 0]),
    ('│', [1, 0, 1, 0]),
    ('┤', [1, 0, 1, 1]),
    ('╡', [1, 0, 1, 2]),
    ('╢', [2, 0, 2, 1]),
    ('╖', [0, 0, 2, 1]),
    ('╕', [0, 0, 1, 2]),
    ('╣', [2, 0, 2, 2]),
    ('║', [2, 0, 2, 0]),
    ('╗', [0, 0, 2, 2]),
    ('╝', [2, 0, 0, 2]),
    ('╜', [2, 0, 0, 1]),
    ('╛', [1, 0, 0, 2]),
    ('┐', [0, 0, 1, 1]),
    ('└', [1, 1, 0, 0]),
    ('┴', [1, 1, 0, 1]),
    ('┬', [0, 1, 1, 1]),
    ('├', [1, 1, 1, 0]),
    ('─', [0, 1, 0, 1]),
    ('┼', [1, 1, 1, 1]),
    ('╞', [1, 2, 1, 0]),
    ('╟', [2, 1, 2, 0]),
    ('╚', [2, 2, 0, 0]),
    ('╔', [0, 2, 2, 0]),
    ('╩', [2, 2, 0, 2]),
    ('╦', [0, 2, 2, 2]),
    ('╠', [2, 2, 2, 0]),
    ('═', [0, 2, 0, 2]),
    ('╬', [2, 2, 2, 2]),
    ('╧', [1, 2, 0, 2]),
    ('╨', [2, 1, 0, 1]),
    ('╤', [0, 2, 1, 2]),
    ('╥', [0, 1, 2, 1]),
    ('╙', [2, 1, 0, 0]),
    ('╘', [1, 2, 0, 0]),
    ('╒', [0, 2, 1, 0]),
    ('╓', [0, 1, 2, 0]),
    ('╫', [2, 1, 2, 1]),
    ('╪', [1, 2, 1, 2]),
    ('┘', [1, 0, 0, 1]),
    ('┌', [0, 1, 1, 0]),
];

/// Immutable glyph codec shared by every grid
#[derive(Debug)]
pub struct GlyphTable {
    to_connector: HashMap<char, Connector>,
    to_glyph: HashMap<Connector, char>,
}

impl GlyphTable {
    fn build() -> Self {
        let mut to_connector = HashMap::with_capacity(GLYPH_WEIGHTS.len());
        let mut to_glyph = HashMap::with_capacity(GLYPH_WEIGHTS.len());

        for &(glyph, [up, right, down, left]) in &GLYPH_WEIGHTS {
            let connector = Connector::pack(up, right, down, left);
            to_connector.insert(glyph, connector);
            to_glyph.insert(connector, glyph);
        }

        Self {
            to_connector,
            to_glyph,
        }
    }

    /// Pattern drawn by `glyph`, if it belongs to the alphabet
    pub fn connector(&self, glyph: char) -> Option<Connector> {
        self.to_connector.get(&glyph).copied()
    }

    /// Glyph drawing `connector`, if one exists
    pub fn glyph(&self, connector: Connector) -> Option<char> {
        self.to_glyph.get(&connector).copied()
    }

    /// Number of glyphs in the alphabet
    pub fn len(&self) -> usize {
        self.to_connector.len()
    }

    /// True if the table holds no glyphs
    pub fn is_empty(&self) -> bool {
        self.to_connector.is_empty()
    }
}

static GLYPHS: LazyLock<GlyphTable> = LazyLock::new(GlyphTable::build);

/// The process-wide glyph table
pub fn glyph_table() -> &'static GlyphTable {
    &GLYPHS
}

/// Look up the pattern for a glyph
pub fn connector_for(glyph: char) -> Option<Connector> {
    GLYPHS.connector(glyph)
}

/// Look up the glyph for a pattern
pub fn glyph_for(connector: Connector) -> Option<char> {
    GLYPHS.glyph(connector)
}

/// Every glyph the codec understands, in code page 437 order
pub fn alphabet() -> impl Iterator<Item = char> {
    GLYPH_WEIGHTS.into_iter().map(|(glyph, _)| glyph)
}
