//! Connector patterns and their rotation algebra
//!
//! A connector pattern packs the connector weight of each side of a tile into
//! a single byte, two bits per direction. Rotation is a shift, and symmetry
//! checks reduce to comparing a byte against its own rotation.

use std::fmt;

/// Largest valid connector weight (double-line connector)
pub const MAX_WEIGHT: u8 = 2;

const WEIGHT_MASK: u8 = 0b11;

/// One side of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row `y - 1`
    Up,
    /// Towards column `x + 1`
    Right,
    /// Towards row `y + 1`
    Down,
    /// Towards column `x - 1`
    Left,
}

impl Direction {
    /// All directions in clockwise order starting from `Up`
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Bit offset of this direction's weight inside a packed pattern
    const fn shift(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Right => 2,
            Self::Down => 4,
            Self::Left => 6,
        }
    }

    /// The direction facing back across the same edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Coordinate delta `[dx, dy]` of a step in this direction
    pub const fn offset(self) -> [i64; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Right => [1, 0],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
        }
    }
}

/// Four directional connector weights packed into one byte
///
/// Layout: up in bits 0-1, right in bits 2-3, down in bits 4-5, left in bits 6-7.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connector(u8);

impl Connector {
    /// Pattern with no connectors on any side
    pub const EMPTY: Self = Self(0);

    /// Build a pattern from up, right, down and left weights
    ///
    /// Returns `None` if any weight exceeds [`MAX_WEIGHT`].
    pub const fn new(up: u8, right: u8, down: u8, left: u8) -> Option<Self> {
        if up > MAX_WEIGHT || right > MAX_WEIGHT || down > MAX_WEIGHT || left > MAX_WEIGHT {
            return None;
        }
        Some(Self::pack(up, right, down, left))
    }

    /// Pack weights that are already known to be in range
    pub(crate) const fn pack(up: u8, right: u8, down: u8, left: u8) -> Self {
        Self(
            (up << Direction::Up.shift())
                | (right << Direction::Right.shift())
                | (down << Direction::Down.shift())
                | (left << Direction::Left.shift()),
        )
    }

    /// Raw packed representation
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Connector weight presented on the given side
    pub const fn weight(self, direction: Direction) -> u8 {
        (self.0 >> direction.shift()) & WEIGHT_MASK
    }

    /// Rotate 90° clockwise: up moves to right, right to down, down to left, left to up
    #[must_use]
    pub const fn rotate(self) -> Self {
        Self((self.0 << 2) | self.weight(Direction::Left))
    }

    /// Rotate clockwise by `steps` quarter turns
    #[must_use]
    pub const fn rotated(self, steps: usize) -> Self {
        let mut pattern = self;
        let mut remaining = steps % 4;
        while remaining > 0 {
            pattern = pattern.rotate();
            remaining -= 1;
        }
        pattern
    }

    /// True when no rotation changes the pattern (rotation group of size one)
    pub const fn is_rotationally_locked(self) -> bool {
        self.rotate().0 == self.0
    }

    /// Distinct patterns reachable by 0-3 clockwise rotations
    ///
    /// Members are ordered by the number of steps needed to reach them, so a
    /// member's index is also its rotation distance from `self`.
    pub fn rotation_group(self) -> RotationGroup {
        let mut members = [self; 4];
        let mut len = 1;
        let mut current = self.rotate();
        while current != self {
            if let Some(slot) = members.get_mut(len) {
                *slot = current;
            }
            len += 1;
            current = current.rotate();
        }
        RotationGroup { members, len }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[u{} r{} d{} l{}]",
            self.weight(Direction::Up),
            self.weight(Direction::Right),
            self.weight(Direction::Down),
            self.weight(Direction::Left)
        )
    }
}

/// The distinct orientations of a connector pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationGroup {
    members: [Connector; 4],
    len: usize,
}

impl RotationGroup {
    /// Number of distinct orientations (1, 2 or 4)
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; every pattern has at least its identity orientation
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate orientations in rotation-distance order
    pub fn iter(&self) -> impl Iterator<Item = Connector> + '_ {
        self.members.iter().copied().take(self.len)
    }

    /// Clockwise steps from the group's base pattern to `target`
    pub fn steps_to(&self, target: Connector) -> Option<usize> {
        self.iter().position(|member| member == target)
    }

    /// Test membership
    pub fn contains(&self, pattern: Connector) -> bool {
        self.steps_to(pattern).is_some()
    }
}

/// Two tiles sharing an edge are compatible iff they present the same weight on it
pub const fn compatible_across_edge(a_side_weight: u8, b_side_weight: u8) -> bool {
    a_side_weight == b_side_weight
}
