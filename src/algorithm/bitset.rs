use crate::spatial::connector::MAX_WEIGHT;
use bitvec::prelude::*;
use std::fmt;

const WEIGHT_SLOTS: usize = MAX_WEIGHT as usize + 1;

/// Fixed-size bitset over connector weights
///
/// Holds the weights a neighbor may still present on a shared edge. Weights
/// above [`MAX_WEIGHT`] are ignored on insert and never contained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightSet {
    bits: BitArr!(for WEIGHT_SLOTS, in u8, Lsb0),
}

impl Default for WeightSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightSet {
    /// Create a set with no weights present
    pub fn new() -> Self {
        Self {
            bits: bitarr![u8, Lsb0; 0; WEIGHT_SLOTS],
        }
    }

    /// Create a set containing every valid weight
    pub fn all() -> Self {
        (0..=MAX_WEIGHT).collect()
    }

    /// Create a set holding exactly one weight
    pub fn single(weight: u8) -> Self {
        let mut set = Self::new();
        set.insert(weight);
        set
    }

    /// Insert a weight
    pub fn insert(&mut self, weight: u8) {
        let index = usize::from(weight);
        if index < WEIGHT_SLOTS {
            self.bits.set(index, true);
        }
    }

    /// Test weight membership
    pub fn contains(&self, weight: u8) -> bool {
        let index = usize::from(weight);
        index < WEIGHT_SLOTS && self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no weights are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count weights in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all weights in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.bits
            .iter_ones()
            .filter_map(|index| u8::try_from(index).ok())
            .collect()
    }
}

impl FromIterator<u8> for WeightSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for weight in iter {
            set.insert(weight);
        }
        set
    }
}

impl fmt::Display for WeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeightSet({} weights: {:?})", self.count(), self.to_vec())
    }
}
