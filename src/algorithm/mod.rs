/// Fixed-size bitset of connector weights for neighbor constraints
pub mod bitset;
/// Solver orchestration over repeated propagation passes
pub mod executor;
/// Single propagation pass and candidate domain computation
pub mod propagation;
/// Seeded random re-orientation of puzzle grids
pub mod scramble;
