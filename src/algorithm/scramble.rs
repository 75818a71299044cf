use crate::spatial::grid::Grid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Return a copy of `grid` with every unlocked tile turned a random number of quarter turns
///
/// Locked tiles keep their orientation. The same seed always produces the
/// same arrangement.
pub fn scramble(grid: &Grid, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scrambled = grid.clone();

    for [x, y] in grid.positions() {
        if let Some(tile) = scrambled.tile_mut(x, y) {
            if !tile.is_locked() {
                tile.rotate(rng.random_range(0..4));
            }
        }
    }

    scrambled
}

/// Count the quarter turns separating each tile of `from` from the matching tile of `to`
///
/// Returns `None` if the grids differ in shape or a tile of `to` is not an
/// orientation of the matching tile of `from`.
pub fn rotation_distance(from: &Grid, to: &Grid) -> Option<usize> {
    if from.tiles().dim() != to.tiles().dim() {
        return None;
    }

    from.tiles()
        .iter()
        .zip(to.tiles().iter())
        .map(|(start, target)| start.rotation_group().steps_to(target.connector()))
        .sum()
}
