//! PNG export of connector grids, one 3x3 pixel block per tile

use crate::io::configuration::{
    BACKGROUND_COLOR, DOUBLE_LINE_COLOR, PIXELS_PER_TILE, SINGLE_LINE_COLOR, UNLOCKED_COLOR,
};
use crate::io::error::{Result, SolverError};
use crate::spatial::connector::Direction;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::Tile;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

// Pixel offsets inside a tile block: edge midpoints and the centre
const fn direction_pixel(direction: Direction) -> (u32, u32) {
    match direction {
        Direction::Up => (1, 0),
        Direction::Right => (2, 1),
        Direction::Down => (1, 2),
        Direction::Left => (0, 1),
    }
}

const CENTRE_PIXEL: (u32, u32) = (1, 1);

fn weight_color(tile: &Tile, weight: u8) -> [u8; 4] {
    match (tile.is_locked(), weight) {
        (_, 0) => BACKGROUND_COLOR,
        (false, _) => UNLOCKED_COLOR,
        (true, 1) => SINGLE_LINE_COLOR,
        (true, _) => DOUBLE_LINE_COLOR,
    }
}

/// Draw the grid into an RGBA buffer
///
/// Each tile covers a square of [`PIXELS_PER_TILE`] pixels. Its centre is lit
/// when the tile carries any connector and each edge midpoint is coloured by
/// the weight on that side. Tiles that are still unlocked use a warning colour.
pub fn render_grid(grid: &Grid) -> RgbaImage {
    let width = grid.width() as u32 * PIXELS_PER_TILE;
    let height = grid.height() as u32 * PIXELS_PER_TILE;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    for [x, y] in grid.positions() {
        let Some(tile) = grid.tile(x, y) else {
            continue;
        };
        let origin_x = x as u32 * PIXELS_PER_TILE;
        let origin_y = y as u32 * PIXELS_PER_TILE;

        let strongest = Direction::ALL
            .iter()
            .map(|&direction| tile.weight(direction))
            .max()
            .unwrap_or(0);
        let (cx, cy) = CENTRE_PIXEL;
        img.put_pixel(
            origin_x + cx,
            origin_y + cy,
            Rgba(weight_color(tile, strongest)),
        );

        for direction in Direction::ALL {
            let (px, py) = direction_pixel(direction);
            img.put_pixel(
                origin_x + px,
                origin_y + py,
                Rgba(weight_color(tile, tile.weight(direction))),
            );
        }
    }

    img
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    let img = render_grid(grid);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SolverError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
