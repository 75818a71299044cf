//! Solver constants and runtime configuration defaults

// Decorative frame around published puzzles
/// Prefix of every framed puzzle row
pub const FRAME_LEFT_EDGE: &str = " │ ║   ";
/// Suffix of every framed puzzle row
pub const FRAME_RIGHT_EDGE: &str = "   ║ │░";
/// Number of frame rows above and below the tiles
pub const FRAME_BORDER_ROWS: usize = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Input and output naming
/// Extension of puzzle files picked up from a directory
pub const PUZZLE_EXTENSION: &str = "txt";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_solved";
/// Suffix for diagnostic renders of grids that failed to solve
pub const FAILURE_SUFFIX: &str = "_failed";

// PNG rendering
/// Pixels along each side of a rendered tile (edge, centre, edge)
pub const PIXELS_PER_TILE: u32 = 3;
/// Colour of tile corners and empty sides
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Colour of single-line connectors on locked tiles
pub const SINGLE_LINE_COLOR: [u8; 4] = [70, 130, 180, 255];
/// Colour of double-line connectors on locked tiles
pub const DOUBLE_LINE_COLOR: [u8; 4] = [25, 25, 112, 255];
/// Colour of any connector on a tile that never locked
pub const UNLOCKED_COLOR: [u8; 4] = [220, 20, 60, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
