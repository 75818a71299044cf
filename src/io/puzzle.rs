//! Puzzle file decoding and frame removal
//!
//! Published puzzles arrive in code page 437 wrapped in a decorative frame.
//! UTF-8 files, framed or not, are accepted as well.

use crate::io::configuration::{FRAME_BORDER_ROWS, FRAME_LEFT_EDGE, FRAME_RIGHT_EDGE};
use crate::io::error::{Result, SolverError};
use crate::spatial::grid::Grid;
use std::path::Path;

/// First byte of the code page 437 block covered by [`CP437_BLOCK`]
const CP437_BLOCK_START: u8 = 0xB0;

/// Code page 437 shades and box drawing, bytes `0xB0..=0xDF`
const CP437_BLOCK: [char; 48] = [
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
];

/// Decode raw puzzle bytes into text
///
/// Bytes whose non-ASCII part lies entirely in the code page 437 shade and
/// box-drawing block are read as code page 437. Everything else must be
/// UTF-8, whose box-drawing glyphs all start with `0xE2`.
///
/// # Errors
///
/// Returns an error if the bytes are neither UTF-8 nor ASCII mixed with
/// code page 437 shade and box-drawing characters
pub fn decode_bytes(bytes: &[u8]) -> Result<String> {
    if bytes
        .iter()
        .all(|&byte| byte.is_ascii() || cp437_glyph(byte).is_some())
    {
        return Ok(bytes
            .iter()
            .map(|&byte| cp437_glyph(byte).unwrap_or(char::from(byte)))
            .collect());
    }

    std::str::from_utf8(bytes).map(str::to_string).map_err(|error| {
        let offset = error.valid_up_to();
        let byte = bytes.get(offset).copied().unwrap_or_default();
        SolverError::InvalidPuzzle {
            reason: format!("byte 0x{byte:02X} at offset {offset} is not a puzzle glyph"),
        }
    })
}

fn cp437_glyph(byte: u8) -> Option<char> {
    byte.checked_sub(CP437_BLOCK_START)
        .and_then(|index| CP437_BLOCK.get(usize::from(index)))
        .copied()
}

/// Remove the decorative frame if every interior row carries it
///
/// Rows without the frame are returned as they are.
pub fn strip_frame<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let framed = lines.len() > 2 * FRAME_BORDER_ROWS
        && lines
            .get(FRAME_BORDER_ROWS..lines.len() - FRAME_BORDER_ROWS)
            .is_some_and(|interior| {
                interior.iter().all(|line| {
                    line.starts_with(FRAME_LEFT_EDGE) && line.ends_with(FRAME_RIGHT_EDGE)
                })
            });

    if !framed {
        return lines.to_vec();
    }

    lines
        .get(FRAME_BORDER_ROWS..lines.len() - FRAME_BORDER_ROWS)
        .unwrap_or_default()
        .iter()
        .map(|&line| {
            line.strip_prefix(FRAME_LEFT_EDGE)
                .and_then(|inner| inner.strip_suffix(FRAME_RIGHT_EDGE))
                .unwrap_or(line)
        })
        .collect()
}

/// Split puzzle text into rectangular rows of glyphs
///
/// Trailing empty lines are dropped, the frame is removed when present and
/// short rows are padded with empty tiles to the widest row.
///
/// # Errors
///
/// Returns an error if the text contains no rows
pub fn parse_glyph_rows(text: &str) -> Result<Vec<Vec<char>>> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut rows: Vec<Vec<char>> = strip_frame(&lines)
        .iter()
        .map(|line| line.chars().collect())
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.is_empty() || width == 0 {
        return Err(SolverError::InvalidPuzzle {
            reason: "puzzle text contains no tiles".to_string(),
        });
    }

    for row in &mut rows {
        row.resize(width, ' ');
    }

    Ok(rows)
}

/// Build a grid from puzzle text
///
/// # Errors
///
/// Returns an error if the text has no rows or contains glyphs outside the
/// connector alphabet
pub fn grid_from_text(text: &str) -> Result<Grid> {
    Grid::from_glyph_rows(&parse_glyph_rows(text)?)
}

/// Read, decode and parse a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid puzzle
pub fn load_puzzle(path: &Path) -> Result<Grid> {
    let bytes = std::fs::read(path).map_err(|e| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "read puzzle",
        source: e,
    })?;

    grid_from_text(&decode_bytes(&bytes)?)
}
