//! Tests for puzzle decoding, frame removal and file loading

#[cfg(test)]
mod tests {
    use pipelock::SolverError;
    use pipelock::io::configuration::{FRAME_BORDER_ROWS, FRAME_LEFT_EDGE, FRAME_RIGHT_EDGE};
    use pipelock::io::puzzle::{
        decode_bytes, grid_from_text, load_puzzle, parse_glyph_rows, strip_frame,
    };
    use std::fs;
    use tempfile::TempDir;

    fn framed(rows: &[&str]) -> String {
        let border = "═".repeat(20);
        let mut lines = vec![border.clone(); FRAME_BORDER_ROWS];
        lines.extend(
            rows.iter()
                .map(|row| format!("{FRAME_LEFT_EDGE}{row}{FRAME_RIGHT_EDGE}")),
        );
        lines.extend(vec![border; FRAME_BORDER_ROWS]);
        lines.join("\n")
    }

    // Tests UTF-8 text passes through unchanged
    // Verified by always decoding as code page 437
    #[test]
    fn test_decode_utf8() {
        let text = "└╖\n ╚";
        assert_eq!(decode_bytes(text.as_bytes()).expect("decodes"), text);
    }

    // Tests code page 437 box drawing bytes map to their glyphs
    // Verified by offsetting the lookup table by one
    #[test]
    fn test_decode_cp437() {
        let bytes = [0xB3, 0xC4, b'\n', b' ', 0xCE, 0xDA];
        assert_eq!(decode_bytes(&bytes).expect("decodes"), "│─\n ╬┌");
    }

    // Tests code page 437 bytes that also form valid UTF-8 still decode as code page 437
    // Verified by trying UTF-8 before code page 437
    #[test]
    fn test_decode_cp437_that_is_valid_utf8() {
        let bytes = [0xC4, 0xB3, b'\n'];
        assert!(std::str::from_utf8(&bytes).is_ok());

        let text = decode_bytes(&bytes).expect("decodes");
        assert_eq!(text, "─│\n");

        let grid = grid_from_text(&text).expect("valid grid");
        assert_eq!(grid.glyph_rows(), vec!["─│"]);
    }

    // Tests UTF-8 text mixing in bytes from the box drawing block stays UTF-8
    // Verified by decoding any box drawing byte as code page 437
    #[test]
    fn test_decode_utf8_with_block_bytes() {
        // 'ĳ' encodes as 0xC4 0xB3, the box drawing glyph '─' as 0xE2 0x94 0x80
        let text = "ĳ─";
        assert_eq!(decode_bytes(text.as_bytes()).expect("decodes"), text);
    }

    // Tests bytes outside the shade and box drawing block are refused
    // Verified by mapping unknown bytes to spaces
    #[test]
    fn test_decode_rejects_other_bytes() {
        match decode_bytes(&[b' ', 0x80]) {
            Err(SolverError::InvalidPuzzle { reason }) => {
                assert!(reason.contains("0x80 at offset 1"), "{reason}");
            }
            other => unreachable!("expected InvalidPuzzle, got {other:?}"),
        }
    }

    // Tests the frame is removed when every interior row carries it
    // Verified by keeping the frame edges on each row
    #[test]
    fn test_strip_frame() {
        let text = framed(&["└╖ ", " ╚╕"]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(strip_frame(&lines), vec!["└╖ ", " ╚╕"]);
    }

    // Tests unframed text is returned untouched
    // Verified by always dropping the border rows
    #[test]
    fn test_strip_frame_without_frame() {
        let lines = vec!["└╖ ", " ╚╕", "  │"];
        assert_eq!(strip_frame(&lines), lines);

        let text = framed(&["└╖ ", " ╚╕"]);
        let mut partial: Vec<&str> = text.lines().collect();
        if let Some(row) = partial.get_mut(FRAME_BORDER_ROWS) {
            *row = "└╖ ";
        }
        assert_eq!(strip_frame(&partial).len(), partial.len());
    }

    // Tests short rows are padded with blank tiles
    // Verified by rejecting rows of unequal length
    #[test]
    fn test_parse_pads_short_rows() {
        let rows = parse_glyph_rows("└╖\n ╚╕\n").expect("parses");
        assert_eq!(rows, vec![vec!['└', '╖', ' '], vec![' ', '╚', '╕']]);
    }

    // Tests trailing blank lines and carriage returns are ignored
    // Verified by keeping empty trailing lines as rows
    #[test]
    fn test_parse_line_endings() {
        let rows = parse_glyph_rows("│\r\n│\r\n\n\n").expect("parses");
        assert_eq!(rows, vec![vec!['│'], vec!['│']]);
    }

    // Tests text without tiles is an invalid puzzle
    // Verified by returning an empty row list
    #[test]
    fn test_parse_empty_text() {
        assert!(matches!(
            parse_glyph_rows("\n\n"),
            Err(SolverError::InvalidPuzzle { .. })
        ));
        assert!(matches!(
            parse_glyph_rows(""),
            Err(SolverError::InvalidPuzzle { .. })
        ));
    }

    // Tests framed text becomes a grid of the inner tiles
    // Verified by parsing the frame as tiles
    #[test]
    fn test_grid_from_framed_text() {
        let grid = grid_from_text(&framed(&["└╖ ", " ╚╕", "  │"])).expect("valid puzzle");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.glyph_rows(), vec!["└╖ ", " ╚╕", "  │"]);
    }

    // Tests unknown glyphs surface with their position
    // Verified by dropping unknown characters during parsing
    #[test]
    fn test_grid_from_text_unknown_glyph() {
        assert!(matches!(
            grid_from_text("││\n│#"),
            Err(SolverError::UnrecognizedGlyph {
                glyph: '#',
                position: [1, 1]
            })
        ));
    }

    // Tests puzzles load from disk in either encoding
    // Verified by reading the file as UTF-8 only
    #[test]
    fn test_load_puzzle() {
        let dir = TempDir::new().expect("temp dir");
        let utf8_path = dir.path().join("utf8.txt");
        let cp437_path = dir.path().join("cp437.txt");
        fs::write(&utf8_path, "─\n").expect("write puzzle");
        fs::write(&cp437_path, [0xC4, b'\n']).expect("write puzzle");

        let utf8 = load_puzzle(&utf8_path).expect("loads");
        let cp437 = load_puzzle(&cp437_path).expect("loads");
        assert_eq!(utf8, cp437);
        assert_eq!(utf8.glyph_rows(), vec!["─"]);
    }

    // Tests missing files report the path and operation
    // Verified by converting the error without context
    #[test]
    fn test_load_missing_puzzle() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing.txt");
        match load_puzzle(&missing) {
            Err(SolverError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "read puzzle");
            }
            other => unreachable!("expected FileSystem, got {other:?}"),
        }
    }
}
