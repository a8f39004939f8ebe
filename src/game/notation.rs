//! Column letters: column 0 is `A`, column 1 is `B`, and so on.

use super::board::MAX_COLS;

/// Letter naming a 0-indexed column, if the column is nameable.
pub fn column_letter(col: usize) -> Option<char> {
    if col >= MAX_COLS {
        return None;
    }
    char::from_u32(u32::from(b'A') + col as u32)
}

/// Parse a single column letter (case-insensitive, surrounding whitespace
/// ignored) for a board with `cols` columns.
pub fn parse_column(input: &str, cols: usize) -> Option<usize> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }
    let col = (letter as u8 - b'A') as usize;
    (col < cols.min(MAX_COLS)).then_some(col)
}

/// Human-readable range of letters for a board, e.g. `A-G`.
pub fn column_range(cols: usize) -> String {
    let last = column_letter(cols.saturating_sub(1)).unwrap_or('Z');
    format!("A-{last}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), Some('A'));
        assert_eq!(column_letter(6), Some('G'));
        assert_eq!(column_letter(25), Some('Z'));
        assert_eq!(column_letter(26), None);
    }

    #[test]
    fn test_parse_column_accepts_letters() {
        assert_eq!(parse_column("A", 7), Some(0));
        assert_eq!(parse_column("g", 7), Some(6));
        assert_eq!(parse_column("  c \n", 7), Some(2));
    }

    #[test]
    fn test_parse_column_rejects_malformed_input() {
        for input in ["", "   ", "H", "h", "AB", "1", "@", "[", "é", "A B"] {
            assert_eq!(parse_column(input, 7), None, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_column_respects_width() {
        assert_eq!(parse_column("D", 4), Some(3));
        assert_eq!(parse_column("E", 4), None);
        assert_eq!(parse_column("Z", 26), Some(25));
        assert_eq!(parse_column("A", 0), None);
    }

    #[test]
    fn test_column_range() {
        assert_eq!(column_range(7), "A-G");
        assert_eq!(column_range(4), "A-D");
    }
}
