//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor on a `size` x `size` board based on arrow keys.
///
/// The cursor stops at the edges; other keys leave it where it is.
pub fn move_cursor(cursor: usize, size: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / size, cursor % size);

    let (row, col) = match key {
        KeyCode::Right if col + 1 < size => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row + 1 < size => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        _ => (row, col),
    };
    row * size + col
}

/// Keeps the cursor on the same row and column after a resize, clamped to
/// the new board.
pub fn clamp_cursor(cursor: usize, old_size: usize, new_size: usize) -> usize {
    let row = (cursor / old_size).min(new_size - 1);
    let col = (cursor % old_size).min(new_size - 1);
    row * new_size + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(0, 4, KeyCode::Right), 1);
        assert_eq!(move_cursor(1, 4, KeyCode::Down), 5);
        assert_eq!(move_cursor(5, 4, KeyCode::Left), 4);
        assert_eq!(move_cursor(5, 4, KeyCode::Up), 1);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(3, 4, KeyCode::Right), 3);
        assert_eq!(move_cursor(4, 4, KeyCode::Left), 4);
        assert_eq!(move_cursor(2, 4, KeyCode::Up), 2);
        assert_eq!(move_cursor(63, 8, KeyCode::Down), 63);
    }

    #[test]
    fn test_clamp_after_shrink_and_grow() {
        // Row 2, col 3 of a 4x4 board.
        assert_eq!(clamp_cursor(11, 4, 3), 8);
        assert_eq!(clamp_cursor(11, 4, 5), 13);
    }
}
