//! Cursor position tracking for the single-line Prompt.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll.
//! Navigation methods take `buffer: &str` explicitly; the text itself is
//! owned by `Prompt`.

use unicode_width::UnicodeWidthStr;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns hidden off the left edge
    pub scroll: u16,
}

impl CursorState {
    /// Cursor parked after the last character.
    pub fn at_end(buffer: &str) -> Self {
        Self {
            pos: buffer.len(),
            scroll: 0,
        }
    }

    pub fn left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    /// Display column of the cursor from the start of the buffer.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[..self.pos].width() as u16
    }

    /// Adjust `scroll` so the cursor column fits in `visible` columns.
    pub fn update_scroll(&mut self, buffer: &str, visible: u16) {
        if visible == 0 {
            self.scroll = 0;
            return;
        }
        let column = self.column(buffer);
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + visible {
            self.scroll = column + 1 - visible;
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        let text = "aé€";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(next_char_boundary(text, 3), 6);
        assert_eq!(prev_char_boundary(text, 6), 3);
        assert_eq!(prev_char_boundary(text, 1), 0);
    }

    #[test]
    fn test_left_right_stop_at_edges() {
        let buffer = "ab";
        let mut cursor = CursorState::at_end(buffer);
        assert!(!cursor.right(buffer));
        assert!(cursor.left(buffer));
        assert!(cursor.left(buffer));
        assert!(!cursor.left(buffer));
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let buffer = "0123456789";
        let mut cursor = CursorState::at_end(buffer);
        cursor.update_scroll(buffer, 4);
        assert_eq!(cursor.scroll, 7);
        cursor.pos = 2;
        cursor.update_scroll(buffer, 4);
        assert_eq!(cursor.scroll, 2);
    }

    #[test]
    fn test_wide_chars_count_two_columns() {
        let buffer = "日本";
        let cursor = CursorState::at_end(buffer);
        assert_eq!(cursor.column(buffer), 4);
    }
}
