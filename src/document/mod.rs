use serde::{Deserialize, Serialize};

/// A point in a line-addressed document.
///
/// `column` counts UTF-16 code units, which is what Ace (and the DOM selection APIs) report.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Position the caret reaches after typing `text` starting here.
    ///
    /// Newlines move to column 0 of the next row, so multi-line insertions produce exact
    /// row/column deltas instead of flat character offsets.
    pub fn advance(self, text: &str) -> Self {
        let mut pos = self;
        for ch in text.chars() {
            if ch == '\n' {
                pos.row += 1;
                pos.column = 0;
            } else {
                pos.column += ch.len_utf16() as u32;
            }
        }
        pos
    }
}

/// Start/end pair into the document. Empty when it is only a caret.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Build a selection from two points in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub const fn caret(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The narrow contract the widget needs from an editor engine.
///
/// Ace implements it through wasm-bindgen (`crate::ace::AceEditor`); [`LineBuffer`] implements it
/// in memory.
pub trait TextBuffer {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);

    fn selection_range(&self) -> Selection;
    fn set_selection_range(&mut self, selection: Selection);

    fn cursor_position(&self) -> Position;
    fn move_to(&mut self, pos: Position);

    fn text_range(&self, range: Selection) -> String;

    /// Replace `range` with `text`; returns the position right after the inserted text.
    fn replace(&mut self, range: Selection, text: &str) -> Position;

    /// Text of a single row, empty when the row does not exist.
    fn line(&self, row: u32) -> String;
}

pub(crate) fn utf16_len(s: &str) -> u32 {
    s.encode_utf16().count() as u32
}

pub(crate) fn utf16_to_byte_idx(s: &str, pos_utf16: u32) -> usize {
    if pos_utf16 == 0 {
        return 0;
    }
    let mut acc: u32 = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.len_utf16() as u32;
        if acc + w > pos_utf16 {
            return i;
        }
        acc += w;
        if acc == pos_utf16 {
            return i + ch.len_utf8();
        }
    }
    s.len()
}

pub(crate) fn byte_idx_to_utf16(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}

/// In-memory [`TextBuffer`], used for tests and for computing edits without an editor mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    selection: Selection,
    cursor: Position,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl LineBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            lines: split_lines(text),
            selection: Selection::default(),
            cursor: Position::default(),
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.set_selection_range(selection);
        self
    }

    pub fn with_cursor(mut self, pos: Position) -> Self {
        self.move_to(pos);
        self
    }

    fn clamp(&self, pos: Position) -> Position {
        let last_row = self.lines.len().saturating_sub(1) as u32;
        let row = pos.row.min(last_row);
        let width = self
            .lines
            .get(row as usize)
            .map(|l| utf16_len(l))
            .unwrap_or(0);
        Position::new(row, pos.column.min(width))
    }

    fn byte_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        let mut offset = 0;
        for line in self.lines.iter().take(pos.row as usize) {
            offset += line.len() + 1;
        }
        let line = &self.lines[pos.row as usize];
        offset + utf16_to_byte_idx(line, pos.column)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|l| l.to_string()).collect()
}

impl TextBuffer for LineBuffer {
    fn value(&self) -> String {
        self.lines.join("\n")
    }

    fn set_value(&mut self, text: &str) {
        self.lines = split_lines(text);
        let end = Position::default().advance(text);
        self.move_to(end);
    }

    fn selection_range(&self) -> Selection {
        self.selection
    }

    fn set_selection_range(&mut self, selection: Selection) {
        let start = self.clamp(selection.start);
        let end = self.clamp(selection.end);
        self.selection = Selection::new(start, end);
        self.cursor = self.selection.end;
    }

    fn cursor_position(&self) -> Position {
        self.cursor
    }

    fn move_to(&mut self, pos: Position) {
        let pos = self.clamp(pos);
        self.cursor = pos;
        self.selection = Selection::caret(pos);
    }

    fn text_range(&self, range: Selection) -> String {
        let range = Selection::new(range.start, range.end);
        let value = self.value();
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        value[start..end].to_string()
    }

    fn replace(&mut self, range: Selection, text: &str) -> Position {
        let range = Selection::new(range.start, range.end);
        let start_pos = self.clamp(range.start);
        let mut value = self.value();
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        value.replace_range(start..end, text);
        self.lines = split_lines(&value);
        start_pos.advance(text)
    }

    fn line(&self, row: u32) -> String {
        self.lines.get(row as usize).cloned().unwrap_or_default()
    }
}
