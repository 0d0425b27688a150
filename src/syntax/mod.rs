//! Markdown syntax insertion.
//!
//! Every toolbar button and shortcut goes through [`wrap`]: it takes the current selection and
//! a token pair and produces one [`Edit`] (range to replace, replacement text, selection to
//! restore). Offsets are computed with [`Position::advance`], never by adding fixed column counts,
//! so multi-line selections and newline padding land where the user expects.

mod actions;

pub use actions::{ActionSpec, KeyBinding, MarkdownAction, TokenPair, ACTIONS};

use crate::document::{Position, Selection, TextBuffer};

/// Result of a syntax transformation: replace `range` with `text`, then restore `selection`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub range: Selection,
    pub text: String,
    pub selection: Selection,
}

/// Apply a token pair around `selection`.
///
/// - Empty selection: inserts `padding + prefix + placeholder + suffix` and puts the caret right
///   after the prefix.
/// - Non-empty selection: replaces it with `padding + prefix + selected + suffix` and selects
///   exactly `selected` again.
pub fn wrap(
    selection: Selection,
    selected: &str,
    pair: TokenPair,
    padding: &str,
    placeholder: &str,
) -> Edit {
    let inner_start = selection.start.advance(padding).advance(pair.prefix);

    if selection.is_empty() {
        return Edit {
            range: selection,
            text: format!("{padding}{}{placeholder}{}", pair.prefix, pair.suffix),
            selection: Selection::caret(inner_start),
        };
    }

    Edit {
        range: selection,
        text: format!("{padding}{}{selected}{}", pair.prefix, pair.suffix),
        selection: Selection::new(inner_start, inner_start.advance(selected)),
    }
}

/// Insert a fully formed literal at `cursor`, leaving the caret right after it.
pub fn insert_literal(cursor: Position, literal: &str) -> Edit {
    Edit {
        range: Selection::caret(cursor),
        text: literal.to_string(),
        selection: Selection::caret(cursor.advance(literal)),
    }
}

pub fn image_literal(name: &str, link: &str) -> String {
    format!("![{name}]({link})")
}

pub fn mention_literal(username: &str) -> String {
    format!("@[{username}]")
}

/// Emoji picked from the picker are padded so they never glue onto neighbouring words.
pub fn emoji_literal(code: &str) -> String {
    format!(" {code} ")
}

pub fn apply_edit<B: TextBuffer + ?Sized>(buffer: &mut B, edit: &Edit) {
    buffer.replace(edit.range, &edit.text);
    if edit.selection.is_empty() {
        buffer.move_to(edit.selection.start);
    } else {
        buffer.set_selection_range(edit.selection);
    }
}

/// Run a toolbar/shortcut action against the buffer's current selection.
pub fn run_action<B: TextBuffer + ?Sized>(buffer: &mut B, action: MarkdownAction) -> Edit {
    let selection = buffer.selection_range();
    let selected = if selection.is_empty() {
        String::new()
    } else {
        buffer.text_range(selection)
    };

    let edit = action.spec().edit(selection, &selected);
    apply_edit(buffer, &edit);
    edit
}

/// Insert `literal` at the buffer's cursor, ignoring any selection.
pub fn insert_at_cursor<B: TextBuffer + ?Sized>(buffer: &mut B, literal: &str) -> Edit {
    let edit = insert_literal(buffer.cursor_position(), literal);
    apply_edit(buffer, &edit);
    edit
}
