//! Emoji and `@[user]` autocompletion.

mod emoji;

pub use emoji::EMOJIS;

use crate::config::EditorConfig;
use crate::document::{byte_idx_to_utf16, utf16_to_byte_idx, Position, Selection};
use crate::syntax::{mention_literal, Edit};
use serde::Serialize;

/// Last whitespace-delimited token before the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAtCursor {
    pub row: u32,
    /// UTF-16 column where the token starts.
    pub start: u32,
    /// UTF-16 column of the cursor (token end).
    pub end: u32,
    pub text: String,
}

impl TokenAtCursor {
    pub fn range(&self) -> Selection {
        Selection::new(
            Position::new(self.row, self.start),
            Position::new(self.row, self.end),
        )
    }
}

pub fn token_before_cursor(line: &str, cursor: Position) -> TokenAtCursor {
    let head = &line[..utf16_to_byte_idx(line, cursor.column)];
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    TokenAtCursor {
        row: cursor.row,
        start: byte_idx_to_utf16(head, start),
        end: byte_idx_to_utf16(head, head.len()),
        text: head[start..].to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionTrigger {
    Emoji { query: String },
    Mention { query: String },
}

impl CompletionTrigger {
    pub fn detect(token: &str, config: &EditorConfig) -> Option<Self> {
        if config.mention && token.starts_with("@[") {
            return Some(Self::Mention {
                query: mention_query(token),
            });
        }
        if config.emoji {
            if let Some(rest) = token.strip_prefix(':') {
                return Some(Self::Emoji {
                    query: rest.trim_end_matches(':').to_ascii_lowercase(),
                });
            }
        }
        None
    }
}

/// Username typed after `@[`, with the mention punctuation stripped.
pub fn mention_query(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, '@' | '[' | ']' | '/'))
        .collect()
}

/// One completion popup entry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub caption: String,
    pub value: String,
    pub meta: &'static str,
}

pub fn emoji_completions(query: &str) -> Vec<Completion> {
    EMOJIS
        .iter()
        .filter(|code| code.trim_matches(':').contains(query))
        .map(|code| Completion {
            caption: code.trim_matches(':').to_string(),
            value: format!("{code} "),
            meta: "emoji",
        })
        .collect()
}

pub fn mention_completions(usernames: &[String]) -> Vec<Completion> {
    usernames
        .iter()
        .map(|u| Completion {
            caption: u.clone(),
            value: mention_literal(u),
            meta: "username",
        })
        .collect()
}

/// Replace the typed token with the accepted completion value.
pub fn complete(token: &TokenAtCursor, value: &str) -> Edit {
    let range = token.range();
    Edit {
        range,
        text: value.to_string(),
        selection: Selection::caret(range.start.advance(value)),
    }
}

pub fn emoji_image_url(base: &str, code: &str) -> String {
    format!("{base}{}.png", code.replace(':', ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LineBuffer, TextBuffer};
    use crate::syntax::apply_edit;

    fn cfg(mention: bool, emoji: bool) -> EditorConfig {
        EditorConfig {
            mention,
            emoji,
            ..EditorConfig::default()
        }
    }

    #[test]
    fn test_token_before_cursor_takes_last_word() {
        let tok = token_before_cursor("hello :smi", Position::new(3, 10));
        assert_eq!(tok.text, ":smi");
        assert_eq!(tok.start, 6);
        assert_eq!(tok.end, 10);
        assert_eq!(tok.row, 3);
    }

    #[test]
    fn test_token_before_cursor_ignores_text_after_cursor() {
        let tok = token_before_cursor("ab @[jo more", Position::new(0, 7));
        assert_eq!(tok.text, "@[jo");
    }

    #[test]
    fn test_token_columns_are_utf16() {
        let tok = token_before_cursor("😀 :ca", Position::new(0, 6));
        assert_eq!(tok.start, 3);
        assert_eq!(tok.text, ":ca");
    }

    #[test]
    fn test_detect_respects_feature_switches() {
        assert_eq!(
            CompletionTrigger::detect(":smi", &cfg(false, true)),
            Some(CompletionTrigger::Emoji {
                query: "smi".to_string()
            })
        );
        assert_eq!(CompletionTrigger::detect(":smi", &cfg(true, false)), None);
        assert_eq!(
            CompletionTrigger::detect("@[jo", &cfg(true, true)),
            Some(CompletionTrigger::Mention {
                query: "jo".to_string()
            })
        );
        assert_eq!(CompletionTrigger::detect("@[jo", &cfg(false, true)), None);
        assert_eq!(CompletionTrigger::detect("plain", &cfg(true, true)), None);
    }

    #[test]
    fn test_mention_query_strips_punctuation() {
        assert_eq!(mention_query("@[john]"), "john");
        assert_eq!(mention_query("@[a/b"), "ab");
        assert_eq!(mention_query("@["), "");
    }

    #[test]
    fn test_emoji_completions_filter_by_fragment() {
        let items = emoji_completions("smile");
        assert!(items.iter().any(|c| c.value == ":smile: "));
        assert!(items.iter().all(|c| c.caption.contains("smile")));
        assert!(items.iter().all(|c| c.meta == "emoji"));
    }

    #[test]
    fn test_emoji_list_is_well_formed() {
        for code in EMOJIS {
            assert!(code.starts_with(':') && code.ends_with(':') && code.len() > 2, "{code}");
        }
    }

    #[test]
    fn test_mention_completions_insert_literal() {
        let items = mention_completions(&["ann".to_string()]);
        assert_eq!(items[0].value, "@[ann]");
        assert_eq!(items[0].meta, "username");
    }

    #[test]
    fn test_complete_replaces_typed_token() {
        let mut buf = LineBuffer::new("hi :smi").with_cursor(Position::new(0, 7));
        let tok = token_before_cursor(&buf.line(0), buf.cursor_position());
        let edit = complete(&tok, ":smile: ");
        apply_edit(&mut buf, &edit);
        assert_eq!(buf.value(), "hi :smile: ");
        assert_eq!(buf.cursor_position(), Position::new(0, 11));
    }

    #[test]
    fn test_emoji_image_url() {
        assert_eq!(
            emoji_image_url("https://e.example/emoji/", ":smile:"),
            "https://e.example/emoji/smile.png"
        );
    }
}
