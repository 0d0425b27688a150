use crate::document::Selection;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use super::{wrap, Edit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl TokenPair {
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }
}

/// Ace key binding strings (`bindKey: {win, mac}`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub win: &'static str,
    pub mac: &'static str,
}

/// Names match the toolbar button names used in the widget settings.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum MarkdownAction {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Horizontal,
    H1,
    H2,
    H3,
    PreCode,
    Code,
    Blockquote,
    UnorderedList,
    OrderedList,
    Link,
    ImageLink,
    DirectMention,
}

/// One row of the action table.
#[derive(Clone, Copy, Debug)]
pub struct ActionSpec {
    pub action: MarkdownAction,
    /// Ace command name.
    pub command: &'static str,
    pub title: &'static str,
    pub label: &'static str,
    /// Tokens inserted when nothing is selected. Inline actions pad with spaces here.
    pub caret: TokenPair,
    /// Tokens placed around a non-empty selection.
    pub wrap: TokenPair,
    /// Leading blank-line padding of line-oriented constructs.
    pub padding: &'static str,
    pub placeholder: &'static str,
    pub keys: KeyBinding,
}

const BLOCK: &str = "\n\n";

pub const ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        action: MarkdownAction::Bold,
        command: "markdownToBold",
        title: "Bold",
        label: "B",
        caret: TokenPair::new(" **", "** "),
        wrap: TokenPair::new("**", "**"),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-B", mac: "Command-B" },
    },
    ActionSpec {
        action: MarkdownAction::Italic,
        command: "markdownToItalic",
        title: "Italic",
        label: "I",
        caret: TokenPair::new(" _", "_ "),
        wrap: TokenPair::new("_", "_"),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-I", mac: "Command-I" },
    },
    ActionSpec {
        action: MarkdownAction::Underline,
        command: "markdownToUnderscores",
        title: "Underline",
        label: "U",
        caret: TokenPair::new(" ++", "++ "),
        wrap: TokenPair::new("++", "++"),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Shift-U", mac: "Command-Option-U" },
    },
    ActionSpec {
        action: MarkdownAction::Strikethrough,
        command: "markdownToStrikethrough",
        title: "Strikethrough",
        label: "S",
        caret: TokenPair::new(" ~~", "~~ "),
        wrap: TokenPair::new("~~", "~~"),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Shift-S", mac: "Command-Option-S" },
    },
    ActionSpec {
        action: MarkdownAction::Horizontal,
        command: "markdownToHorizontal",
        title: "Horizontal line",
        label: "HR",
        caret: TokenPair::new("----------\n\n", ""),
        wrap: TokenPair::new("----------\n\n", ""),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-H", mac: "Command-H" },
    },
    ActionSpec {
        action: MarkdownAction::H1,
        command: "markdownToH1",
        title: "Heading 1",
        label: "H1",
        caret: TokenPair::new("# ", ""),
        wrap: TokenPair::new("# ", "\n"),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Alt-1", mac: "Command-Option-1" },
    },
    ActionSpec {
        action: MarkdownAction::H2,
        command: "markdownToH2",
        title: "Heading 2",
        label: "H2",
        caret: TokenPair::new("## ", ""),
        wrap: TokenPair::new("## ", "\n"),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Alt-2", mac: "Command-Option-2" },
    },
    ActionSpec {
        action: MarkdownAction::H3,
        command: "markdownToH3",
        title: "Heading 3",
        label: "H3",
        caret: TokenPair::new("### ", ""),
        wrap: TokenPair::new("### ", "\n"),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Alt-3", mac: "Command-Option-3" },
    },
    ActionSpec {
        action: MarkdownAction::PreCode,
        command: "markdownToPre",
        title: "Code block",
        label: "{ }",
        caret: TokenPair::new("```\n", "\n```\n"),
        wrap: TokenPair::new("```\n", "\n```\n"),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Alt-P", mac: "Command-Option-P" },
    },
    ActionSpec {
        action: MarkdownAction::Code,
        command: "markdownToCode",
        title: "Inline code",
        label: "`",
        caret: TokenPair::new(" `", "` "),
        wrap: TokenPair::new("`", "`"),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Alt-C", mac: "Command-Option-C" },
    },
    ActionSpec {
        action: MarkdownAction::Blockquote,
        command: "markdownToBlockQuote",
        title: "Quote",
        label: "❝",
        caret: TokenPair::new("> ", "\n"),
        wrap: TokenPair::new("> ", "\n"),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Q", mac: "Command-Q" },
    },
    ActionSpec {
        action: MarkdownAction::UnorderedList,
        command: "markdownToUnorderedList",
        title: "Unordered list",
        label: "•",
        caret: TokenPair::new("* ", ""),
        wrap: TokenPair::new("* ", ""),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-U", mac: "Command-U" },
    },
    ActionSpec {
        action: MarkdownAction::OrderedList,
        command: "markdownToOrderedList",
        title: "Ordered list",
        label: "1.",
        caret: TokenPair::new("1. ", ""),
        wrap: TokenPair::new("1. ", ""),
        padding: BLOCK,
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Shift-O", mac: "Command-Option-O" },
    },
    ActionSpec {
        action: MarkdownAction::Link,
        command: "markdownToLink",
        title: "URL/Link",
        label: "🔗",
        caret: TokenPair::new(" [", "](https://) "),
        wrap: TokenPair::new("[", "](https://) "),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-L", mac: "Command-L" },
    },
    ActionSpec {
        action: MarkdownAction::ImageLink,
        command: "markdownToImageLink",
        title: "Insert image link",
        label: "🖼",
        caret: TokenPair::new(" ![", "](https://) "),
        wrap: TokenPair::new("![", "](https://) "),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-Shift-I", mac: "Command-Option-I" },
    },
    ActionSpec {
        action: MarkdownAction::DirectMention,
        command: "markdownToMention",
        title: "Direct mention a user",
        label: "@",
        caret: TokenPair::new(" @[", "]"),
        wrap: TokenPair::new("@[", "]"),
        padding: "",
        placeholder: "",
        keys: KeyBinding { win: "Ctrl-M", mac: "Command-M" },
    },
];

impl MarkdownAction {
    pub fn spec(self) -> &'static ActionSpec {
        ACTIONS
            .iter()
            .find(|s| s.action == self)
            .unwrap_or(&ACTIONS[0])
    }

    pub fn is_line_oriented(self) -> bool {
        !self.spec().padding.is_empty()
    }

    pub fn is_heading(self) -> bool {
        matches!(self, Self::H1 | Self::H2 | Self::H3)
    }
}

impl ActionSpec {
    pub fn edit(&self, selection: Selection, selected: &str) -> Edit {
        let pair = if selection.is_empty() {
            self.caret
        } else {
            self.wrap
        };
        wrap(selection, selected, pair, self.padding, self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_every_action_has_exactly_one_table_row() {
        let names = [
            "bold",
            "italic",
            "underline",
            "strikethrough",
            "horizontal",
            "h1",
            "h2",
            "h3",
            "pre-code",
            "code",
            "blockquote",
            "unordered-list",
            "ordered-list",
            "link",
            "image-link",
            "direct-mention",
        ];
        assert_eq!(ACTIONS.len(), names.len());
        for name in names {
            let action = MarkdownAction::from_str(name).expect("known action name");
            assert_eq!(action.as_ref(), name);
            assert_eq!(ACTIONS.iter().filter(|s| s.action == action).count(), 1);
            assert_eq!(action.spec().action, action);
        }
    }

    #[test]
    fn test_key_bindings_are_unique() {
        let mut win: Vec<_> = ACTIONS.iter().map(|s| s.keys.win).collect();
        let mut mac: Vec<_> = ACTIONS.iter().map(|s| s.keys.mac).collect();
        win.sort();
        win.dedup();
        mac.sort();
        mac.dedup();
        assert_eq!(win.len(), ACTIONS.len());
        assert_eq!(mac.len(), ACTIONS.len());
    }

    #[test]
    fn test_line_oriented_actions() {
        assert!(MarkdownAction::H3.is_line_oriented());
        assert!(MarkdownAction::OrderedList.is_line_oriented());
        assert!(MarkdownAction::Horizontal.is_line_oriented());
        assert!(!MarkdownAction::Bold.is_line_oriented());
        assert!(!MarkdownAction::DirectMention.is_line_oriented());
    }
}
