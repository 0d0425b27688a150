use crate::syntax::MarkdownAction;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

pub const DEFAULT_MARKDOWNIFY_URL: &str = "/martor/markdownify/";
pub const DEFAULT_UPLOAD_URL: &str = "/martor/uploader/";
pub const DEFAULT_SEARCH_USERS_URL: &str = "/martor/search-user/";
pub const DEFAULT_BASE_EMOJI_URL: &str = "https://github.githubassets.com/images/icons/emoji/";
pub const DEFAULT_SAVE_TIMEOUT_MS: i32 = 500;

pub const DEFAULT_TOOLBAR_BUTTONS: &[&str] = &[
    "bold",
    "italic",
    "horizontal",
    "heading",
    "pre-code",
    "blockquote",
    "unordered-list",
    "ordered-list",
    "link",
    "image-link",
    "image-upload",
    "emoji",
    "direct-mention",
    "toggle-maximize",
    "help",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid editor config `{raw}`: {source}")]
    Decode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Feature switches of one editor instance.
///
/// Decoded once from the textarea's `data-enable-configs` attribute. The server renders that
/// attribute as a Python dict, so values arrive as `'true'`/`'false'` strings in single quotes;
/// plain JSON booleans are accepted as well.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    #[serde(deserialize_with = "flag")]
    pub mention: bool,
    #[serde(deserialize_with = "flag")]
    pub imgur: bool,
    #[serde(deserialize_with = "flag")]
    pub emoji: bool,
    #[serde(deserialize_with = "flag")]
    pub living: bool,
    #[serde(deserialize_with = "flag")]
    pub spellcheck: bool,
    #[serde(deserialize_with = "flag")]
    pub hljs: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mention: false,
            imgur: true,
            emoji: true,
            living: false,
            spellcheck: false,
            hljs: true,
        }
    }
}

fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(de)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.trim().eq_ignore_ascii_case("true"),
    })
}

impl EditorConfig {
    pub fn from_data_attr(raw: &str) -> Result<Self, ConfigError> {
        let json = raw.replace('\'', "\"");
        serde_json::from_str(&json).map_err(|source| ConfigError::Decode {
            raw: raw.to_string(),
            source,
        })
    }
}

/// Everything one widget instance needs, read from the DOM at start-up.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetSettings {
    pub field_name: String,
    pub config: EditorConfig,
    pub markdownify_url: String,
    pub upload_url: String,
    pub search_users_url: String,
    pub base_emoji_url: String,
    pub save_timeout_ms: i32,
    pub toolbar_buttons: Vec<String>,
}

impl WidgetSettings {
    /// Build settings from `data-*` attribute lookups (`attr("markdownfy-url")` etc.).
    pub fn from_attrs(field_name: &str, attr: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| attr(name).filter(|v| !v.trim().is_empty());

        let config = match non_empty("enable-configs") {
            Some(raw) => EditorConfig::from_data_attr(&raw).unwrap_or_else(|e| {
                log::warn!("{field_name}: {e}; falling back to defaults");
                EditorConfig::default()
            }),
            None => EditorConfig::default(),
        };

        let save_timeout_ms = non_empty("save-timeout")
            .and_then(|v| v.trim().parse::<i32>().ok())
            .filter(|ms| *ms >= 0)
            .unwrap_or(DEFAULT_SAVE_TIMEOUT_MS);

        let toolbar_buttons = non_empty("toolbar-buttons")
            .map(|v| parse_name_list(&v))
            .unwrap_or_else(|| {
                DEFAULT_TOOLBAR_BUTTONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        Self {
            field_name: field_name.to_string(),
            config,
            markdownify_url: non_empty("markdownfy-url")
                .unwrap_or_else(|| DEFAULT_MARKDOWNIFY_URL.to_string()),
            upload_url: non_empty("upload-url").unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string()),
            search_users_url: non_empty("search-users-url")
                .unwrap_or_else(|| DEFAULT_SEARCH_USERS_URL.to_string()),
            base_emoji_url: non_empty("base-emoji-url")
                .unwrap_or_else(|| DEFAULT_BASE_EMOJI_URL.to_string()),
            save_timeout_ms,
            toolbar_buttons,
        }
    }

    pub fn from_element(field_name: &str, textarea: &web_sys::Element) -> Self {
        Self::from_attrs(field_name, |name| {
            textarea.get_attribute(&format!("data-{name}"))
        })
    }

    pub fn toolbar(&self) -> Vec<ToolbarItem> {
        toolbar_items(&self.toolbar_buttons, &self.config)
    }
}

/// Accepts a JSON list (`["bold", "italic"]`, single quotes allowed) or a comma separated list.
fn parse_name_list(raw: &str) -> Vec<String> {
    let json = raw.replace('\'', "\"");
    if let Ok(list) = serde_json::from_str::<Vec<String>>(&json) {
        return list;
    }
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarItem {
    Action(MarkdownAction),
    /// Dropdown holding H1..H3.
    Heading,
    ImageUpload,
    Emoji,
    ToggleMaximize,
    Help,
}

/// Resolve configured toolbar names, dropping unknown names and buttons whose feature is off.
pub fn toolbar_items(names: &[String], config: &EditorConfig) -> Vec<ToolbarItem> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let item = match name.trim() {
            "heading" => ToolbarItem::Heading,
            "image-upload" => ToolbarItem::ImageUpload,
            "emoji" => ToolbarItem::Emoji,
            "toggle-maximize" => ToolbarItem::ToggleMaximize,
            "help" => ToolbarItem::Help,
            other => match MarkdownAction::from_str(other) {
                Ok(action) => ToolbarItem::Action(action),
                Err(_) => {
                    log::debug!("ignoring unknown toolbar button `{other}`");
                    continue;
                }
            },
        };

        let enabled = match item {
            ToolbarItem::Action(MarkdownAction::DirectMention) => config.mention,
            ToolbarItem::ImageUpload => config.imgur,
            ToolbarItem::Emoji => config.emoji,
            _ => true,
        };

        if enabled && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_decodes_python_dict_strings() {
        let raw = "{'emoji': 'true', 'imgur': 'false', 'mention': 'true', 'jquery': 'true', \
                   'living': 'true', 'spellcheck': 'false', 'hljs': 'false'}";
        let cfg = EditorConfig::from_data_attr(raw).expect("config should decode");
        assert_eq!(
            cfg,
            EditorConfig {
                mention: true,
                imgur: false,
                emoji: true,
                living: true,
                spellcheck: false,
                hljs: false,
            }
        );
    }

    #[test]
    fn test_config_accepts_json_booleans_and_missing_keys() {
        let cfg = EditorConfig::from_data_attr(r#"{"living": true}"#).expect("should decode");
        assert!(cfg.living);
        assert_eq!(cfg.hljs, EditorConfig::default().hljs);
        assert_eq!(cfg.imgur, EditorConfig::default().imgur);
    }

    #[test]
    fn test_config_rejects_garbage() {
        let err = EditorConfig::from_data_attr("not a dict").unwrap_err();
        assert!(err.to_string().contains("not a dict"));
    }

    #[test]
    fn test_settings_defaults_when_attributes_missing() {
        let s = WidgetSettings::from_attrs("content", |_| None);
        assert_eq!(s.field_name, "content");
        assert_eq!(s.markdownify_url, DEFAULT_MARKDOWNIFY_URL);
        assert_eq!(s.upload_url, DEFAULT_UPLOAD_URL);
        assert_eq!(s.save_timeout_ms, DEFAULT_SAVE_TIMEOUT_MS);
        assert_eq!(s.config, EditorConfig::default());
        assert_eq!(s.toolbar_buttons.len(), DEFAULT_TOOLBAR_BUTTONS.len());
    }

    #[test]
    fn test_settings_read_data_attributes() {
        let attrs: HashMap<&str, &str> = HashMap::from([
            ("markdownfy-url", "/md/"),
            ("save-timeout", "400"),
            ("enable-configs", "{'living': 'true'}"),
            ("toolbar-buttons", "bold, italic"),
        ]);
        let s = WidgetSettings::from_attrs("body", |k| attrs.get(k).map(|v| v.to_string()));
        assert_eq!(s.markdownify_url, "/md/");
        assert_eq!(s.save_timeout_ms, 400);
        assert!(s.config.living);
        assert_eq!(s.toolbar_buttons, vec!["bold", "italic"]);
    }

    #[test]
    fn test_settings_ignore_invalid_timeout_and_config() {
        let s = WidgetSettings::from_attrs("body", |k| match k {
            "save-timeout" => Some("soon".to_string()),
            "enable-configs" => Some("{".to_string()),
            _ => None,
        });
        assert_eq!(s.save_timeout_ms, DEFAULT_SAVE_TIMEOUT_MS);
        assert_eq!(s.config, EditorConfig::default());
    }

    #[test]
    fn test_toolbar_items_follow_feature_switches() {
        let names: Vec<String> = DEFAULT_TOOLBAR_BUTTONS.iter().map(|s| s.to_string()).collect();
        let cfg = EditorConfig {
            mention: false,
            imgur: false,
            emoji: true,
            ..EditorConfig::default()
        };
        let items = toolbar_items(&names, &cfg);
        assert!(items.contains(&ToolbarItem::Action(MarkdownAction::Bold)));
        assert!(items.contains(&ToolbarItem::Heading));
        assert!(items.contains(&ToolbarItem::Emoji));
        assert!(!items.contains(&ToolbarItem::ImageUpload));
        assert!(!items.contains(&ToolbarItem::Action(MarkdownAction::DirectMention)));
    }

    #[test]
    fn test_toolbar_items_skip_unknown_and_duplicates() {
        let names = vec!["bold".to_string(), "sparkles".to_string(), "bold".to_string()];
        let items = toolbar_items(&names, &EditorConfig::default());
        assert_eq!(items, vec![ToolbarItem::Action(MarkdownAction::Bold)]);
    }

    #[test]
    fn test_name_list_accepts_python_list() {
        assert_eq!(parse_name_list("['bold', 'link']"), vec!["bold", "link"]);
    }
}
