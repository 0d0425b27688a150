use super::{ace_require, js_object, AceEditor, Editor};
use crate::api::MarkdownClient;
use crate::completion::{
    complete, emoji_completions, mention_completions, token_before_cursor, Completion,
    CompletionTrigger,
};
use crate::config::EditorConfig;
use crate::document::TextBuffer;
use crate::syntax::apply_edit;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn completions_to_js(items: &[Completion], completer: &JsValue) -> js_sys::Array {
    items
        .iter()
        .map(|c| {
            js_object(&[
                ("caption", JsValue::from_str(&c.caption)),
                ("value", JsValue::from_str(&c.value)),
                ("meta", JsValue::from_str(c.meta)),
                ("completer", completer.clone()),
            ])
        })
        .collect()
}

fn respond(callback: &js_sys::Function, items: &[Completion], completer: &JsValue) {
    let list = completions_to_js(items, completer);
    if let Err(e) = callback.call2(&JsValue::NULL, &JsValue::NULL, &list) {
        log::warn!("completion callback failed: {e:?}");
    }
}

/// `insertMatch` hook: replaces the whole typed token (`:smi`, `@[jo`) instead of the word
/// prefix Ace would replace on its own.
fn insert_match_handler() -> JsValue {
    let cb = Closure::wrap(Box::new(move |ed: JsValue, data: JsValue| {
        let value = js_sys::Reflect::get(&data, &"value".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        if value.is_empty() {
            return;
        }

        let mut buf = AceEditor::from(ed.unchecked_into::<Editor>());
        let cursor = buf.cursor_position();
        let token = token_before_cursor(&buf.line(cursor.row), cursor);
        apply_edit(&mut buf, &complete(&token, &value));
    }) as Box<dyn FnMut(JsValue, JsValue)>);

    js_object(&[("insertMatch", cb.into_js_value())])
}

/// Install the emoji and mention completers on `editor`.
///
/// Needs Ace's `ext/language_tools` on the page; without it the editor works without popups.
pub fn register_completers(editor: &AceEditor, config: EditorConfig, client: MarkdownClient) {
    if !config.emoji && !config.mention {
        return;
    }
    if ace_require("ace/ext/language_tools")
        .map(|m| m.is_undefined())
        .unwrap_or(true)
    {
        log::debug!("ace language_tools not loaded; autocompletion disabled");
        return;
    }

    let insert_match = insert_match_handler();
    let get_completions = Closure::wrap(Box::new(
        move |ed: JsValue,
              _session: JsValue,
              _pos: JsValue,
              _prefix: JsValue,
              callback: js_sys::Function| {
            let buf = AceEditor::from(ed.unchecked_into::<Editor>());
            let cursor = buf.cursor_position();
            let token = token_before_cursor(&buf.line(cursor.row), cursor);

            match CompletionTrigger::detect(&token.text, &config) {
                Some(CompletionTrigger::Emoji { query }) => {
                    respond(&callback, &emoji_completions(&query), &insert_match);
                }
                Some(CompletionTrigger::Mention { query }) => {
                    let client = client.clone();
                    let insert_match = insert_match.clone();
                    spawn_local(async move {
                        match client.search_users(&query).await {
                            Ok(users) => {
                                respond(&callback, &mention_completions(&users), &insert_match)
                            }
                            Err(e) => log::warn!("user search failed: {e}"),
                        }
                    });
                }
                None => respond(&callback, &[], &insert_match),
            }
        },
    )
        as Box<dyn FnMut(JsValue, JsValue, JsValue, JsValue, js_sys::Function)>);

    let completer = js_object(&[("getCompletions", get_completions.into_js_value())]);
    let raw = editor.raw();
    raw.set_completers(&js_sys::Array::of1(&completer));
    raw.set_options(&js_object(&[
        ("enableBasicAutocompletion", true.into()),
        ("enableLiveAutocompletion", true.into()),
        ("enableSnippets", false.into()),
    ]));
}
