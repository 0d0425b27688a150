//! wasm-bindgen bindings to the Ace editor.
//!
//! Only the handful of Ace calls the widget needs are bound. [`AceEditor`] adapts them to
//! [`TextBuffer`] so the syntax and completion code never touch JS values.

mod completer;

pub use completer::register_completers;

use crate::config::EditorConfig;
use crate::document::{Position, Selection, TextBuffer};
use crate::syntax::{run_action, MarkdownAction, ACTIONS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ace, js_name = edit, catch)]
    fn ace_edit(el: &web_sys::HtmlElement) -> Result<Editor, JsValue>;

    #[wasm_bindgen(js_namespace = ace, js_name = require, catch)]
    fn ace_require(module: &str) -> Result<JsValue, JsValue>;

    #[derive(Clone, Debug)]
    pub type Editor;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &Editor) -> String;
    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &Editor, value: &str, cursor_pos: i32) -> String;
    #[wasm_bindgen(method, js_name = getSession)]
    fn session(this: &Editor) -> EditSession;
    #[wasm_bindgen(method, getter)]
    fn selection(this: &Editor) -> AceSelection;
    #[wasm_bindgen(method, getter)]
    fn commands(this: &Editor) -> CommandManager;
    #[wasm_bindgen(method, js_name = getSelectionRange)]
    fn get_selection_range(this: &Editor) -> JsValue;
    #[wasm_bindgen(method, js_name = getCursorPosition)]
    fn get_cursor_position(this: &Editor) -> JsValue;
    #[wasm_bindgen(method, js_name = moveCursorTo)]
    fn move_cursor_to(this: &Editor, row: u32, column: u32);
    #[wasm_bindgen(method, js_name = clearSelection)]
    fn clear_selection(this: &Editor);
    #[wasm_bindgen(method)]
    fn focus(this: &Editor);
    #[wasm_bindgen(method)]
    fn resize(this: &Editor, force: bool);
    #[wasm_bindgen(method, js_name = setTheme)]
    fn set_theme(this: &Editor, theme: &str);
    #[wasm_bindgen(method, js_name = setOptions)]
    fn set_options(this: &Editor, options: &JsValue);
    #[wasm_bindgen(method)]
    fn on(this: &Editor, event: &str, callback: &js_sys::Function);
    #[wasm_bindgen(method, setter)]
    fn set_completers(this: &Editor, completers: &js_sys::Array);

    #[derive(Clone, Debug)]
    type EditSession;

    #[wasm_bindgen(method, js_name = setMode)]
    fn set_mode(this: &EditSession, mode: &str);
    #[wasm_bindgen(method, js_name = setUseWrapMode)]
    fn set_use_wrap_mode(this: &EditSession, wrap: bool);
    #[wasm_bindgen(method, js_name = getTextRange)]
    fn get_text_range(this: &EditSession, range: &JsValue) -> String;
    #[wasm_bindgen(method)]
    fn replace(this: &EditSession, range: &JsValue, text: &str) -> JsValue;
    #[wasm_bindgen(method, js_name = getLine)]
    fn get_line(this: &EditSession, row: u32) -> String;

    type AceSelection;

    #[wasm_bindgen(method, js_name = setSelectionRange)]
    fn set_selection_range(this: &AceSelection, range: &JsValue);

    type CommandManager;

    #[wasm_bindgen(method, js_name = addCommand)]
    fn add_command(this: &CommandManager, command: &JsValue);
}

pub const THEME: &str = "ace/theme/github";
pub const MODE: &str = "ace/mode/markdown";

/// Build a plain JS object from key/value pairs.
pub(crate) fn js_object(pairs: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (k, v) in pairs {
        let _ = js_sys::Reflect::set(&obj, &JsValue::from_str(k), v);
    }
    obj.into()
}

fn read_u32(obj: &JsValue, key: &str) -> u32 {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|n| n.max(0.0) as u32)
        .unwrap_or(0)
}

fn position_from_js(v: &JsValue) -> Position {
    Position::new(read_u32(v, "row"), read_u32(v, "column"))
}

fn selection_from_js(v: &JsValue) -> Selection {
    let get = |key: &str| js_sys::Reflect::get(v, &JsValue::from_str(key)).unwrap_or_default();
    Selection::new(position_from_js(&get("start")), position_from_js(&get("end")))
}

fn position_to_js(p: Position) -> JsValue {
    js_object(&[("row", p.row.into()), ("column", p.column.into())])
}

/// Ace `Range` instance when `ace/range` is loadable, otherwise a plain `{start, end}` object.
fn range_to_js(sel: Selection) -> JsValue {
    let ctor = ace_require("ace/range")
        .ok()
        .and_then(|m| js_sys::Reflect::get(&m, &"Range".into()).ok())
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(ctor) = ctor {
        let args = js_sys::Array::of4(
            &sel.start.row.into(),
            &sel.start.column.into(),
            &sel.end.row.into(),
            &sel.end.column.into(),
        );
        if let Ok(range) = js_sys::Reflect::construct(&ctor, &args) {
            return range;
        }
    }

    js_object(&[
        ("start", position_to_js(sel.start)),
        ("end", position_to_js(sel.end)),
    ])
}

/// Handle to one mounted Ace instance.
#[derive(Clone, Debug)]
pub struct AceEditor {
    editor: Editor,
}

impl From<Editor> for AceEditor {
    fn from(editor: Editor) -> Self {
        Self { editor }
    }
}

/// Hand the editor to the page's spellcheck integration, `window.enable_spellcheck(id)`.
///
/// Ace draws text in its own layers, so browser spellcheck never sees it. Returns whether the
/// integration was found and ran.
pub fn enable_spellcheck(editor_id: &str) -> bool {
    let func = web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &"enable_spellcheck".into()).ok())
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(func) = func else {
        log::debug!("{editor_id}: spellcheck requested but enable_spellcheck is not installed");
        return false;
    };
    match func.call1(&JsValue::NULL, &JsValue::from_str(editor_id)) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("{editor_id}: enable_spellcheck failed: {e:?}");
            false
        }
    }
}

impl AceEditor {
    /// Mount Ace into `el` with the markdown mode and the widget's editor options.
    pub fn mount(el: &web_sys::HtmlElement, config: &EditorConfig) -> Result<Self, JsValue> {
        let editor = ace_edit(el)?;
        editor.set_theme(THEME);
        let session = editor.session();
        session.set_mode(MODE);
        session.set_use_wrap_mode(true);
        editor.set_options(&js_object(&[
            ("enableMultiselect", false.into()),
            ("autoScrollEditorIntoView", true.into()),
            ("minLines", 15.into()),
            ("maxLines", 40.into()),
        ]));

        if config.spellcheck {
            enable_spellcheck(&el.id());
        }

        Ok(Self { editor })
    }

    pub fn focus(&self) {
        self.editor.focus();
    }

    pub fn resize(&self) {
        self.editor.resize(true);
    }

    /// Call `f` after every document change.
    pub fn on_change(&self, f: impl Fn() + 'static) {
        let cb = Closure::wrap(Box::new(move |_ev: JsValue| f()) as Box<dyn FnMut(JsValue)>);
        self.editor.on("change", cb.as_ref().unchecked_ref());
        // Lives as long as the editor.
        cb.forget();
    }

    /// Register one Ace command (with key binding) per action in the table.
    pub fn register_commands(&self, config: &EditorConfig) {
        let commands = self.editor.commands();
        for spec in ACTIONS {
            if spec.action == MarkdownAction::DirectMention && !config.mention {
                continue;
            }

            let action = spec.action;
            let exec = Closure::wrap(Box::new(move |ed: JsValue| {
                let mut buf = AceEditor::from(ed.unchecked_into::<Editor>());
                run_action(&mut buf, action);
                buf.focus();
            }) as Box<dyn FnMut(JsValue)>);

            let bind_key = js_object(&[
                ("win", JsValue::from_str(spec.keys.win)),
                ("mac", JsValue::from_str(spec.keys.mac)),
            ]);
            commands.add_command(&js_object(&[
                ("name", JsValue::from_str(spec.command)),
                ("bindKey", bind_key),
                ("exec", exec.into_js_value()),
            ]));
        }
        log::debug!("registered {} editor commands", ACTIONS.len());
    }

    pub(crate) fn raw(&self) -> &Editor {
        &self.editor
    }
}

impl TextBuffer for AceEditor {
    fn value(&self) -> String {
        self.editor.get_value()
    }

    fn set_value(&mut self, text: &str) {
        // 1 = cursor at the end of the new text.
        self.editor.set_value(text, 1);
    }

    fn selection_range(&self) -> Selection {
        selection_from_js(&self.editor.get_selection_range())
    }

    fn set_selection_range(&mut self, selection: Selection) {
        self.editor
            .selection()
            .set_selection_range(&range_to_js(selection));
    }

    fn cursor_position(&self) -> Position {
        position_from_js(&self.editor.get_cursor_position())
    }

    fn move_to(&mut self, pos: Position) {
        self.editor.clear_selection();
        self.editor.move_cursor_to(pos.row, pos.column);
    }

    fn text_range(&self, range: Selection) -> String {
        self.editor.session().get_text_range(&range_to_js(range))
    }

    fn replace(&mut self, range: Selection, text: &str) -> Position {
        let end = self.editor.session().replace(&range_to_js(range), text);
        if end.is_object() {
            position_from_js(&end)
        } else {
            range.start.advance(text)
        }
    }

    fn line(&self, row: u32) -> String {
        self.editor.session().get_line(row)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_spellcheck_without_integration_is_skipped() {
        assert!(!enable_spellcheck("martor-body"));
    }

    #[wasm_bindgen_test]
    fn test_spellcheck_calls_page_integration_with_editor_id() {
        let win = web_sys::window().expect("test runs in a browser");
        let hook = js_sys::Function::new_with_args("id", "window.__spellchecked = id;");
        js_sys::Reflect::set(&win, &"enable_spellcheck".into(), &hook).expect("install hook");

        assert!(enable_spellcheck("martor-content"));
        let seen = js_sys::Reflect::get(&win, &"__spellchecked".into()).expect("read marker");
        assert_eq!(seen.as_string().as_deref(), Some("martor-content"));

        js_sys::Reflect::delete_property(&win, &"enable_spellcheck".into()).expect("remove hook");
    }
}
