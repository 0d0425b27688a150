mod toolbar;

use crate::ace::{register_completers, AceEditor};
use crate::api::MarkdownClient;
use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, ButtonVariant};
use crate::config::WidgetSettings;
use crate::document::TextBuffer;
use crate::preview::{highlight_code_blocks, notify_rendered, PreviewController};
use crate::syntax::{image_literal, insert_at_cursor, run_action, MarkdownAction};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use toolbar::{EmojiPicker, HelpPanel, Toolbar};
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Preview,
}

/// Per-instance state shared by the toolbar, the editor and the preview.
#[derive(Clone)]
pub struct EditorContext {
    pub settings: WidgetSettings,
    pub client: MarkdownClient,
    pub preview: PreviewController,
    editor: StoredValue<Option<AceEditor>, LocalStorage>,
    pub uploading: RwSignal<bool>,
    pub upload_error: RwSignal<Option<String>>,
}

impl EditorContext {
    pub fn new(settings: WidgetSettings) -> Self {
        let client = MarkdownClient::for_page(&settings);
        let preview = PreviewController::new(&settings, client.clone());
        Self {
            settings,
            client,
            preview,
            editor: StoredValue::new_local(None),
            uploading: RwSignal::new(false),
            upload_error: RwSignal::new(None),
        }
    }

    pub fn editor(&self) -> Option<AceEditor> {
        self.editor.get_value()
    }

    pub fn content(&self) -> String {
        self.editor().map(|ed| ed.value()).unwrap_or_default()
    }

    pub fn run(&self, action: MarkdownAction) {
        let Some(mut ed) = self.editor() else {
            return;
        };
        run_action(&mut ed, action);
        ed.focus();
    }

    pub fn insert(&self, literal: &str) {
        let Some(mut ed) = self.editor() else {
            return;
        };
        insert_at_cursor(&mut ed, literal);
        ed.focus();
    }

    pub fn upload(&self, file: web_sys::File) {
        if self.uploading.get_untracked() {
            return;
        }
        self.uploading.set(true);
        self.upload_error.set(None);

        let ctx = self.clone();
        spawn_local(async move {
            let result = match read_file(&file).await {
                Ok(bytes) => {
                    ctx.client
                        .upload_image(&file.name(), &file.type_(), bytes)
                        .await
                }
                Err(e) => Err(e),
            };

            match result {
                Ok(img) => ctx.insert(&image_literal(&img.name, &img.link)),
                Err(e) => {
                    log::warn!("image upload failed: {e}");
                    ctx.upload_error.set(Some(e.message));
                }
            }
            ctx.uploading.set(false);
        });
    }

    /// Mount Ace into `el` and bind it to the form textarea. No-op once mounted.
    fn attach(&self, el: &web_sys::HtmlElement) {
        if self.editor.with_value(|ed| ed.is_some()) {
            return;
        }

        let config = self.settings.config;
        let mut ace = match AceEditor::mount(el, &config) {
            Ok(ace) => ace,
            Err(e) => {
                log::error!("{}: failed to start Ace: {e:?}", self.settings.field_name);
                return;
            }
        };

        let textarea = find_textarea(&self.settings.field_name);
        let initial = textarea.as_ref().map(|t| t.value()).unwrap_or_default();
        if let Some(t) = &textarea {
            let _ = t.set_attribute("style", "display:none");
        }

        ace.set_value(&initial);
        ace.register_commands(&config);
        register_completers(&ace, config, self.client.clone());

        let handle = ace.clone();
        let preview = self.preview.clone();
        ace.on_change(move || {
            let value = handle.value();
            if let Some(t) = &textarea {
                t.set_value(&value);
            }
            preview.on_edit(&value);
        });

        self.editor.set_value(Some(ace));
        self.preview.init(&initial);
    }
}

async fn read_file(file: &web_sys::File) -> crate::api::ApiResult<Vec<u8>> {
    let buf = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| crate::api::ApiError {
            kind: crate::api::ApiErrorKind::Parse,
            message: format!("Could not read {}: {e:?}", file.name()),
        })?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// The form field Ace mirrors into: `#id_<field_name>`.
pub fn find_textarea(field_name: &str) -> Option<web_sys::HtmlTextAreaElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(&format!("id_{field_name}"))?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .ok()
}

#[component]
pub fn MarkdownEditor(settings: WidgetSettings) -> impl IntoView {
    let field_name = settings.field_name.clone();
    let editor_id = format!("martor-{field_name}");
    let ctx = EditorContext::new(settings);
    provide_context(ctx.clone());

    let tab: RwSignal<Tab> = RwSignal::new(Tab::Editor);
    let maximized: RwSignal<bool> = RwSignal::new(false);
    let help_open: RwSignal<bool> = RwSignal::new(false);
    let emoji_open: RwSignal<bool> = RwSignal::new(false);

    let editor_ref: NodeRef<html::Div> = NodeRef::new();
    let preview_ref: NodeRef<html::Div> = NodeRef::new();

    let c2 = ctx.clone();
    Effect::new(move |_| {
        if let Some(el) = editor_ref.get() {
            c2.attach(&el);
        }
    });

    let html = ctx.preview.html();
    let stale = ctx.preview.stale();
    let renders = ctx.preview.renders();
    let highlight = ctx.preview.highlight_enabled();
    Effect::new(move |_| {
        if renders.get() == 0 {
            return;
        }
        let Some(el) = preview_ref.get_untracked() else {
            return;
        };
        if highlight {
            highlight_code_blocks(&el);
        }
        notify_rendered(&el);
    });

    let c3 = ctx.clone();
    let show_editor = move |_| {
        tab.set(Tab::Editor);
        if let Some(ed) = c3.editor() {
            ed.resize();
            ed.focus();
        }
    };

    let c4 = ctx.clone();
    let show_preview = move |_| {
        tab.set(Tab::Preview);
        help_open.set(false);
        emoji_open.set(false);
        c4.preview.activate(&c4.content());
    };

    let c5 = ctx.clone();
    Effect::new(move |prev: Option<bool>| {
        let now = maximized.get();
        if prev.is_some_and(|p| p != now) {
            if let Some(ed) = c5.editor() {
                ed.resize();
            }
        }
        now
    });

    // Escape leaves full screen.
    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && maximized.get_untracked() {
            maximized.set(false);
        }
    });
    on_cleanup(move || key_handle.remove());

    let upload_error = ctx.upload_error;

    view! {
        <div
            class=move || {
                if maximized.get() {
                    "martor-widget fixed inset-0 z-50 flex flex-col bg-background p-2"
                } else {
                    "martor-widget flex flex-col rounded-md border"
                }
            }
            data-field-name=field_name
        >
            <div class="flex flex-wrap items-center gap-1 border-b px-1">
                <Button
                    variant=ButtonVariant::Tab
                    size=ButtonSize::Sm
                    attr:r#type="button"
                    attr:aria-selected=move || (tab.get() == Tab::Editor).to_string()
                    on:click=show_editor
                >
                    "Editor"
                </Button>
                <Button
                    variant=ButtonVariant::Tab
                    size=ButtonSize::Sm
                    attr:r#type="button"
                    attr:aria-selected=move || (tab.get() == Tab::Preview).to_string()
                    on:click=show_preview
                >
                    "Preview"
                </Button>
                <Show when=move || tab.get() == Tab::Editor fallback=|| ().into_view()>
                    <Toolbar maximized=maximized help_open=help_open emoji_open=emoji_open />
                </Show>
            </div>

            <Show when=move || upload_error.get().is_some() fallback=|| ().into_view()>
                {move || {
                    upload_error
                        .get()
                        .map(|e| {
                            view! {
                                <Alert class="m-2 w-auto">
                                    <AlertDescription>{e}</AlertDescription>
                                </Alert>
                            }
                        })
                }}
            </Show>

            <div class=move || if tab.get() == Tab::Editor { "flex-1" } else { "hidden" }>
                <div
                    node_ref=editor_ref
                    id=editor_id
                    class="martor-field min-h-[300px] w-full"
                ></div>
            </div>

            <div class=move || match (tab.get(), stale.get()) {
                (Tab::Editor, _) => "hidden",
                (Tab::Preview, false) => "flex-1 overflow-auto p-3",
                (Tab::Preview, true) => "flex-1 overflow-auto p-3 opacity-60",
            }>
                <div
                    node_ref=preview_ref
                    class="martor-preview prose max-w-none"
                    inner_html=move || html.get()
                ></div>
            </div>

            <Show when=move || help_open.get() fallback=|| ().into_view()>
                <HelpPanel on_close=Callback::new(move |_| help_open.set(false)) />
            </Show>
            <Show when=move || emoji_open.get() fallback=|| ().into_view()>
                <EmojiPicker on_close=Callback::new(move |_| emoji_open.set(false)) />
            </Show>
        </div>
    }
}
