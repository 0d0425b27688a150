use super::{PreviewUpdate, RenderPipeline, RenderRequest, TriggerMode, EMPTY_PREVIEW_HTML};
use crate::api::MarkdownClient;
use crate::config::WidgetSettings;
use crate::timer::{BrowserScheduler, Debounce};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::{Arc, Mutex};
use wasm_bindgen::{JsCast, JsValue};

/// Browser driver of a [`RenderPipeline`].
///
/// Owns the debounce timer and the markdownify calls; publishes the rendered HTML through
/// `html`, whether a render is outstanding through `stale`, and a count of applied renders
/// through `renders`.
#[derive(Clone)]
pub struct PreviewController {
    pipeline: Arc<Mutex<RenderPipeline>>,
    debounce: Debounce<BrowserScheduler>,
    client: MarkdownClient,
    html: RwSignal<String>,
    stale: RwSignal<bool>,
    renders: RwSignal<u64>,
    highlight: bool,
}

impl PreviewController {
    pub fn new(settings: &WidgetSettings, client: MarkdownClient) -> Self {
        let mode = if settings.config.living {
            TriggerMode::Living
        } else {
            TriggerMode::Manual
        };

        Self {
            pipeline: Arc::new(Mutex::new(RenderPipeline::new(mode))),
            debounce: Debounce::new(BrowserScheduler, settings.save_timeout_ms),
            client,
            html: RwSignal::new(String::new()),
            stale: RwSignal::new(false),
            renders: RwSignal::new(0),
            highlight: settings.config.hljs,
        }
    }

    pub fn html(&self) -> RwSignal<String> {
        self.html
    }

    pub fn stale(&self) -> RwSignal<bool> {
        self.stale
    }

    /// Bumped after each render lands in `html`; `0` until the first one.
    pub fn renders(&self) -> RwSignal<u64> {
        self.renders
    }

    pub fn highlight_enabled(&self) -> bool {
        self.highlight
    }

    pub fn on_edit(&self, content: &str) {
        let generation = match self.pipeline.lock() {
            Ok(mut p) => p.on_edit(content),
            Err(_) => None,
        };

        if let Some(generation) = generation {
            let s2 = self.clone();
            self.debounce.schedule(move || s2.on_timer(generation));
        }
    }

    fn on_timer(&self, generation: u64) {
        let req = match self.pipeline.lock() {
            Ok(mut p) => p.on_timer(generation),
            Err(_) => None,
        };
        if let Some(req) = req {
            self.send(req);
        }
    }

    pub fn activate(&self, content: &str) {
        let req = match self.pipeline.lock() {
            Ok(mut p) => p.on_preview_activated(content),
            Err(_) => None,
        };
        if let Some(req) = req {
            self.send(req);
        }
    }

    pub fn init(&self, content: &str) {
        let req = match self.pipeline.lock() {
            Ok(mut p) => p.on_init(content),
            Err(_) => None,
        };
        if let Some(req) = req {
            self.send(req);
        }
    }

    fn send(&self, req: RenderRequest) {
        self.stale.set(true);
        log::debug!("preview request {} ({} bytes)", req.id, req.content.len());

        let s2 = self.clone();
        spawn_local(async move {
            let result = s2.client.markdownify(&req.content).await;

            let (outcome, stale) = match s2.pipeline.lock() {
                Ok(mut p) => {
                    let outcome = p.on_response(req.id, result);
                    (outcome, p.is_stale())
                }
                Err(_) => return,
            };

            s2.apply(outcome.update);
            s2.stale.set(stale);
            if let Some(next) = outcome.next {
                s2.send(next);
            }
        });
    }

    fn apply(&self, update: PreviewUpdate) {
        match update {
            PreviewUpdate::Html(html) => self.html.set(html),
            PreviewUpdate::Empty => self.html.set(EMPTY_PREVIEW_HTML.to_string()),
            PreviewUpdate::Unchanged => return,
        }
        self.renders.update(|n| *n += 1);
    }
}

/// Run highlight.js over every `pre code` block under `root`, if the page loaded it.
pub fn highlight_code_blocks(root: &web_sys::Element) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let Ok(hljs) = js_sys::Reflect::get(&win, &"hljs".into()) else {
        return;
    };
    if hljs.is_undefined() || hljs.is_null() {
        return;
    }

    // highlight.js >= 11 renamed highlightBlock to highlightElement.
    let func = ["highlightElement", "highlightBlock"]
        .iter()
        .filter_map(|name| js_sys::Reflect::get(&hljs, &JsValue::from_str(name)).ok())
        .find_map(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(func) = func else {
        log::debug!("hljs is present but exposes no highlight function");
        return;
    };

    let Ok(blocks) = root.query_selector_all("pre code") else {
        return;
    };
    for i in 0..blocks.length() {
        if let Some(block) = blocks.item(i) {
            if let Err(e) = func.call1(&hljs, &block) {
                log::warn!("hljs failed on block {i}: {e:?}");
            }
        }
    }
}

/// Document event fired after a render is shown, for page scripts that post-process the
/// preview (MathJax, mermaid).
pub const PREVIEW_EVENT: &str = "martor:preview";

/// Dispatch [`PREVIEW_EVENT`] on `document` with the preview element as `detail`.
pub fn notify_rendered(preview: &web_sys::Element) -> bool {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let init = web_sys::CustomEventInit::new();
    init.set_detail(preview);
    match web_sys::CustomEvent::new_with_event_init_dict(PREVIEW_EVENT, &init) {
        Ok(event) => doc.dispatch_event(&event).unwrap_or(false),
        Err(e) => {
            log::warn!("could not create {PREVIEW_EVENT}: {e:?}");
            false
        }
    }
}
