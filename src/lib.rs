pub mod ace;
pub mod api;
pub mod completion;
mod components;
pub mod config;
pub mod document;
pub mod logging;
pub mod preview;
pub mod syntax;
pub mod timer;
pub mod widget;

use crate::config::WidgetSettings;
use crate::widget::{find_textarea, MarkdownEditor};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

/// Container class rendered by the form widget around each markdown textarea.
pub const CONTAINER_SELECTOR: &str = ".main-martor";

/// Containers on the page paired with the field name they edit.
fn find_containers() -> Vec<(web_sys::HtmlElement, String)> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return vec![];
    };
    let Ok(nodes) = doc.query_selector_all(CONTAINER_SELECTOR) else {
        return vec![];
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        .filter_map(|el| {
            let field = el.get_attribute("data-field-name")?;
            let field = field.trim().to_string();
            (!field.is_empty()).then_some((el, field))
        })
        .collect()
}

/// Mount one editor per container. Returns how many were mounted.
pub fn mount_all() -> usize {
    let mut mounted = 0;
    for (container, field_name) in find_containers() {
        let Some(textarea) = find_textarea(&field_name) else {
            log::warn!("{field_name}: no #id_{field_name} textarea, skipping");
            continue;
        };
        if container.get_attribute("data-martor-mounted").is_some() {
            continue;
        }
        let _ = container.set_attribute("data-martor-mounted", "true");

        let settings = WidgetSettings::from_element(&field_name, &textarea);
        log::info!(
            "{field_name}: mounting editor (living={}, toolbar={:?})",
            settings.config.living,
            settings.toolbar_buttons
        );
        leptos::mount::mount_to(container, move || {
            view! { <MarkdownEditor settings=settings /> }
        })
        .forget();
        mounted += 1;
    }
    mounted
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("test runs in a browser")
    }

    fn add_field(field: &str, configs: &str) -> web_sys::Element {
        let doc = document();
        let container = doc.create_element("div").expect("create div");
        container.set_class_name("main-martor");
        container
            .set_attribute("data-field-name", field)
            .expect("set attr");

        let textarea = doc.create_element("textarea").expect("create textarea");
        textarea.set_id(&format!("id_{field}"));
        textarea
            .set_attribute("data-enable-configs", configs)
            .expect("set attr");
        textarea
            .set_attribute("data-save-timeout", "250")
            .expect("set attr");
        container.append_child(&textarea).expect("append");

        doc.body()
            .expect("body")
            .append_child(&container)
            .expect("append");
        container
    }

    #[wasm_bindgen_test]
    fn test_settings_from_textarea_attributes() {
        add_field("wasm_settings", "{'living': 'true', 'mention': 'true'}");
        let textarea = find_textarea("wasm_settings").expect("textarea is in the page");
        let s = WidgetSettings::from_element("wasm_settings", &textarea);
        assert!(s.config.living);
        assert!(s.config.mention);
        assert_eq!(s.save_timeout_ms, 250);
    }

    #[wasm_bindgen_test]
    fn test_containers_are_discovered_by_field_name() {
        add_field("wasm_discover", "{}");
        let found = find_containers();
        assert!(found.iter().any(|(_, f)| f == "wasm_discover"));
    }

    #[wasm_bindgen_test]
    fn test_mounted_widget_buttons_do_not_submit_the_form() {
        let container = add_field("wasm_buttons", "{}");
        assert!(mount_all() >= 1);

        let buttons = container.query_selector_all("button").expect("query buttons");
        assert!(buttons.length() > 0);
        for i in 0..buttons.length() {
            let button: web_sys::Element = buttons
                .item(i)
                .and_then(|n| n.dyn_into().ok())
                .expect("button element");
            assert_eq!(button.get_attribute("type").as_deref(), Some("button"));
        }
    }

    #[wasm_bindgen_test]
    fn test_highlight_without_hljs_is_noop() {
        let doc = document();
        let root = doc.create_element("div").expect("create div");
        root.set_inner_html("<pre><code>fn main() {}</code></pre>");
        crate::preview::highlight_code_blocks(&root);
        assert_eq!(root.inner_html(), "<pre><code>fn main() {}</code></pre>");
    }

    #[wasm_bindgen_test]
    fn test_csrf_cookie_is_read_from_document() {
        let doc: web_sys::HtmlDocument = document().dyn_into().expect("html document");
        doc.set_cookie("csrftoken=wasm-token; path=/").expect("set cookie");
        assert_eq!(crate::api::read_csrf_token().as_deref(), Some("wasm-token"));
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::level_from_env());

    let mounted = mount_all();
    log::debug!("mounted {mounted} markdown editor(s)");
}
