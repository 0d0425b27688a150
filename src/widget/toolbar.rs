use super::EditorContext;
use crate::completion::{emoji_image_url, EMOJIS};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Spinner};
use crate::config::ToolbarItem;
use crate::syntax::{emoji_literal, MarkdownAction, ACTIONS};
use leptos::prelude::*;

fn shortcut_title(action: MarkdownAction) -> String {
    let spec = action.spec();
    format!("{} ({})", spec.title, spec.keys.win)
}

#[component]
fn ActionButton(action: MarkdownAction) -> impl IntoView {
    let ctx = expect_context::<EditorContext>();
    let spec = action.spec();
    let name: &'static str = action.into();

    view! {
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Icon
            attr:r#type="button"
            attr:title=shortcut_title(action)
            attr:data-action=name
            on:click=move |_| ctx.run(action)
        >
            {spec.label}
        </Button>
    }
}

#[component]
fn HeadingMenu() -> impl IntoView {
    let open: RwSignal<bool> = RwSignal::new(false);
    let headings: Vec<MarkdownAction> = ACTIONS
        .iter()
        .map(|spec| spec.action)
        .filter(|action| action.is_heading())
        .collect();

    view! {
        <div class="relative">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:r#type="button"
                attr:title="Heading"
                attr:aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "H"
            </Button>
            <Show when=move || open.get() fallback=|| ().into_view()>
                <div
                    class="absolute left-0 top-full z-20 flex flex-col rounded-md border bg-background p-1 shadow-md"
                    on:click=move |_| open.set(false)
                >
                    {headings
                        .iter()
                        .map(|&action| view! { <ActionButton action=action /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn UploadButton() -> impl IntoView {
    let ctx = expect_context::<EditorContext>();
    let uploading = ctx.uploading;

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            ctx.upload(file);
        }
        // Allow picking the same file again.
        input.set_value("");
    };

    view! {
        <label
            class="inline-flex size-8 items-center justify-center rounded-md hover:cursor-pointer hover:bg-accent"
            title="Upload an image"
        >
            <Show when=move || uploading.get() fallback=|| view! { <span>"⇪"</span> }>
                <Spinner />
            </Show>
            <input
                type="file"
                accept="image/*"
                class="hidden"
                prop:disabled=move || uploading.get()
                on:change=on_change
            />
        </label>
    }
}

/// Buttons in the configured order, filtered by the enabled features.
#[component]
pub fn Toolbar(
    maximized: RwSignal<bool>,
    help_open: RwSignal<bool>,
    emoji_open: RwSignal<bool>,
) -> impl IntoView {
    let ctx = expect_context::<EditorContext>();

    let items = ctx
        .settings
        .toolbar()
        .into_iter()
        .map(|item| match item {
            ToolbarItem::Action(action) => view! { <ActionButton action=action /> }.into_any(),
            ToolbarItem::Heading => view! { <HeadingMenu /> }.into_any(),
            ToolbarItem::ImageUpload => view! { <UploadButton /> }.into_any(),
            ToolbarItem::Emoji => view! {
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:r#type="button"
                    attr:title="Insert emoji"
                    on:click=move |_| emoji_open.update(|o| *o = !*o)
                >
                    "☺"
                </Button>
            }
            .into_any(),
            ToolbarItem::ToggleMaximize => view! {
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:r#type="button"
                    attr:title=move || if maximized.get() { "Exit full screen" } else { "Full screen" }
                    on:click=move |_| maximized.update(|m| *m = !*m)
                >
                    {move || if maximized.get() { "⤡" } else { "⤢" }}
                </Button>
            }
            .into_any(),
            ToolbarItem::Help => view! {
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:r#type="button"
                    attr:title="Markdown guide"
                    on:click=move |_| help_open.update(|o| *o = !*o)
                >
                    "?"
                </Button>
            }
            .into_any(),
        })
        .collect_view();

    view! { <div class="martor-toolbar flex flex-wrap items-center gap-0.5">{items}</div> }
}

#[component]
pub fn HelpPanel(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<EditorContext>();
    let mention = ctx.settings.config.mention;

    let rows = ACTIONS
        .iter()
        .filter(|spec| mention || spec.action != MarkdownAction::DirectMention)
        .map(|spec| {
            view! {
                <tr class="border-t">
                    <td class="py-1 pr-4">{spec.title}</td>
                    <td class="py-1 pr-4 font-mono">{spec.keys.win}</td>
                    <td class="py-1 font-mono">{spec.keys.mac}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="border-t p-3 text-sm">
            <div class="mb-2 flex items-center justify-between">
                <span class="font-medium">"Keyboard shortcuts"</span>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:r#type="button"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </Button>
            </div>
            <table class="w-full text-left text-xs">
                <thead>
                    <tr>
                        <th class="pr-4">"Action"</th>
                        <th class="pr-4">"Windows / Linux"</th>
                        <th>"macOS"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
pub fn EmojiPicker(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<EditorContext>();
    let base = ctx.settings.base_emoji_url.clone();

    let items = EMOJIS
        .iter()
        .map(|code| {
            let ctx = ctx.clone();
            let src = emoji_image_url(&base, code);
            view! {
                <button
                    type="button"
                    class="inline-flex items-center gap-1 rounded px-1 py-0.5 text-xs hover:bg-accent"
                    title=*code
                    on:click=move |_| {
                        ctx.insert(&emoji_literal(code));
                        on_close.run(());
                    }
                >
                    <img class="size-5" loading="lazy" src=src alt=*code />
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="max-h-64 overflow-auto border-t p-2">
            <div class="mb-1 flex items-center justify-between text-sm">
                <span class="font-medium">"Emoji"</span>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:r#type="button"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </Button>
            </div>
            <div class="flex flex-wrap gap-1">{items}</div>
        </div>
    }
}
