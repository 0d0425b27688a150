use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-md border border-destructive/30 px-3 py-2 text-sm"}
    clx! {AlertDescription, p, "text-xs text-destructive [&_p]:leading-relaxed"}
}

pub use components::*;
