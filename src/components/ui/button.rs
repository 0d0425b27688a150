use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-1 whitespace-nowrap rounded-md text-sm font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 outline-none focus-visible:ring-ring/50 focus-visible:ring-[3px] hover:cursor-pointer select-none",
        variants: {
            variant: {
                Default: "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90",
                Ghost: "hover:bg-accent hover:text-accent-foreground",
                Outline: "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground",
                // Editor/Preview tab headers.
                Tab: "rounded-none border-b-2 border-transparent text-muted-foreground hover:text-foreground aria-selected:border-primary aria-selected:text-foreground",
            },
            size: {
                Default: "h-9 px-4 py-2",
                Sm: "h-8 px-3",
                // Toolbar glyph buttons.
                Icon: "size-8 font-semibold",
            }
        },
        component: {
            element: button
        }
    }
}
