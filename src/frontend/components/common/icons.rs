//! Inline stroke icons.

use dioxus::prelude::*;

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            path { d: "M3 5h18M3 12h18M3 19h18" }
        }
    }
}

#[component]
pub fn LoginIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M19 12h-7m0 0 3 3m-3-3 3-3" }
            path { d: "M13 19.9A8 8 0 1 1 13 4.1" }
        }
    }
}

#[component]
pub fn UserIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M5 20v-1a7 7 0 0 1 7-7v0a7 7 0 0 1 7 7v1" }
            path { d: "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z" }
        }
    }
}
