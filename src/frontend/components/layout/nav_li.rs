use crate::backend::route::Route;
use crate::frontend::services::navigation::{LinkKind, NavLink};
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

/// One entry of a navigation list. `on_select` runs before navigating.
#[component]
pub fn NavLi(link: NavLink, on_select: Option<EventHandler<NavLink>>) -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let active = route.to_string() == link.href;

    let select = move |e: Event<MouseData>| {
        e.prevent_default();
        if let Some(handler) = on_select {
            handler.call(link);
        }
        nav.push(link.href);
    };

    let class = if active { "nav-link active" } else { "nav-link" };

    rsx! {
        li { class: "nav-li",
            match link.kind {
                LinkKind::Link => rsx! {
                    a { class: "{class}", href: "{link.href}", onclick: select, "{link.label}" }
                },
                LinkKind::Button => rsx! {
                    button { r#type: "button", class: "{class} nav-button", onclick: select, "{link.label}" }
                },
            }
        }
    }
}
