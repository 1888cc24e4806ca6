use crate::backend::route::Route;
use crate::frontend::components::common::ToastContainer;
use crate::frontend::components::layout::Navbar;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

#[component]
pub fn Layout() -> Element {
    rsx! {
        Navbar {}
        main { class: "page container",
            Outlet::<Route> {}
        }
        ToastContainer {}
    }
}
