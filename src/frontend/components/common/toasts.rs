use crate::frontend::services::toast::{Toast, ToastQueue};
use dioxus::prelude::*;

#[component]
pub fn ToastContainer() -> Element {
    let queue = use_context::<ToastQueue>();

    rsx! {
        div { class: "toast-container",
            for toast in queue.toasts() {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut queue = use_context::<ToastQueue>();
    let id = toast.id;
    let auto_close = toast.auto_close;
    let close_on_click = toast.close_on_click;

    // Remove the toast once its time is up
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(auto_close).await;
            queue.dismiss(id);
        });
    });

    rsx! {
        div {
            class: toast.kind.class(),
            role: "status",
            onclick: move |_| {
                if close_on_click {
                    queue.dismiss(id);
                }
            },
            span { class: "toast-message", "{toast.message}" }
            if toast.close_button {
                button {
                    class: "toast-close",
                    aria_label: "Close",
                    onclick: move |e| {
                        e.stop_propagation();
                        queue.dismiss(id);
                    },
                    "×"
                }
            }
        }
    }
}
