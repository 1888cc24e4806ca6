use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page-home",
            h1 { "NIT AP Alumni Association" }
            p { "Stay connected with your batchmates and the institute." }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page-about",
            h1 { "About" }
        }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        section { class: "auth-page",
            h1 { "Sign up" }
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthState>();
    let user = auth.user();

    rsx! {
        section { class: "page-profile",
            h1 { "Profile" }
            if let Some(user) = user {
                p { class: "user-email", "{user.email}" }
            } else {
                p { "Sign in to view your profile." }
            }
        }
    }
}

#[component]
pub fn AlumniMembership() -> Element {
    rsx! {
        section { class: "page-membership",
            h1 { "Alumni Membership" }
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let auth = use_context::<AuthState>();

    rsx! {
        section { class: "page-admin",
            h1 { "Admin" }
            if !auth.is_admin() {
                p { "You do not have access to this page." }
            }
        }
    }
}
