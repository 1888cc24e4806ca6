//! Sign-in page.

use crate::backend::api::LoginCredentials;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Checks the form before it is sent. Returns the problem, if any.
pub fn validate_login(email: &str, password: &str) -> Option<&'static str> {
    if !EMAIL.is_match(email.trim()) {
        Some("Enter a valid email address")
    } else if password.is_empty() {
        Some("Enter your password")
    } else {
        None
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }
        if let Some(problem) = validate_login(&email.read(), &password.read()) {
            error.set(Some(problem.to_string()));
            return;
        }

        let credentials = LoginCredentials::new(email.read().trim(), password.read().as_str());
        let mut auth = auth.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match auth.login(&credentials).await {
                Ok(()) => {
                    password.set(String::new());
                    nav.push("/");
                }
                Err(e) => {
                    log::warn!("Sign in failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        section { class: "auth-page",
            h1 { "Sign in" }
            form { class: "auth-form", onsubmit: on_submit,
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{email}",
                    autofocus: true,
                    oninput: move |e| email.set(e.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                if let Some(message) = error() {
                    div { class: "error-message", "{message}" }
                }
                button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requires_email_and_password() {
        assert_eq!(validate_login("jane", "secret"), Some("Enter a valid email address"));
        assert_eq!(validate_login("jane@alumni.example", ""), Some("Enter your password"));
        assert_eq!(validate_login(" jane@alumni.example ", "secret"), None);
    }
}
