mod backend;
mod frontend;
mod utils;

use crate::backend::api::HttpAuthApi;
use crate::backend::config::AppConfig;
use crate::backend::route::Route;
use crate::frontend::services::context::{AuthSnapshot, AuthState};
use crate::frontend::services::toast::use_toast_queue;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Logging setup
    utils::logging::init(&config.log_level);
    if let Some(e) = config_error {
        log::warn!("Using default config: {e:#}");
    }

    let api = match HttpAuthApi::new(&config.api) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to create HTTP client: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Using API at {}", config.api.base_url);

    let size = LogicalSize::new(1280.0, 832.0);
    let window = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("NIT AP Alumni")
                .with_inner_size(size),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(window)
        .with_context(config)
        .with_context(api)
        .launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let config = use_context::<AppConfig>();
    let api = use_context::<HttpAuthApi>();
    let toasts = use_toast_queue();
    use_context_provider(|| toasts);
    let snapshot = use_signal(AuthSnapshot::default);
    let auth = use_context_provider(|| {
        AuthState::new(api, snapshot, toasts, config.auth_settings())
    });

    // Check the session once on startup
    use_hook(move || {
        let mut auth = auth.clone();
        spawn(async move {
            auth.check_auth().await;
        });
    });

    rsx! { Router::<Route> {} }
}
