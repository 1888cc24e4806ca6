use crate::backend::config::AppConfig;
use dioxus::prelude::*;

/// Turns an avatar reference into a loadable URL. Relative references
/// are served by the API host.
pub fn resolve_avatar_url(base_url: &str, avatar: &str) -> String {
    let avatar = avatar.trim();
    if avatar.starts_with("http://") || avatar.starts_with("https://") || avatar.starts_with("data:") {
        return avatar.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        avatar.trim_start_matches('/')
    )
}

#[component]
pub fn Avatar(avatar: String, #[props(into)] size: String) -> Element {
    let config = use_context::<AppConfig>();
    let src = resolve_avatar_url(&config.api.base_url, &avatar);

    rsx! {
        img {
            class: "avatar",
            src: "{src}",
            alt: "Avatar",
            style: "width: {size}; height: {size};",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_avatar_uses_api_host() {
        assert_eq!(
            resolve_avatar_url("http://localhost:5000/api/", "/uploads/jane.png"),
            "http://localhost:5000/api/uploads/jane.png"
        );
    }

    #[test]
    fn absolute_avatar_is_kept() {
        let url = "https://cdn.alumni.example/jane.png";
        assert_eq!(resolve_avatar_url("http://localhost:5000/api", url), url);
    }
}
