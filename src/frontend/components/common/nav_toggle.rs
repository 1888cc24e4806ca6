use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleVariant {
    #[default]
    Outline,
    Fill,
}

pub fn toggle_class(active: bool, variant: ToggleVariant) -> String {
    let variant = match variant {
        ToggleVariant::Outline => "nav-toggle-outline",
        ToggleVariant::Fill => "nav-toggle-fill",
    };
    // Active toggles get a wider halo
    let halo = if active { "nav-toggle-halo-wide" } else { "nav-toggle-halo" };
    format!("nav-toggle {variant} {halo}")
}

#[component]
pub fn NavToggle(
    active: bool,
    #[props(default)] variant: ToggleVariant,
    #[props(into, default = "Menu".to_string())] label: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: toggle_class(active, variant),
            aria_label: "{label}",
            aria_expanded: "{active}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_toggle_widens_halo() {
        assert_eq!(
            toggle_class(true, ToggleVariant::Fill),
            "nav-toggle nav-toggle-fill nav-toggle-halo-wide"
        );
        assert_eq!(
            toggle_class(false, ToggleVariant::default()),
            "nav-toggle nav-toggle-outline nav-toggle-halo"
        );
    }
}
