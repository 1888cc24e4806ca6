//! Collapsible menu anchored to a toggle.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownPosition {
    Left,
    #[default]
    Right,
}

impl DropdownPosition {
    pub const fn menu_class(self) -> &'static str {
        match self {
            Self::Left => "dropdown-menu dropdown-menu-left",
            Self::Right => "dropdown-menu dropdown-menu-right",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DropdownProps {
    /// Owned by the caller so menu entries can close it.
    pub open: Signal<bool>,
    #[props(default)]
    pub position: DropdownPosition,
    pub toggle: Element,
    pub children: Element,
}

#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let mut open = props.open;

    rsx! {
        div {
            class: "dropdown",
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    open.set(false);
                }
            },
            div {
                class: "dropdown-toggle",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                {props.toggle}
            }
            if open() {
                // Clicks outside the menu close it
                div {
                    class: "dropdown-backdrop",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: props.position.menu_class(),
                    onclick: |e| e.stop_propagation(),
                    {props.children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_opens_to_the_right_by_default() {
        assert_eq!(
            DropdownPosition::default().menu_class(),
            "dropdown-menu dropdown-menu-right"
        );
    }
}
