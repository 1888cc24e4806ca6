use crate::frontend::components::common::{
    Avatar, Dropdown, DropdownPosition, LoginIcon, MenuIcon, NavToggle, ToggleVariant, UserIcon,
};
use crate::frontend::components::layout::nav_li::NavLi;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::navigation::{
    AccountToggleKind, LinkAction, NavLink, SITE_LINKS, account_links, select_link,
};
use crate::frontend::services::user::User;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Navbar() -> Element {
    let auth = use_context::<AuthState>();
    let snapshot = auth.snapshot();
    let mut site_open = use_signal(|| false);
    let mut account_open = use_signal(|| false);
    let nav = navigator();

    let close_site_menu = use_callback(move |link: NavLink| {
        select_link(&link, || site_open.set(false), |_| {});
    });

    let select_account_link = use_callback(move |link: NavLink| {
        select_link(&link, || account_open.set(false), |action| match action {
            LinkAction::Logout => {
                let mut auth = auth.clone();
                spawn(async move {
                    auth.logout().await;
                });
            }
        });
    });

    let toggle_kind = AccountToggleKind::for_snapshot(&snapshot);
    let user_links = account_links(snapshot.user.as_ref());

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container container",
                div {
                    class: "logo",
                    onclick: move |_| { nav.push("/"); },
                    span { class: "logo-text", "NIT AP Alumni" }
                }
                div { class: "nav-content",
                    ul { class: "nav-list",
                        for link in SITE_LINKS.iter().copied() {
                            NavLi { key: "{link.href}", link }
                        }
                    }
                    div { class: "nav-toggles",
                        Dropdown {
                            open: site_open,
                            position: DropdownPosition::Right,
                            toggle: rsx! {
                                NavToggle { active: site_open(), MenuIcon {} }
                            },
                            div { class: "collapsable-nav container",
                                hr {}
                                ul { class: "collapsable-nav-list",
                                    for link in SITE_LINKS.iter().copied() {
                                        NavLi { key: "{link.href}", link, on_select: close_site_menu }
                                    }
                                }
                            }
                        }
                        if toggle_kind == AccountToggleKind::Spinner {
                            div { class: "spinner", aria_label: "Loading auth status" }
                        } else {
                            Dropdown {
                                open: account_open,
                                position: DropdownPosition::Right,
                                toggle: rsx! {
                                    AccountToggle { active: account_open(), kind: toggle_kind.clone() }
                                },
                                div { class: "collapsable-nav container",
                                    if let Some(user) = snapshot.user.clone() {
                                        AccountSummary { user }
                                    }
                                    hr {}
                                    ul { class: "collapsable-nav-list",
                                        for link in user_links {
                                            NavLi { key: "{link.label}", link, on_select: select_account_link }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountToggle(active: bool, kind: AccountToggleKind) -> Element {
    match kind {
        AccountToggleKind::Spinner | AccountToggleKind::SignIn => rsx! {
            NavToggle { active, variant: ToggleVariant::Fill, label: "Sign in", LoginIcon {} }
        },
        AccountToggleKind::Avatar(avatar) => rsx! {
            NavToggle { active, variant: ToggleVariant::Fill, label: "Account",
                Avatar { avatar, size: "100%" }
            }
        },
        AccountToggleKind::UserIcon => rsx! {
            NavToggle { active, variant: ToggleVariant::Fill, label: "Account", UserIcon {} }
        },
    }
}

#[component]
fn AccountSummary(user: User) -> Element {
    rsx! {
        div { class: "user-info",
            if let Some(avatar) = user.avatar.clone() {
                Avatar { avatar, size: "6rem" }
            }
            div { class: "user-name-wrapper",
                if let Some(name) = user.display_name() {
                    div { class: "user-name", "{name}" }
                } else {
                    div { class: "message", "Please complete your profile" }
                }
            }
            div { class: "user-email", "{user.email}" }
        }
    }
}
