//! Navigation links and who gets to see them.

use crate::frontend::services::context::{AuthPhase, AuthSnapshot};
use crate::frontend::services::user::{Role, RoleSet, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Link,
    Button,
}

/// Work to run when a link is selected, after its menu closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
    pub action: Option<LinkAction>,
    /// Roles allowed to see the link once signed in.
    /// Empty means the link is only for visitors who are signed out.
    pub visible_to: RoleSet,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            kind: LinkKind::Link,
            action: None,
            visible_to: RoleSet::EMPTY,
        }
    }

    #[must_use]
    pub const fn visible_to(mut self, roles: &[Role]) -> Self {
        self.visible_to = RoleSet::of(roles);
        self
    }

    #[must_use]
    pub const fn button(mut self, action: LinkAction) -> Self {
        self.kind = LinkKind::Button;
        self.action = Some(action);
        self
    }

    pub fn is_visible(&self, user: Option<&User>) -> bool {
        match user {
            None => self.visible_to.is_empty(),
            Some(user) => self.visible_to.intersects(user.roles()),
        }
    }
}

/// Links in the primary bar and the site menu.
pub const SITE_LINKS: &[NavLink] = &[NavLink::new("Home", "/"), NavLink::new("About", "/about")];

/// Links in the account menu, before filtering.
pub const ACCOUNT_LINKS: &[NavLink] = &[
    NavLink::new("Sign in", "/login"),
    NavLink::new("Sign up", "/register"),
    NavLink::new("Profile", "/profile").visible_to(&[Role::User, Role::Alumni]),
    NavLink::new("Alumni Membership", "/alumni-membership").visible_to(&[Role::User, Role::Alumni]),
    NavLink::new("Admin", "/admin").visible_to(&[Role::Admin]),
    NavLink::new("Logout", "/")
        .button(LinkAction::Logout)
        .visible_to(&[Role::User, Role::Admin]),
];

/// Account links the given user (or a signed-out visitor) may see.
pub fn account_links(user: Option<&User>) -> Vec<NavLink> {
    ACCOUNT_LINKS
        .iter()
        .filter(|link| link.is_visible(user))
        .copied()
        .collect()
}

/// What the account menu toggle shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountToggleKind {
    /// Auth check still running; no menu yet.
    Spinner,
    SignIn,
    Avatar(String),
    UserIcon,
}

impl AccountToggleKind {
    pub fn for_snapshot(snapshot: &AuthSnapshot) -> Self {
        if snapshot.phase() == AuthPhase::Loading {
            return Self::Spinner;
        }
        match &snapshot.user {
            None => Self::SignIn,
            Some(user) => match &user.avatar {
                Some(avatar) if !avatar.trim().is_empty() => Self::Avatar(avatar.clone()),
                _ => Self::UserIcon,
            },
        }
    }
}

/// Handles a click on a menu entry: the menu is closed before the
/// link's action (if any) runs.
pub fn select_link(link: &NavLink, close_menu: impl FnOnce(), run_action: impl FnOnce(LinkAction)) {
    close_menu();
    if let Some(action) = link.action {
        run_action(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::user::test_user;

    const ALL_ROLES: [Role; 3] = [Role::User, Role::Admin, Role::Alumni];

    fn subsets() -> Vec<Vec<Role>> {
        (0u8..8)
            .map(|mask| {
                ALL_ROLES
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << *i) != 0)
                    .map(|(_, role)| *role)
                    .collect()
            })
            .collect()
    }

    fn labels(user: Option<&User>) -> Vec<&'static str> {
        account_links(user).iter().map(|link| link.label).collect()
    }

    #[test]
    fn visibility_is_role_intersection() {
        for required in subsets() {
            let link = NavLink::new("Test", "/test").visible_to(&required);
            assert_eq!(link.is_visible(None), required.is_empty());

            for held in subsets() {
                let user = test_user(&held);
                let overlap = required.iter().any(|role| held.contains(role));
                assert_eq!(link.is_visible(Some(&user)), overlap, "{required:?} vs {held:?}");
            }
        }
    }

    #[test]
    fn visitors_only_see_sign_in_and_sign_up() {
        assert_eq!(labels(None), vec!["Sign in", "Sign up"]);
    }

    #[test]
    fn alumni_see_membership_but_not_admin() {
        let user = test_user(&[Role::Alumni]);
        let visible = labels(Some(&user));

        assert!(visible.contains(&"Profile"));
        assert!(visible.contains(&"Alumni Membership"));
        assert!(!visible.contains(&"Logout"));
        assert!(!visible.contains(&"Admin"));
        assert!(!visible.contains(&"Sign in"));
    }

    #[test]
    fn admins_see_admin_and_logout() {
        let user = test_user(&[Role::Admin]);
        assert_eq!(labels(Some(&user)), vec!["Admin", "Logout"]);
    }

    #[test]
    fn members_can_log_out() {
        let user = test_user(&[Role::User, Role::Alumni]);
        let visible = labels(Some(&user));
        assert!(visible.contains(&"Logout"));
        assert!(visible.contains(&"Profile"));
    }

    #[test]
    fn toggle_follows_auth_state() {
        let mut snapshot = AuthSnapshot::default();
        assert_eq!(AccountToggleKind::for_snapshot(&snapshot), AccountToggleKind::Spinner);

        snapshot.finish_loading();
        assert_eq!(AccountToggleKind::for_snapshot(&snapshot), AccountToggleKind::SignIn);

        snapshot.set_user(test_user(&[Role::User]));
        assert_eq!(AccountToggleKind::for_snapshot(&snapshot), AccountToggleKind::UserIcon);

        let mut user = test_user(&[Role::User]);
        user.avatar = Some("/uploads/jane.png".to_string());
        snapshot.set_user(user);
        assert_eq!(
            AccountToggleKind::for_snapshot(&snapshot),
            AccountToggleKind::Avatar("/uploads/jane.png".to_string())
        );

        snapshot.start_loading();
        assert_eq!(AccountToggleKind::for_snapshot(&snapshot), AccountToggleKind::Spinner);
    }

    #[test]
    fn selecting_closes_menu_before_action() {
        let logout = ACCOUNT_LINKS
            .iter()
            .find(|link| link.label == "Logout")
            .unwrap();
        let events = std::cell::RefCell::new(Vec::new());

        select_link(
            logout,
            || events.borrow_mut().push("close".to_string()),
            |action| events.borrow_mut().push(format!("{action:?}")),
        );

        assert_eq!(events.into_inner(), vec!["close", "Logout"]);
    }

    #[test]
    fn plain_link_only_closes_menu() {
        let mut closed = false;
        let mut ran = false;

        select_link(&SITE_LINKS[0], || closed = true, |_| ran = true);

        assert!(closed);
        assert!(!ran);
    }

    #[test]
    fn logout_is_a_button() {
        let logout = ACCOUNT_LINKS
            .iter()
            .find(|link| link.label == "Logout")
            .unwrap();
        assert_eq!(logout.kind, LinkKind::Button);
        assert_eq!(logout.action, Some(LinkAction::Logout));
    }
}
