//! Signed-in user and roles.

use serde::{Deserialize, Serialize};

/// Role tag governing which links and features a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Alumni,
    /// Any role this client does not know about. Grants nothing.
    #[serde(other)]
    Unknown,
}

impl Role {
    const fn bit(self) -> u8 {
        match self {
            Self::User => 1,
            Self::Admin => 1 << 1,
            Self::Alumni => 1 << 2,
            Self::Unknown => 0,
        }
    }
}

/// Set of known roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: Self = Self(0);

    pub const fn of(roles: &[Role]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, role: Role) -> bool {
        let bit = role.bit();
        bit != 0 && self.0 & bit == bit
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for role in iter {
            set.insert(role);
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub role: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn roles(&self) -> RoleSet {
        self.role.iter().copied().collect()
    }

    pub fn is_admin(&self) -> bool {
        self.roles().contains(Role::Admin)
    }

    /// Full name with title, or `None` while the profile has no first name.
    pub fn display_name(&self) -> Option<String> {
        if self.first_name.trim().is_empty() {
            return None;
        }

        let name = [&self.title, &self.first_name, &self.last_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Some(name)
    }

    /// Greeting shown after a successful login.
    pub fn welcome_message(&self) -> String {
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            "Welcome back!".to_string()
        } else {
            format!("Welcome back, {first_name}!")
        }
    }
}

#[cfg(test)]
pub(crate) fn test_user(roles: &[Role]) -> User {
    User {
        email: "jane@alumni.example".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        title: "Dr.".to_string(),
        role: roles.to_vec(),
        avatar: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_are_ignored() {
        let user: User = serde_json::from_value(serde_json::json!({
            "email": "a@b.c",
            "role": ["alumni", "moderator"]
        }))
        .unwrap();

        assert_eq!(user.role, vec![Role::Alumni, Role::Unknown]);
        assert_eq!(user.roles(), RoleSet::of(&[Role::Alumni]));
        assert!(!user.roles().contains(Role::Unknown));
        assert!(!user.is_admin());
    }

    #[test]
    fn admin_flag_follows_roles() {
        assert!(test_user(&[Role::User, Role::Admin]).is_admin());
        assert!(!test_user(&[Role::User]).is_admin());
        assert!(!test_user(&[]).is_admin());
    }

    #[test]
    fn intersection() {
        let member = RoleSet::of(&[Role::User, Role::Alumni]);
        assert!(member.intersects(RoleSet::of(&[Role::Alumni])));
        assert!(!member.intersects(RoleSet::of(&[Role::Admin])));
        assert!(!member.intersects(RoleSet::EMPTY));
        assert!(RoleSet::of(&[Role::Unknown]).is_empty());
    }

    #[test]
    fn display_name_needs_first_name() {
        let mut user = test_user(&[Role::User]);
        assert_eq!(user.display_name().as_deref(), Some("Dr. Jane Doe"));

        user.title.clear();
        assert_eq!(user.display_name().as_deref(), Some("Jane Doe"));

        user.first_name.clear();
        assert_eq!(user.display_name(), None);
    }

    #[test]
    fn welcome_message_falls_back_without_name() {
        let mut user = test_user(&[Role::User]);
        assert_eq!(user.welcome_message(), "Welcome back, Jane!");

        user.first_name = " ".to_string();
        assert_eq!(user.welcome_message(), "Welcome back!");
    }
}
