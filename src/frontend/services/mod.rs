//! Frontend services for auth state, navigation data and notifications.

pub mod context;
pub mod navigation;
pub mod toast;
pub mod user;
