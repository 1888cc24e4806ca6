//! Routed pages.

pub mod auth;
pub mod main;

pub use auth::Login;
pub use main::{About, Admin, AlumniMembership, Home, Profile, Register};
