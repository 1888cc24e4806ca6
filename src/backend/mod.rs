//! Remote API access, configuration and routing.

pub mod api;
pub mod config;
pub mod route;
