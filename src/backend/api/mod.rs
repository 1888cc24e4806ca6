//! Remote auth API.

pub mod client;
pub mod models;

pub use client::{AuthApi, HttpAuthApi};
pub use models::{CheckAuthResponse, LoginCredentials, LoginResponse, ReadUserResponse};
