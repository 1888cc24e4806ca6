//! Frontend module for the alumni portal.

pub mod components;
pub mod pages;
pub mod services;
