//! Layout components.

pub mod main;
pub mod nav_li;
pub mod navigation;

pub use main::Layout;
pub use navigation::Navbar;
