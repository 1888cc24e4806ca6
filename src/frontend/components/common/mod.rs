//! Common reusable components.

pub mod avatar;
pub mod dropdown;
pub mod icons;
pub mod nav_toggle;
pub mod toasts;

pub use avatar::Avatar;
pub use dropdown::{Dropdown, DropdownPosition};
pub use icons::{LoginIcon, MenuIcon, UserIcon};
pub use nav_toggle::{NavToggle, ToggleVariant};
pub use toasts::ToastContainer;
