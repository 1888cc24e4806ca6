use crate::frontend::components::layout::Layout;
use crate::frontend::pages::{About, Admin, AlumniMembership, Home, Login, Profile, Register};

use dioxus::prelude::*;
use dioxus_router::Routable;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/alumni-membership")]
    AlumniMembership {},
    #[route("/admin")]
    Admin {},
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::navigation::{ACCOUNT_LINKS, SITE_LINKS};
    use std::str::FromStr;

    #[test]
    fn every_link_has_a_route() {
        for link in SITE_LINKS.iter().chain(ACCOUNT_LINKS) {
            let route = Route::from_str(link.href)
                .unwrap_or_else(|_| panic!("no route for {}", link.href));
            assert_eq!(route.to_string(), link.href);
        }
    }
}
