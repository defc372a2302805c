//! Shared UI crate for the Shorelight site. Components, views, i18n, and the
//! background carousel live here; platform crates only wire up routing.

pub mod carousel;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub mod external_link;
    pub mod logo;
    pub mod page_layout;

    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
    pub use external_link::ExternalLink;
    pub use logo::TextLogo;
    pub use page_layout::PageLayout;
}
