use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Home, Pathnames};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/pathnames")]
    Pathnames {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
// About and the Vancouver Island teaser both land on the pathnames page,
// as on the original site.
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Pathnames {},
        "{label}"
    })
}
fn nav_island(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Pathnames {},
        "{label}"
    })
}
fn nav_pathnames(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Pathnames {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register the localized navigation builder before the first render.
        register_nav(NavBuilder {
            home: nav_home,
            about: nav_about,
            island: nav_island,
            pathnames: nav_pathnames,
        });
    }

    // Global language code; the navbar's locale switcher writes it, views
    // subscribe to it so translated strings refresh everywhere.
    use_context_provider(|| Signal::new("en-US".to_string()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout wrapping every route in the shared `AppNavbar`,
/// so the `ui` crate never needs this crate's `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
