use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::logo::TextLogo;
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platform crates register link-building closures so this crate never has
/// to know the concrete `Route` enum. Each closure receives the localized
/// label and returns a fully constructed `Link` containing it.
///
/// Registration happens once, before the root renders:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" }),
///     ..
/// });
/// ```
///
/// The locale switcher triggers a re-render via the global language signal;
/// every render pulls fresh localized strings through `t!`.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
    pub island: fn(label: &str) -> Element,
    pub pathnames: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, provided by the platform crate.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided).
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] AppNavbar render lang={}", code());
        }
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            // Propagate so every subscribed view re-renders with new strings.
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    // Localized nav links through the registered builder. The original site
    // points ABOUT and VANCOUVER ISLAND at the pathnames page as well; the
    // builder closures decide the actual targets.
    let nav_links: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let about = (b.about)(&t!("nav-about"));
        let island = (b.island)(&t!("nav-island"));
        let pathnames = (b.pathnames)(&t!("nav-pathnames"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {about}
                {island}
                {pathnames}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures this component re-renders when the
            // global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    TextLogo {}
                }

                if let Some(nav) = nav_links {
                    {nav}
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
