use dioxus::prelude::*;

use crate::components::PageLayout;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render
    // on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        PageLayout {
            title: crate::t!("home-title"),
            carousel_images: super::background_images(),
            p { class: "page-home__description", {crate::t!("home-description")} }
        }
    }
}
