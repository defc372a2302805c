use dioxus::prelude::*;

use crate::components::PageLayout;

#[component]
pub fn Pathnames() -> Element {
    // Re-render when the locale changes elsewhere (e.g. while on Home).
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        PageLayout {
            title: crate::t!("pathnames-title"),
            carousel_images: super::background_images(),
            div { class: "page-pathnames__body",
                p { {crate::t!("pathnames-intro")} }
                p { {crate::t!("pathnames-description")} }
            }
        }
    }
}
