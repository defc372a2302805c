use dioxus::prelude::*;

use crate::t;

const LOGO_CSS: Asset = asset!("/assets/styling/logo.css");

/// Two-line text logo: brand title over a small tagline. Both lines default
/// to localized strings and can be overridden per call site.
#[component]
pub fn TextLogo(title: Option<String>, tagline: Option<String>) -> Element {
    let title = title.unwrap_or_else(|| t!("logo-title"));
    let tagline = tagline.unwrap_or_else(|| t!("logo-tagline"));

    rsx! {
        document::Link { rel: "stylesheet", href: LOGO_CSS }

        div { class: "logo",
            span { class: "logo__title", "{title}" }
            span { class: "logo__tagline", "{tagline}" }
        }
    }
}
