use dioxus::prelude::*;

/// Card-style link to an external resource: title, arrow, short description.
#[component]
pub fn ExternalLink(title: String, description: String, href: String) -> Element {
    rsx! {
        a {
            class: "external-link",
            href: "{href}",
            rel: "noreferrer",
            target: "_blank",
            p { class: "external-link__title",
                "{title}"
                span { class: "external-link__arrow", aria_hidden: "true", " \u{2197}" }
            }
            p { class: "external-link__description", "{description}" }
        }
    }
}
