use dioxus::prelude::*;

use crate::carousel::{BackgroundCarousel, SlideImage};
use crate::components::external_link::ExternalLink;
use crate::t;

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

/// Shared page scaffold: an optional full-bleed background carousel behind
/// the title and body, plus the two external-link cards every page shows.
/// An empty `carousel_images` list renders the page on a plain backdrop.
#[component]
pub fn PageLayout(
    title: String,
    #[props(default)] carousel_images: Vec<SlideImage>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LAYOUT_CSS }

        div { class: "page-layout",
            if !carousel_images.is_empty() {
                div { class: "page-layout__background",
                    BackgroundCarousel { images: carousel_images.clone() }
                }
            }

            div { class: "page-layout__content",
                h1 { class: "page-layout__title", "{title}" }
                div { class: "page-layout__body", {children} }

                div { class: "page-layout__links",
                    ExternalLink {
                        title: t!("links-listings-title"),
                        description: t!("links-listings-description"),
                        href: t!("links-listings-href"),
                    }
                    ExternalLink {
                        title: t!("links-contact-title"),
                        description: t!("links-contact-description"),
                        href: t!("links-contact-href"),
                    }
                }
            }
        }
    }
}
