//! Rotating background-image carousel: a pure engine plus a Dioxus view.

mod engine;
mod view;

pub use engine::{CarouselEngine, SlideImage, DEFAULT_INTERVAL_MS};
pub use view::BackgroundCarousel;
