use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{platform, timing};
use crate::t;

use super::engine::{CarouselEngine, SlideImage, DEFAULT_INTERVAL_MS};

const CAROUSEL_CSS: Asset = asset!("/assets/styling/carousel.css");

/// Events handled by the carousel coroutine. All state transitions funnel
/// through the one receiver, so timer ticks and pointer input are never
/// processed concurrently.
#[derive(Debug, Clone)]
enum CarouselEvent {
    /// A one-shot timer fired. Carries the epoch the chain was armed under;
    /// a mismatch means the chain was superseded and the tick is dropped.
    Advance { epoch: u64 },
    Next,
    Previous,
    GoTo(usize),
    Reconfigure {
        images: Vec<SlideImage>,
        interval_ms: u64,
    },
}

/// Full-bleed rotating background carousel.
///
/// Renders one active slide out of a fixed list, auto-advancing on a timer,
/// with an optional manual-override surface (previous/next controls and
/// per-slide indicators). The slide cross-fade lives entirely in
/// `carousel.css`; this component only moves the active index.
///
/// Each mounted instance owns its own engine. Unmounting drops the
/// coroutine, so pending timer sends fail silently and no state mutates
/// after teardown.
#[component]
pub fn BackgroundCarousel(
    images: Vec<SlideImage>,
    #[props(default = DEFAULT_INTERVAL_MS)] interval_ms: u64,
    #[props(default = 0.7)] overlay_opacity: f64,
    #[props(default = false)] show_controls: bool,
    #[props(default = false)] show_indicators: bool,
) -> Element {
    let engine = use_signal({
        let images = images.clone();
        move || CarouselEngine::new(images, interval_ms)
    });

    let sender_slot: Rc<RefCell<Option<UnboundedSender<CarouselEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<CarouselEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut engine_signal = engine;

        async move {
            // Arm the initial chain. Nothing to rotate to for 0 or 1 slides.
            arm_if_needed(&engine_signal, &sender_slot);

            while let Some(event) = rx.next().await {
                match event {
                    CarouselEvent::Advance { epoch } => {
                        let live = engine_signal.with(|eng| eng.epoch() == epoch);
                        if !live {
                            // A manual jump or reconfigure armed a fresh
                            // chain; this tick belongs to the old one.
                            continue;
                        }
                        engine_signal.with_mut(|eng| {
                            eng.tick(timing::now_ms());
                        });
                        arm_if_needed(&engine_signal, &sender_slot);
                    }
                    CarouselEvent::Next => {
                        engine_signal.with_mut(|eng| eng.next(timing::now_ms()));
                        arm_if_needed(&engine_signal, &sender_slot);
                    }
                    CarouselEvent::Previous => {
                        engine_signal.with_mut(|eng| eng.previous(timing::now_ms()));
                        arm_if_needed(&engine_signal, &sender_slot);
                    }
                    CarouselEvent::GoTo(index) => {
                        engine_signal.with_mut(|eng| eng.go_to(index, timing::now_ms()));
                        arm_if_needed(&engine_signal, &sender_slot);
                    }
                    CarouselEvent::Reconfigure {
                        images,
                        interval_ms,
                    } => {
                        engine_signal.with_mut(|eng| eng.reconfigure(images, interval_ms));
                        arm_if_needed(&engine_signal, &sender_slot);
                    }
                }
            }
        }
    });
    *sender_slot.borrow_mut() = Some(coroutine.tx());

    // Keep the engine in sync when the caller swaps the slide list or the
    // interval between renders.
    let config_changed = {
        let eng = engine.peek();
        eng.images() != images.as_slice() || eng.interval_ms() != interval_ms
    };
    if config_changed {
        coroutine.send(CarouselEvent::Reconfigure {
            images: images.clone(),
            interval_ms,
        });
    }

    let eng = engine();
    let active = eng.current_index();
    let overlay_style = format!("opacity: {overlay_opacity};");

    if eng.is_empty() {
        // Defined degenerate rendering: a neutral backdrop, no timer armed.
        return rsx! {
            document::Link { rel: "stylesheet", href: CAROUSEL_CSS }
            div { class: "carousel carousel--empty", aria_hidden: "true" }
        };
    }

    let label_previous = t!("carousel-previous");
    let label_next = t!("carousel-next");

    rsx! {
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS }

        div { class: "carousel",
            {eng.images().iter().enumerate().map(|(i, slide)| {
                let class = if i == active {
                    "carousel__slide carousel__slide--active"
                } else {
                    "carousel__slide"
                };
                rsx! {
                    div { key: "{slide.src}", class: "{class}",
                        img {
                            class: "carousel__image",
                            src: "{slide.src}",
                            alt: "{slide.alt}",
                        }
                    }
                }
            })}

            // Readability overlay between the slides and the page content.
            div {
                class: "carousel__overlay",
                style: "{overlay_style}",
                aria_hidden: "true",
            }

            if show_controls && eng.len() > 1 {
                button {
                    class: "carousel__control carousel__control--previous",
                    aria_label: "{label_previous}",
                    onclick: move |_| coroutine.send(CarouselEvent::Previous),
                    "\u{2039}"
                }
                button {
                    class: "carousel__control carousel__control--next",
                    aria_label: "{label_next}",
                    onclick: move |_| coroutine.send(CarouselEvent::Next),
                    "\u{203a}"
                }
            }

            if show_indicators && eng.len() > 1 {
                div { class: "carousel__indicators",
                    {(0..eng.len()).map(|i| {
                        let current = i == active;
                        let class = if current {
                            "carousel__indicator carousel__indicator--active"
                        } else {
                            "carousel__indicator"
                        };
                        let label = t!("carousel-indicator", slide = (i + 1).to_string());
                        rsx! {
                            button {
                                key: "{i}",
                                class: "{class}",
                                aria_label: "{label}",
                                aria_current: if current { "true" } else { "false" },
                                onclick: move |_| coroutine.send(CarouselEvent::GoTo(i)),
                            }
                        }
                    })}
                }
            }
        }
    }
}

fn arm_if_needed(
    engine: &Signal<CarouselEngine>,
    sender_slot: &Rc<RefCell<Option<UnboundedSender<CarouselEvent>>>>,
) {
    let (needed, epoch, wait_ms) =
        engine.with(|eng| (eng.timer_needed(), eng.epoch(), eng.interval_ms()));
    if needed {
        queue_advance(sender_slot.clone(), epoch, wait_ms);
    }
}

fn queue_advance(
    sender_slot: Rc<RefCell<Option<UnboundedSender<CarouselEvent>>>>,
    epoch: u64,
    wait_ms: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(wait_ms).await;
            // The receiver is gone once the carousel unmounts; a failed
            // send means no state mutates after teardown.
            let _ = sender.unbounded_send(CarouselEvent::Advance { epoch });
        });
    }
}
