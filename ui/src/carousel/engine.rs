//! State machine for the background carousel.
//!
//! Pure logic, no framework types: the view owns a `CarouselEngine` inside a
//! signal and forwards timer and pointer events to it, so every transition
//! is testable without a renderer or a real clock.
//!
//! Tick policy: a timer tick advances only when a full interval has elapsed
//! since the last manual interaction, so auto-advance never fires on the
//! heels of user input.

/// One slide: an image locator plus its accessible label.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideImage {
    pub src: String,
    pub alt: String,
}

impl SlideImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Default rotation interval, matching the site's original cadence.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Carousel state: the active index into a fixed slide list, the rotation
/// interval, and the time of the last manual interaction.
///
/// `epoch` increments on every manual navigation and reconfiguration. The
/// view arms each tick chain with the epoch it observed and discards ticks
/// from a superseded chain, so a manual jump restarts the rotation clock
/// and a stale timer can never mutate fresh state.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselEngine {
    images: Vec<SlideImage>,
    interval_ms: u64,
    current: usize,
    last_interaction_ms: f64,
    epoch: u64,
}

impl Default for CarouselEngine {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_INTERVAL_MS)
    }
}

impl CarouselEngine {
    pub fn new(images: Vec<SlideImage>, interval_ms: u64) -> Self {
        Self {
            images,
            interval_ms: interval_ms.max(1),
            current: 0,
            // "Never interacted": the first tick is always eligible.
            last_interaction_ms: f64::NEG_INFINITY,
            epoch: 0,
        }
    }

    pub fn images(&self) -> &[SlideImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// A rotation timer is only worth arming when there is something to
    /// rotate to.
    pub fn timer_needed(&self) -> bool {
        self.images.len() > 1
    }

    /// Active index, taken modulo the list length at every read so a tick
    /// that lands after the list shrank can never yield an out-of-bounds
    /// index.
    pub fn current_index(&self) -> usize {
        if self.images.is_empty() {
            0
        } else {
            self.current % self.images.len()
        }
    }

    /// The slide currently selected for display, or `None` when the list is
    /// empty (the view renders a neutral placeholder in that case).
    pub fn current_image(&self) -> Option<&SlideImage> {
        self.images.get(self.current_index())
    }

    /// Timer callback. Advances unless a manual interaction happened less
    /// than one interval ago. Returns whether the index moved.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.timer_needed() {
            return false;
        }
        if now_ms - self.last_interaction_ms < self.interval_ms as f64 {
            return false;
        }
        self.current = (self.current_index() + 1) % self.images.len();
        true
    }

    /// Manual step forward with wraparound. No-op for lists shorter than 2.
    pub fn next(&mut self, now_ms: f64) {
        if self.images.len() < 2 {
            return;
        }
        self.current = (self.current_index() + 1) % self.images.len();
        self.mark_interaction(now_ms);
    }

    /// Manual step backward with wraparound. No-op for lists shorter than 2.
    pub fn previous(&mut self, now_ms: f64) {
        let len = self.images.len();
        if len < 2 {
            return;
        }
        self.current = (self.current_index() + len - 1) % len;
        self.mark_interaction(now_ms);
    }

    /// Manual jump. Out-of-range indices are ignored, never an error.
    pub fn go_to(&mut self, index: usize, now_ms: f64) {
        if index >= self.images.len() {
            return;
        }
        self.current = index;
        self.mark_interaction(now_ms);
    }

    /// Swap the slide list and/or interval in place. Bumps the epoch so the
    /// view tears the old tick chain down before arming a new one. The
    /// active index is carried over modulo the new length.
    pub fn reconfigure(&mut self, images: Vec<SlideImage>, interval_ms: u64) {
        let index = self.current_index();
        self.images = images;
        self.interval_ms = interval_ms.max(1);
        self.current = if self.images.is_empty() {
            0
        } else {
            index % self.images.len()
        };
        self.epoch += 1;
    }

    fn mark_interaction(&mut self, now_ms: f64) {
        self.last_interaction_ms = now_ms;
        self.epoch += 1;
    }
}
