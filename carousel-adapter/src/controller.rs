use alloc::rc::Rc;
use core::cell::Cell;

use carousel::{
    Carousel, CarouselOptions, Correction, Direction, ItemKey, Measurement, ScrollCommand,
};

use crate::handle::{Mailbox, NavigationHandle};
use crate::{DEFAULT_SMOOTH_SCROLL_MS, Easing, Navigate, Tween};

/// A framework-neutral controller that hosts a [`carousel::Carousel`] against a scroll viewport.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_measure` on mount and on resize/content changes
/// - `on_scroll` when the user scrolls the viewport (drag, wheel, scrollbar)
/// - `on_touch_*` for swipe gestures
/// - `tick(now_ms)` each frame/timer tick (for smooth scrolls and the correction cooldown)
///
/// Whenever a method returns `Some(offset)`, write that offset into the real viewport. Smooth
/// scrolls are simulated with a [`Tween`]; every sampled offset is fed back into the engine as a
/// scroll event, so a button-driven scroll that runs into the clone region wraps exactly like a
/// browser-driven one would.
#[derive(Debug)]
pub struct Controller<K = ItemKey> {
    carousel: Carousel<K>,
    offset: f64,
    now_ms: u64,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
    mailbox: Rc<Cell<Mailbox>>,
}

impl<K: Clone> Controller<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(carousel: Carousel<K>) -> Self {
        let offset = carousel.scroll_offset();
        Self {
            carousel,
            offset,
            now_ms: 0,
            tween: None,
            duration_ms: DEFAULT_SMOOTH_SCROLL_MS,
            easing: Easing::default(),
            mailbox: Rc::new(Cell::new(Mailbox::default())),
        }
    }

    /// Sets the duration and easing of animated scrolls.
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<K> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<K> {
        &mut self.carousel
    }

    /// The offset the viewport should currently show.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Returns the owner handle (`scroll_left` / `scroll_right`).
    pub fn handle(&self) -> NavigationHandle {
        NavigationHandle::new(Rc::clone(&self.mailbox))
    }

    /// Applies a layout measurement. Returns the offset to write when the carousel was
    /// (re)positioned.
    pub fn on_measure(&mut self, measurement: Measurement) -> Option<f64> {
        let cmd = self.carousel.measure(measurement)?;
        self.apply(cmd);
        Some(self.offset)
    }

    /// Call this when the UI reports a scroll offset change (e.g. user drag/wheel).
    ///
    /// This cancels any active smooth scroll, which also ends its pending navigation. Returns
    /// the offset to write when the scroll crossed a wrap boundary.
    pub fn on_scroll(&mut self, offset: f64, now_ms: u64) -> Option<f64> {
        self.now_ms = now_ms;
        if self.tween.take().is_some() {
            // The user took over; the navigation scroll will not reach its target.
            self.carousel.settle_navigation();
        }
        self.offset = offset;
        let correction = self.carousel.on_scroll(offset, now_ms)?;
        self.apply_correction(correction);
        Some(self.offset)
    }

    /// Advances the controller.
    ///
    /// - Applies the latest owner-handle request, if any.
    /// - Lets an expired correction cooldown return to idle.
    /// - If a smooth scroll is active, samples it, runs wrap correction on the sample and
    ///   returns the offset to write. A scroll that finishes without wrapping ends its pending
    ///   navigation.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        self.now_ms = now_ms;
        self.drain_handle();
        self.carousel.tick(now_ms);

        let tween = self.tween?;
        let off = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        // Like a real viewport, an unchanged offset emits no scroll event.
        if off != self.offset {
            self.offset = off;
            if let Some(correction) = self.carousel.on_scroll(off, now_ms) {
                self.apply_correction(correction);
            }
        }
        if tween.is_done(now_ms) && self.tween.is_none() {
            self.carousel.settle_navigation();
        }
        Some(self.offset)
    }

    /// Routes a click on a rendered navigation button.
    pub fn press(&mut self, direction: Direction, now_ms: u64) {
        self.now_ms = now_ms;
        if let Some(cmd) = self.carousel.press(direction) {
            self.apply(cmd);
        }
    }

    pub fn on_touch_start(&mut self, x: f64) {
        self.carousel.on_touch_start(x);
    }

    pub fn on_touch_move(&mut self, x: f64) {
        self.carousel.on_touch_move(x);
    }

    /// Ends a touch gesture. Returns `true` when it was a swipe that started navigation.
    pub fn on_touch_end(&mut self, now_ms: u64) -> bool {
        self.now_ms = now_ms;
        let Some(cmd) = self.carousel.on_touch_end() else {
            return false;
        };
        self.apply(cmd);
        true
    }

    /// Tears the carousel down: stops animation, drops the cooldown and pending navigation,
    /// and detaches every owner handle so late calls are ignored.
    pub fn unmount(&mut self) {
        adebug!(offset = self.offset, "Controller::unmount");
        self.cancel_animation();
        self.carousel.reset_interaction();
        self.mailbox.set(Mailbox {
            attached: false,
            request: None,
        });
    }

    fn navigate(&mut self, direction: Direction) {
        let cmd = self.carousel.navigate(direction);
        self.apply(cmd);
    }

    fn drain_handle(&mut self) {
        let mut m = self.mailbox.get();
        let Some(direction) = m.request.take() else {
            return;
        };
        self.mailbox.set(m);
        atrace!(
            forward = matches!(direction, Direction::Forward),
            "Controller: handle request"
        );
        self.navigate(direction);
    }

    fn apply_correction(&mut self, correction: Correction) {
        for cmd in correction.commands() {
            self.apply(cmd);
        }
    }

    fn apply(&mut self, cmd: ScrollCommand) {
        match cmd {
            ScrollCommand::Jump(offset) => {
                // An instant write interrupts any smooth scroll in flight.
                self.cancel_animation();
                self.offset = offset;
            }
            ScrollCommand::Animate(to) => match &mut self.tween {
                // A new smooth scroll supersedes the previous one, continuing from where it is.
                Some(tween) => tween.retarget(self.now_ms, to, self.duration_ms),
                None => {
                    self.tween = Some(Tween::new(
                        self.offset,
                        to,
                        self.now_ms,
                        self.duration_ms,
                        self.easing,
                    ));
                }
            },
        }
    }
}

impl<K: Clone> Navigate for Controller<K> {
    fn scroll_left(&mut self) {
        self.navigate(Direction::Backward);
    }

    fn scroll_right(&mut self) {
        self.navigate(Direction::Forward);
    }
}

impl<K> Drop for Controller<K> {
    fn drop(&mut self) {
        self.mailbox.set(Mailbox {
            attached: false,
            request: None,
        });
    }
}
