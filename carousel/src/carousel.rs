use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::clones::build_slots;
use crate::correction::CorrectionMachine;
use crate::geometry::{Geometry, Measurement};
use crate::gesture::TouchGesture;
use crate::key::CloneIdGen;
use crate::types::NAV_BUTTONS;
use crate::{
    CarouselOptions, Correction, Direction, FrameState, ItemKey, NavButton, ScrollCommand,
    ScrollState, Slot, ViewportStyle,
};

/// A headless infinite-loop carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or read any clock.
/// - Your adapter drives it with layout measurements, scroll offsets, touch coordinates and a
///   `now_ms` timestamp.
/// - It answers with [`ScrollCommand`]s / [`Correction`]s the adapter applies to the real
///   viewport.
///
/// The rendered strip ([`Carousel::slots`]) is the source items followed by clones of the
/// leading items. When the viewport scrolls into the clones (or back to offset zero) the engine
/// silently relocates the offset so the loop never ends.
///
/// For tween-driven smooth scrolling and an owner handle, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = ItemKey> {
    options: CarouselOptions<K>,
    measurement: Measurement,
    geometry: Geometry,
    scroll_offset: f64,
    correction: CorrectionMachine,
    gesture: TouchGesture,

    slots: Vec<Slot<K>>,
    clone_ids: CloneIdGen,
    // (content_width, centering_offset) of the last initial positioning.
    positioned_for: Option<(f64, f64)>,
}

impl<K: Clone> Carousel<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        cdebug!(
            count = options.count,
            render_navigation = options.render_navigation,
            scrollable = options.scrollable,
            "Carousel::new"
        );
        let geometry = Geometry::compute(
            Measurement::default(),
            options.count,
            options.min_illusion_count,
        );
        let mut c = Self {
            options,
            measurement: Measurement::default(),
            geometry,
            scroll_offset: 0.0,
            correction: CorrectionMachine::new(),
            gesture: TouchGesture::new(),
            slots: Vec::new(),
            clone_ids: CloneIdGen::new(),
            positioned_for: None,
        };
        c.rebuild_slots();
        c
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    /// Replaces the options, regenerating clones only when the item set or the clone count
    /// actually changed.
    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        let prev_count = self.options.count;
        let get_item_key_unchanged = Arc::ptr_eq(&self.options.get_item_key, &options.get_item_key);
        self.options = options;
        ctrace!(
            count = self.options.count,
            render_navigation = self.options.render_navigation,
            "Carousel::set_options"
        );

        let illusion_changed = self.recompute_geometry();
        if illusion_changed || self.options.count != prev_count || !get_item_key_unchanged {
            self.rebuild_slots();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.update_options(|o| o.count = count);
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Applies a fresh layout measurement.
    ///
    /// Call this on mount and whenever the host observes a resize or content change. Returns a
    /// jump when the carousel needs (re)positioning: once content is measured the viewport
    /// starts at `content_width - centering_offset`, i.e. mid-loop with the first card centred,
    /// so both wraps are reachable without a full traverse.
    pub fn measure(&mut self, measurement: Measurement) -> Option<ScrollCommand> {
        if self.measurement == measurement {
            return None;
        }
        self.measurement = measurement;
        if self.recompute_geometry() {
            self.rebuild_slots();
        }
        self.position_initially()
    }

    /// Returns `true` when clones are rendered and wrap correction is active.
    pub fn is_looping(&self) -> bool {
        self.slots.len() > self.options.count
    }

    /// The rendered strip: source items followed by the illusion clones.
    pub fn slots(&self) -> &[Slot<K>] {
        &self.slots
    }

    /// Left edge of the slot at `index` inside the strip.
    pub fn slot_start(&self, index: usize) -> Option<f64> {
        if index >= self.slots.len() {
            return None;
        }
        Some(index as f64 * self.geometry.stride())
    }

    pub fn render_navigation(&self) -> bool {
        self.options.render_navigation
    }

    /// The back/forward affordances to render; empty when navigation rendering is off.
    pub fn navigation_buttons(&self) -> &'static [NavButton] {
        if self.options.render_navigation {
            &NAV_BUTTONS
        } else {
            &[]
        }
    }

    pub fn viewport_style(&self) -> ViewportStyle {
        if self.options.scrollable {
            ViewportStyle::Scrollable
        } else {
            ViewportStyle::Hidden
        }
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn navigation_pending(&self) -> bool {
        self.correction.navigation_pending()
    }

    /// Marks the navigation-driven scroll as finished.
    ///
    /// Call this when the animated scroll settles without wrapping, or when the user interrupts
    /// it. Later organic scrolls then get organic corrections.
    pub fn settle_navigation(&mut self) {
        if self.correction.navigation_pending() {
            ctrace!(offset = self.scroll_offset, "Carousel::settle_navigation");
        }
        self.correction.disarm_navigation();
    }

    pub fn is_cooling_down(&self, now_ms: u64) -> bool {
        self.correction.is_cooling_down(now_ms)
    }

    /// Handles a scroll event from the viewport.
    ///
    /// Returns the wrap correction to apply, if the offset crossed a boundary outside the
    /// cooldown window. The engine assumes the correction's jump is applied and tracks the
    /// offset accordingly.
    pub fn on_scroll(&mut self, offset: f64, now_ms: u64) -> Option<Correction> {
        ctrace!(offset, now_ms, "Carousel::on_scroll");
        self.scroll_offset = offset;
        if !self.is_looping() || !self.geometry.is_measured() {
            return None;
        }
        let correction =
            self.correction
                .evaluate(offset, &self.geometry, now_ms, self.options.cooldown_ms)?;
        self.scroll_offset = correction.jump_to;
        Some(correction)
    }

    /// Lets an expired cooldown return to idle. Returns `true` if it did.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.correction.expire(now_ms)
    }

    /// Starts navigation by one card in `direction`.
    ///
    /// Arms the programmatic-navigation flag and returns an animated scroll of one
    /// `item_width + gap` from the current offset. Calling again before the previous scroll
    /// settled re-arms the flag and restarts from wherever the viewport is: the last call wins.
    pub fn navigate(&mut self, direction: Direction) -> ScrollCommand {
        self.correction.arm_navigation();
        let target = self
            .geometry
            .clamp_scroll_offset(self.scroll_offset + direction.sign() * self.geometry.stride());
        cdebug!(
            forward = matches!(direction, Direction::Forward),
            from = self.scroll_offset,
            to = target,
            "Carousel::navigate"
        );
        ScrollCommand::Animate(target)
    }

    pub fn scroll_left(&mut self) -> ScrollCommand {
        self.navigate(Direction::Backward)
    }

    pub fn scroll_right(&mut self) -> ScrollCommand {
        self.navigate(Direction::Forward)
    }

    /// Routes a click on a navigation button. Ignored when navigation is not rendered.
    pub fn press(&mut self, direction: Direction) -> Option<ScrollCommand> {
        if !self.options.render_navigation {
            cwarn!("Carousel::press: navigation buttons are not rendered");
            return None;
        }
        Some(self.navigate(direction))
    }

    pub fn on_touch_start(&mut self, x: f64) {
        ctrace!(x, "Carousel::on_touch_start");
        self.gesture.start(x);
    }

    pub fn on_touch_move(&mut self, x: f64) {
        self.gesture.update(x);
    }

    /// Ends the current touch gesture; a swipe past the threshold navigates one card.
    pub fn on_touch_end(&mut self) -> Option<ScrollCommand> {
        let direction = self.gesture.end(self.options.swipe_threshold)?;
        Some(self.navigate(direction))
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            navigation_pending: self.correction.navigation_pending(),
            phase: self.correction.phase(),
        }
    }

    /// Returns a combined snapshot of geometry + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            geometry: self.geometry,
            scroll: self.scroll_state(),
        }
    }

    /// Restores scroll state from a previously captured snapshot.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState) {
        self.scroll_offset = scroll.offset;
        self.correction.restore(scroll.phase, scroll.navigation_pending);
    }

    /// Drops transient interaction state: the cooldown, the navigation flag and any
    /// half-finished touch gesture.
    pub fn reset_interaction(&mut self) {
        self.correction.reset();
        self.gesture = TouchGesture::new();
    }

    // Returns whether the clone count changed.
    fn recompute_geometry(&mut self) -> bool {
        let prev = self.geometry.illusion_count;
        self.geometry = Geometry::compute(
            self.measurement,
            self.options.count,
            self.options.min_illusion_count,
        );
        cdebug!(
            viewport_width = self.geometry.viewport_width,
            item_width = self.geometry.item_width,
            gap = self.geometry.gap,
            illusion_count = self.geometry.illusion_count,
            centering_offset = self.geometry.centering_offset,
            "Carousel: geometry"
        );
        prev != self.geometry.illusion_count
    }

    fn rebuild_slots(&mut self) {
        let get_item_key = Arc::clone(&self.options.get_item_key);
        let clone_ids = &mut self.clone_ids;
        self.slots = build_slots(
            self.options.count,
            self.geometry.illusion_count,
            |i| get_item_key(i),
            || clone_ids.next_id(),
        );
        cdebug!(
            count = self.options.count,
            illusion_count = self.geometry.illusion_count,
            slots = self.slots.len(),
            "Carousel: slots rebuilt"
        );
    }

    fn position_initially(&mut self) -> Option<ScrollCommand> {
        if !self.geometry.is_measured() {
            return None;
        }
        let key = (self.geometry.content_width, self.geometry.centering_offset);
        if self.positioned_for == Some(key) {
            return None;
        }
        self.positioned_for = Some(key);
        let target = self.geometry.initial_offset();
        self.scroll_offset = target;
        cdebug!(target, "Carousel: initial position");
        Some(ScrollCommand::Jump(target))
    }
}
