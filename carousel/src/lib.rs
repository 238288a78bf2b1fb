//! A headless infinite-loop carousel engine.
//!
//! For adapter-level utilities (smooth-scroll tweens, owner handles), see the
//! `carousel-adapter` crate.
//!
//! The engine renders a horizontal strip of cards followed by clones of the leading cards, and
//! keeps the illusion of an endless loop by silently relocating the scroll offset whenever the
//! viewport enters the clone region or reaches offset zero. Scrolls started by navigation
//! (buttons, handle calls, swipes) and organic scrolls (drag, momentum) are corrected
//! differently so the wrap never shows.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - layout measurements (viewport width, first item rect, gap, scroll width)
//! - scroll events with the current offset
//! - touch coordinates and button clicks
//! - a millisecond clock value with each time-sensitive call
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod clones;
mod correction;
mod geometry;
mod gesture;
mod key;
mod options;
mod state;
mod types;


pub use carousel::Carousel;
pub use clones::{build_slots, with_clones};
pub use correction::{
    CorrectionMachine, CorrectionPhase, DEFAULT_COOLDOWN_MS, ORGANIC_FORWARD_RESET,
};
pub use geometry::{Geometry, MIN_ILLUSION_COUNT, Measurement, NodeRect};
pub use gesture::{DEFAULT_SWIPE_THRESHOLD, TouchGesture};
pub use key::{CloneId, CloneIdGen, SlotKey};
pub use options::CarouselOptions;
pub use state::{FrameState, ScrollState};
pub use types::{
    Boundary, Correction, Direction, ItemKey, NavButton, ScrollCommand, Slot, ViewportStyle,
};
