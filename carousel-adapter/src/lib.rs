//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the wrap-around math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that owns the viewport offset and applies the engine's scroll commands
//! - Tween-based smooth scrolling (adapter-driven, ticked from your frame loop)
//! - A [`NavigationHandle`] giving the carousel's owner `scroll_left` / `scroll_right`
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod handle;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use handle::{Navigate, NavigationHandle};
pub use tween::{DEFAULT_SMOOTH_SCROLL_MS, Easing, Tween};
