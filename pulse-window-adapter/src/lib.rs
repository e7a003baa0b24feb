//! Adapter utilities for the `pulse-window` crate.
//!
//! The `pulse-window` crate is UI-agnostic and focuses on the windowing math and timer state.
//! This crate provides the small, framework-neutral pieces a list view needs to hook it up:
//!
//! - A [`ScrollSurface`] trait for the scroll container the list is attached to
//! - A [`Controller`] that reads scroll/resize events from that surface and owns teardown
//! - [`Clock`] sources for hosts that do not already track frame time
//!
//! This crate is intentionally framework-agnostic (no DOM or widget-toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod clock;
mod controller;
mod error;
mod surface;


#[cfg(feature = "std")]
pub use clock::InstantClock;
pub use clock::{Clock, ManualClock};
pub use controller::Controller;
pub use error::AdapterError;
pub use surface::{MemorySurface, ScrollSurface};
