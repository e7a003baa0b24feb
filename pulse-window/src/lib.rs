//! Headless list windowing for large dashboard lists.
//!
//! For scroll-surface attachment and clocks, see the `pulse-window-adapter` crate.
//!
//! This crate computes which slice of a uniform-height list must be rendered for a given scroll
//! offset and viewport, where each rendered item goes, and how tall the full scroll content is.
//! It also provides the small timer primitives a list view needs around that: a debounced
//! `is_scrolling` flag plus general [`Debounced`] and [`Throttled`] values.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the item collection (passed fresh to every query)
//! - container height and scroll offset
//! - the current time, either from a frame tick or from real timer callbacks
//!
//! ```rust
//! use pulse_window::{WindowOptions, compute_window};
//!
//! let deals: Vec<u32> = (0..1000).collect();
//! let options = WindowOptions::new(50, 400).with_overscan(0);
//! let window = compute_window(&deals, 0, &options).unwrap();
//!
//! assert_eq!(window.total_height, 50_000);
//! assert_eq!(window.range.indexes(), 0..8);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod debounce;
mod error;
mod options;
mod state;
mod throttle;
mod timer;
mod types;
mod window;
mod windowed_list;


pub use debounce::Debounced;
pub use error::OptionsError;
pub use options::{
    DEFAULT_BYPASS_THRESHOLD, DEFAULT_IS_SCROLLING_RESET_DELAY_MS, DEFAULT_OVERSCAN,
    WindowOptions,
};
pub use state::{FrameState, ScrollState, ViewportState};
pub use throttle::{ThrottleUpdate, Throttled};
pub use timer::{Timer, TimerHandle};
pub use types::{Align, ItemStyle, ScrollDirection, VirtualItem, WindowRange};
pub use window::{
    Window, compute_range, compute_visible_range, compute_window, for_each_virtual_item,
    max_scroll_offset, total_height,
};
pub use windowed_list::WindowedList;
