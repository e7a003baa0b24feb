use crate::OptionsError;

/// Lists shorter than this are rendered in full; windowing only pays for itself above it.
pub const DEFAULT_BYPASS_THRESHOLD: usize = 20;

pub const DEFAULT_OVERSCAN: usize = 3;

/// Quiet period after the last scroll event before `is_scrolling` resets.
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// Configuration for [`crate::compute_window`] and [`crate::WindowedList`].
///
/// All heights live in the host's pixel space. Items share a single uniform `item_height`.
///
/// Options are plain data: build them with [`WindowOptions::new`] plus the `with_*` methods,
/// then hand them to the engine, which validates them on every entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    pub item_height: u32,
    pub container_height: u32,
    /// Extra items rendered beyond the viewport in both directions.
    pub overscan: usize,
    /// When disabled, every item is rendered (windowing is bypassed, not turned off).
    pub enabled: bool,
    /// Collections with fewer items than this are rendered in full.
    pub bypass_threshold: usize,
    /// Debounced duration for resetting `is_scrolling` after the last scroll event.
    pub is_scrolling_reset_delay_ms: u64,
}

/// Heights default to zero, i.e. unset: a default value is rejected by
/// [`WindowOptions::validate`] until both heights are provided.
impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            item_height: 0,
            container_height: 0,
            overscan: DEFAULT_OVERSCAN,
            enabled: true,
            bypass_threshold: DEFAULT_BYPASS_THRESHOLD,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
        }
    }
}

impl WindowOptions {
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            ..Self::default()
        }
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_bypass_threshold(mut self, bypass_threshold: usize) -> Self {
        self.bypass_threshold = bypass_threshold;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.item_height == 0 {
            wwarn!("WindowOptions: rejected zero item_height");
            return Err(OptionsError::ZeroItemHeight);
        }
        if self.container_height == 0 {
            wwarn!("WindowOptions: rejected zero container_height");
            return Err(OptionsError::ZeroContainerHeight);
        }
        Ok(())
    }

    /// Returns `true` when a collection of `count` items should be rendered in full.
    pub fn bypasses(&self, count: usize) -> bool {
        !self.enabled || count < self.bypass_threshold
    }

    /// `ceil(container_height / item_height)`; assumes validated options.
    pub fn visible_count(&self) -> usize {
        debug_assert!(self.item_height > 0, "visible_count: zero item_height");
        self.container_height.div_ceil(self.item_height.max(1)) as usize
    }
}
