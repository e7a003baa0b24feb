use core::cmp;

use crate::window::{
    item_style, overscanned, visible_range_unchecked, visit_range, window_unchecked,
};
use crate::{
    Align, FrameState, ItemStyle, OptionsError, ScrollDirection, ScrollState, Timer, TimerHandle,
    ViewportState, VirtualItem, Window, WindowOptions, WindowRange,
};

/// A headless windowing engine for uniform-height lists.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold the items; callers pass the current collection to every query, so a
///   reordered or resized collection is never windowed against stale state.
/// - Your adapter drives it by providing the scroll offset, container height, and time.
/// - Nothing is cached: changing `item_height` or `container_height` takes effect on the very
///   next query.
///
/// The `is_scrolling` flag is raised by every scroll event and cleared after
/// `is_scrolling_reset_delay_ms` without further events. Each event reschedules the single
/// quiet-period timer, so two competing timers can never be live.
///
/// For attaching a scroll surface and clock, see the `pulse-window-adapter` crate.
#[derive(Clone, Debug)]
pub struct WindowedList {
    options: WindowOptions,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,
    is_scrolling: bool,
    quiet_timer: Timer,
}

impl WindowedList {
    /// Creates a new engine. Fails fast on zero heights.
    pub fn new(options: WindowOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        wdebug!(
            item_height = options.item_height,
            container_height = options.container_height,
            overscan = options.overscan,
            enabled = options.enabled,
            "WindowedList::new"
        );
        Ok(Self {
            options,
            scroll_offset: 0,
            scroll_direction: None,
            is_scrolling: false,
            quiet_timer: Timer::new(),
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options. Invalid options are rejected and the previous ones kept.
    pub fn set_options(&mut self, options: WindowOptions) -> Result<(), OptionsError> {
        options.validate()?;
        self.options = options;
        wdebug!(
            item_height = options.item_height,
            container_height = options.container_height,
            overscan = options.overscan,
            enabled = options.enabled,
            "WindowedList::set_options"
        );
        Ok(())
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut WindowOptions),
    ) -> Result<(), OptionsError> {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_item_height(&mut self, item_height: u32) -> Result<(), OptionsError> {
        self.update_options(|o| o.item_height = item_height)
    }

    pub fn set_container_height(&mut self, container_height: u32) -> Result<(), OptionsError> {
        self.update_options(|o| o.container_height = container_height)
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    pub fn set_bypass_threshold(&mut self, bypass_threshold: usize) {
        self.options.bypass_threshold = bypass_threshold;
    }

    /// Takes effect on the next scroll event; a pending quiet period keeps its deadline.
    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.options.is_scrolling_reset_delay_ms = delay_ms;
    }

    pub fn item_height(&self) -> u32 {
        self.options.item_height
    }

    pub fn container_height(&self) -> u32 {
        self.options.container_height
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
    }

    /// Sets the scroll offset clamped to the scrollable extent of `count` items.
    pub fn set_scroll_offset_clamped(&mut self, count: usize, offset: u64) {
        let clamped = self.clamp_scroll_offset(count, offset);
        self.set_scroll_offset(clamped);
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Deadline of the pending quiet period, for hosts that arm a real timer.
    pub fn scrolling_deadline_ms(&self) -> Option<u64> {
        self.quiet_timer.deadline_ms()
    }

    /// Marks the list as scrolling and restarts the quiet-period timer.
    ///
    /// The returned handle supersedes any previously returned one.
    pub fn notify_scroll_event(&mut self, now_ms: u64) -> TimerHandle {
        self.is_scrolling = true;
        self.quiet_timer.schedule(now_ms, self.options.is_scrolling_reset_delay_ms)
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag), and marks the list
    /// as scrolling.
    pub fn apply_scroll_event(&mut self, offset: u64, now_ms: u64) -> TimerHandle {
        wtrace!(offset, now_ms, "apply_scroll_event");
        self.set_scroll_offset(offset);
        self.notify_scroll_event(now_ms)
    }

    /// Clears `is_scrolling` once the quiet period has elapsed.
    ///
    /// Returns `true` when the flag was cleared by this call.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        if !self.quiet_timer.poll(now_ms) {
            return false;
        }
        self.stop_scrolling();
        true
    }

    /// Clears `is_scrolling` on behalf of a host timer callback.
    ///
    /// Handles superseded by a later scroll event are ignored.
    pub fn finish_scrolling(&mut self, handle: TimerHandle) -> bool {
        if !self.quiet_timer.fire(handle) {
            return false;
        }
        self.stop_scrolling();
        true
    }

    /// Cancels the quiet-period timer and clears `is_scrolling`.
    ///
    /// Call this on teardown so no host timer ever targets a disposed consumer.
    pub fn cancel_scrolling(&mut self) {
        self.quiet_timer.cancel();
        self.stop_scrolling();
    }

    fn stop_scrolling(&mut self) {
        wtrace!(offset = self.scroll_offset, "scrolling stopped");
        self.is_scrolling = false;
        self.scroll_direction = None;
    }

    pub fn total_height(&self, count: usize) -> u64 {
        crate::total_height(count, self.options.item_height)
    }

    pub fn max_scroll_offset(&self, count: usize) -> u64 {
        crate::max_scroll_offset(count, &self.options)
    }

    pub fn clamp_scroll_offset(&self, count: usize, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset(count))
    }

    /// The rendered range for `count` items at the current scroll offset.
    pub fn range(&self, count: usize) -> WindowRange {
        if self.options.bypasses(count) {
            return WindowRange {
                start_index: 0,
                end_index: count,
            };
        }
        overscanned(self.visible_range(count), count, self.options.overscan)
    }

    /// The range intersecting the viewport, without overscan.
    pub fn visible_range(&self, count: usize) -> WindowRange {
        visible_range_unchecked(count, self.scroll_offset, &self.options)
    }

    /// Windows `items` at the current scroll offset, with `is_scrolling` filled in.
    pub fn window<'a, T>(&self, items: &'a [T]) -> Window<'a, T> {
        window_unchecked(items, self.scroll_offset, &self.options, self.is_scrolling)
    }

    pub fn for_each_virtual_item<'a, T>(
        &self,
        items: &'a [T],
        f: impl FnMut(VirtualItem<'a, T>),
    ) {
        visit_range(items, self.range(items.len()), self.options.item_height, f);
    }

    pub fn item_style(&self, count: usize, index: usize) -> Option<ItemStyle> {
        (index < count).then(|| item_style(index, self.options.item_height))
    }

    /// Index of the item covering `offset`, clamped to the last item.
    pub fn index_at_offset(&self, count: usize, offset: u64) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let index = offset / self.options.item_height as u64;
        Some(cmp::min(index, (count - 1) as u64) as usize)
    }

    /// Computes the (clamped) scroll offset that brings `index` into view.
    pub fn scroll_to_index_offset(&self, count: usize, index: usize, align: Align) -> u64 {
        if count == 0 {
            return 0;
        }
        let item = item_style(index.min(count - 1), self.options.item_height);
        let view = self.options.container_height as u64;

        let target = match align {
            Align::Start => item.top,
            Align::End => item.bottom().saturating_sub(view),
            Align::Center => {
                let center = item.top.saturating_add(item.height as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if item.top >= cur && item.bottom() <= cur_end {
                    cur
                } else if item.top < cur {
                    item.top
                } else {
                    item.bottom().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(count, target)
    }

    /// Programmatically scrolls to an index. Does not mark the list as scrolling.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, count: usize, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(count, index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            container_height: self.options.container_height,
            item_height: self.options.item_height,
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    pub fn restore_viewport_state(
        &mut self,
        viewport: ViewportState,
    ) -> Result<(), OptionsError> {
        self.update_options(|o| {
            o.container_height = viewport.container_height;
            o.item_height = viewport.item_height;
        })
    }

    /// Restores scroll state from a snapshot.
    ///
    /// When `scroll.is_scrolling` is `true`, the quiet period restarts as if a scroll event
    /// happened at `now_ms`.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState, now_ms: u64) {
        if scroll.is_scrolling {
            self.apply_scroll_event(scroll.offset, now_ms);
            return;
        }
        self.set_scroll_offset(scroll.offset);
        self.cancel_scrolling();
    }

    pub fn restore_frame_state(
        &mut self,
        frame: FrameState,
        now_ms: u64,
    ) -> Result<(), OptionsError> {
        self.restore_viewport_state(frame.viewport)?;
        self.restore_scroll_state(frame.scroll, now_ms);
        Ok(())
    }
}
