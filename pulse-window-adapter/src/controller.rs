use pulse_window::{Align, OptionsError, Window, WindowOptions, WindowedList};

use crate::{AdapterError, Clock, ScrollSurface};

/// A framework-neutral controller that binds a `pulse_window::WindowedList` to a scroll
/// surface.
///
/// This type does not render anything. Adapters drive it by calling:
/// - `attach` once the scroll container exists, and `detach` when it goes away
/// - `on_scroll` / `on_resize` when the container reports events
/// - `tick(now_ms)` each frame/timer tick (for `is_scrolling` debouncing)
///
/// Detaching or dropping the controller releases the pending quiet-period timer, so no
/// late timer callback can reach a torn-down view.
#[derive(Clone, Debug)]
pub struct Controller<S> {
    list: WindowedList,
    surface: Option<S>,
}

impl<S: ScrollSurface> Controller<S> {
    pub fn new(options: WindowOptions) -> Result<Self, OptionsError> {
        Ok(Self {
            list: WindowedList::new(options)?,
            surface: None,
        })
    }

    pub fn from_list(list: WindowedList) -> Self {
        Self {
            list,
            surface: None,
        }
    }

    pub fn list(&self) -> &WindowedList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut WindowedList {
        &mut self.list
    }

    pub fn into_list(self) -> WindowedList {
        self.list
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Binds a scroll surface and adopts its current offset and viewport size.
    ///
    /// Returns the previously attached surface, if any. A surface reporting a zero viewport
    /// (not laid out yet) keeps the configured container height until the next `on_resize`.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        let viewport = surface.viewport_size();
        if viewport > 0 {
            // Non-zero viewport cannot fail validation; item height is already valid.
            let _ = self.list.set_container_height(viewport);
        }
        self.list.set_scroll_offset(surface.scroll_offset());
        adebug!(viewport, offset = surface.scroll_offset(), "Controller::attach");
        self.surface.replace(surface)
    }

    /// Unbinds the surface and cancels the pending quiet-period timer.
    pub fn detach(&mut self) -> Option<S> {
        self.list.cancel_scrolling();
        let surface = self.surface.take();
        adebug!(had_surface = surface.is_some(), "Controller::detach");
        surface
    }

    /// Call this when the attached surface reports a scroll event.
    pub fn on_scroll(&mut self, now_ms: u64) -> Result<(), AdapterError> {
        let offset = self
            .surface
            .as_ref()
            .ok_or(AdapterError::Detached)?
            .scroll_offset();
        self.on_scroll_offset(offset, now_ms);
        Ok(())
    }

    /// Call this when the UI reports a scroll offset change directly (e.g. wheel/drag).
    pub fn on_scroll_offset(&mut self, offset: u64, now_ms: u64) {
        atrace!(offset, now_ms, "Controller::on_scroll_offset");
        self.list.apply_scroll_event(offset, now_ms);
    }

    /// Call this when the attached surface was resized.
    pub fn on_resize(&mut self) -> Result<(), AdapterError> {
        let viewport = self
            .surface
            .as_ref()
            .ok_or(AdapterError::Detached)?
            .viewport_size();
        self.on_viewport_size(viewport)?;
        Ok(())
    }

    /// Applies a new container height. A zero height is rejected.
    pub fn on_viewport_size(&mut self, viewport: u32) -> Result<(), OptionsError> {
        self.list.set_container_height(viewport)
    }

    /// Advances time. Returns `true` when `is_scrolling` was cleared by this tick.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.list.update_scrolling(now_ms)
    }

    pub fn tick_with(&mut self, clock: &impl Clock) -> bool {
        self.tick(clock.now_ms())
    }

    pub fn is_scrolling(&self) -> bool {
        self.list.is_scrolling()
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> Window<'a, T> {
        self.list.window(items)
    }

    /// Scrolls `count` items so that `index` is in view, and moves the surface there.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(
        &mut self,
        count: usize,
        index: usize,
        align: Align,
    ) -> Result<u64, AdapterError> {
        let offset = self.list.scroll_to_index_offset(count, index, align);
        self.scroll_to_offset(count, offset)
    }

    /// Moves the list and the surface to `offset`, clamped to the scrollable extent.
    ///
    /// Programmatic scrolls do not raise `is_scrolling`.
    pub fn scroll_to_offset(&mut self, count: usize, offset: u64) -> Result<u64, AdapterError> {
        let surface = self.surface.as_mut().ok_or(AdapterError::Detached)?;
        let offset = self.list.clamp_scroll_offset(count, offset);
        surface.scroll_to(offset);
        self.list.set_scroll_offset(offset);
        Ok(offset)
    }
}
