/// The scroll container a [`crate::Controller`] is attached to.
///
/// Implement this for your UI's scroll widget (a DOM element handle, a TUI viewport, ...).
/// The controller reads scroll and size from it on events and writes back only for
/// programmatic scrolling.
pub trait ScrollSurface {
    /// Current scroll offset in the scroll axis.
    fn scroll_offset(&self) -> u64;

    /// Current viewport size in the scroll axis.
    fn viewport_size(&self) -> u32;

    /// Moves the surface to `offset`.
    fn scroll_to(&mut self, offset: u64);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn scroll_offset(&self) -> u64 {
        (**self).scroll_offset()
    }

    fn viewport_size(&self) -> u32 {
        (**self).viewport_size()
    }

    fn scroll_to(&mut self, offset: u64) {
        (**self).scroll_to(offset);
    }
}

/// An in-memory scroll surface for headless hosts and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySurface {
    pub offset: u64,
    pub viewport: u32,
}

impl MemorySurface {
    pub fn new(viewport: u32) -> Self {
        Self {
            offset: 0,
            viewport,
        }
    }
}

impl ScrollSurface for MemorySurface {
    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn viewport_size(&self) -> u32 {
        self.viewport
    }

    fn scroll_to(&mut self, offset: u64) {
        self.offset = offset;
    }
}
