use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A half-open index range `[start_index, end_index)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn indexes(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }
}

/// Absolute placement of a rendered item in the scroll axis.
///
/// Items always span the full cross-axis width of the container, so only the main axis is
/// described here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    /// Offset from the top of the scroll content (`index * item_height`).
    pub top: u64,
    pub height: u32,
}

impl ItemStyle {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

/// One rendered entry of a [`crate::Window`].
pub struct VirtualItem<'a, T> {
    pub index: usize,
    pub item: &'a T,
    pub style: ItemStyle,
}

impl<T> Clone for VirtualItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VirtualItem<'_, T> {}

impl<T: PartialEq> PartialEq for VirtualItem<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.style == other.style && self.item == other.item
    }
}

impl<T: fmt::Debug> fmt::Debug for VirtualItem<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualItem")
            .field("index", &self.index)
            .field("item", self.item)
            .field("style", &self.style)
            .finish()
    }
}
