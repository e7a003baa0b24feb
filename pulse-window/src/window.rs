use alloc::vec::Vec;
use core::cmp;

use crate::{ItemStyle, OptionsError, VirtualItem, WindowOptions, WindowRange};

/// The result of windowing a collection at a given scroll offset.
#[derive(Clone, Debug)]
pub struct Window<'a, T> {
    /// Items to render, in ascending index order.
    pub virtual_items: Vec<VirtualItem<'a, T>>,
    /// Always `len * item_height`, windowed or not, so native scrollbars stay accurate.
    pub total_height: u64,
    pub is_scrolling: bool,
    /// The rendered range (visible plus overscan, or everything when bypassed).
    pub range: WindowRange,
    /// The range intersecting the viewport, without overscan.
    pub visible: WindowRange,
    /// `true` when windowing was skipped because of `enabled` or the bypass threshold.
    pub bypassed: bool,
}

impl<T> Window<'_, T> {
    /// Offset of the first rendered item; hosts laying items out in flow use it as a spacer.
    pub fn offset_before(&self) -> u64 {
        self.virtual_items.first().map_or(0, |it| it.style.top)
    }

    /// Space left below the last rendered item.
    pub fn offset_after(&self) -> u64 {
        let end = self.virtual_items.last().map_or(0, |it| it.style.bottom());
        self.total_height.saturating_sub(end)
    }

    pub fn len(&self) -> usize {
        self.virtual_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.virtual_items.is_empty()
    }
}

/// Total scrollable height for `count` items.
pub fn total_height(count: usize, item_height: u32) -> u64 {
    (count as u64).saturating_mul(item_height as u64)
}

/// Largest meaningful scroll offset: content that fits in the container cannot scroll.
pub fn max_scroll_offset(count: usize, options: &WindowOptions) -> u64 {
    total_height(count, options.item_height).saturating_sub(options.container_height as u64)
}

/// Computes the range of indexes to render for `count` items at `scroll_top`.
///
/// This is the allocation-free core of [`compute_window`]. See it for the windowing rules.
pub fn compute_range(
    count: usize,
    scroll_top: u64,
    options: &WindowOptions,
) -> Result<WindowRange, OptionsError> {
    options.validate()?;
    if options.bypasses(count) {
        return Ok(WindowRange {
            start_index: 0,
            end_index: count,
        });
    }
    let visible = visible_range_unchecked(count, scroll_top, options);
    Ok(overscanned(visible, count, options.overscan))
}

/// Computes the range of indexes intersecting the viewport, ignoring overscan and bypass.
pub fn compute_visible_range(
    count: usize,
    scroll_top: u64,
    options: &WindowOptions,
) -> Result<WindowRange, OptionsError> {
    options.validate()?;
    Ok(visible_range_unchecked(count, scroll_top, options))
}

/// Windows `items` at `scroll_top`.
///
/// Rules:
/// - If `options.enabled` is false or `items.len() < options.bypass_threshold`, every item is
///   returned with sequential offsets.
/// - Otherwise the rendered range is
///   `[first_visible - overscan, first_visible + visible_count + overscan)`, clamped to
///   `[0, len)`, where `first_visible = floor(scroll_top / item_height)` and
///   `visible_count = ceil(container_height / item_height)`.
/// - Offsets past the end of the content are clamped to [`max_scroll_offset`] first.
///
/// The returned `is_scrolling` is always `false`: scrolling state is owned by
/// [`crate::WindowedList`], which fills it in.
///
/// Fails only on invalid options (zero heights).
pub fn compute_window<'a, T>(
    items: &'a [T],
    scroll_top: u64,
    options: &WindowOptions,
) -> Result<Window<'a, T>, OptionsError> {
    options.validate()?;
    Ok(window_unchecked(items, scroll_top, options, false))
}

/// Visits the windowed items without allocating.
pub fn for_each_virtual_item<'a, T>(
    items: &'a [T],
    scroll_top: u64,
    options: &WindowOptions,
    f: impl FnMut(VirtualItem<'a, T>),
) -> Result<(), OptionsError> {
    let range = compute_range(items.len(), scroll_top, options)?;
    visit_range(items, range, options.item_height, f);
    Ok(())
}

pub(crate) fn window_unchecked<'a, T>(
    items: &'a [T],
    scroll_top: u64,
    options: &WindowOptions,
    is_scrolling: bool,
) -> Window<'a, T> {
    let count = items.len();
    let bypassed = options.bypasses(count);
    let visible = visible_range_unchecked(count, scroll_top, options);
    let range = if bypassed {
        WindowRange {
            start_index: 0,
            end_index: count,
        }
    } else {
        overscanned(visible, count, options.overscan)
    };

    let mut virtual_items = Vec::with_capacity(range.len());
    visit_range(items, range, options.item_height, |it| virtual_items.push(it));

    wtrace!(
        count,
        scroll_top,
        start = range.start_index,
        end = range.end_index,
        bypassed,
        "window"
    );

    Window {
        virtual_items,
        total_height: total_height(count, options.item_height),
        is_scrolling,
        range,
        visible,
        bypassed,
    }
}

pub(crate) fn visible_range_unchecked(
    count: usize,
    scroll_top: u64,
    options: &WindowOptions,
) -> WindowRange {
    if count == 0 {
        return WindowRange::EMPTY;
    }
    let item_height = options.item_height.max(1) as u64;
    let scroll_top = cmp::min(scroll_top, max_scroll_offset(count, options));
    let first = cmp::min((scroll_top / item_height) as usize, count);
    let end = cmp::min(count, first.saturating_add(options.visible_count()));
    WindowRange {
        start_index: first,
        end_index: end,
    }
}

pub(crate) fn overscanned(visible: WindowRange, count: usize, overscan: usize) -> WindowRange {
    WindowRange {
        start_index: visible.start_index.saturating_sub(overscan),
        end_index: cmp::min(count, visible.end_index.saturating_add(overscan)),
    }
}

pub(crate) fn item_style(index: usize, item_height: u32) -> ItemStyle {
    ItemStyle {
        top: (index as u64).saturating_mul(item_height as u64),
        height: item_height,
    }
}

pub(crate) fn visit_range<'a, T>(
    items: &'a [T],
    range: WindowRange,
    item_height: u32,
    mut f: impl FnMut(VirtualItem<'a, T>),
) {
    debug_assert!(range.end_index <= items.len(), "window range out of bounds");
    let Some(slice) = items.get(range.indexes()) else {
        return;
    };
    let mut top = item_style(range.start_index, item_height).top;
    for (offset, item) in slice.iter().enumerate() {
        f(VirtualItem {
            index: range.start_index + offset,
            item,
            style: ItemStyle {
                top,
                height: item_height,
            },
        });
        top = top.saturating_add(item_height as u64);
    }
}
