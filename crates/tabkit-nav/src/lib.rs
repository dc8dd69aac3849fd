#![forbid(unsafe_code)]

//! Nav-strip layout engine.
//!
//! Positions the animated active-indicator and computes the scroll offset
//! that keeps the active item inside the visible window, for strips laid
//! out horizontally or vertically. Geometry comes from the host through
//! the [`Measure`] trait; the engine caches the last-measured box per item
//! so activating one pane never forces a sweep over the whole set.

pub mod measure;

pub use measure::Measure;

use ahash::AHashMap;
use tabkit_core::geometry::{Axis, Rect, Sides, TabPosition};
use tabkit_core::id::PaneId;

/// Derived placement of the active indicator along the tab axis.
///
/// `translate` is relative to the nav strip's own coordinate frame: the
/// container origin and the axis-start padding are already subtracted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct IndicatorTransform {
    /// Offset along the axis, in pixels.
    pub translate: f64,
    /// Extent of the active item along the axis, in pixels.
    pub size: f64,
    /// The axis the offset applies to (X for horizontal, Y for vertical).
    pub axis: Axis,
}

/// Layout state for one nav strip.
#[derive(Debug, Clone, Default)]
pub struct NavLayout {
    rects: AHashMap<PaneId, Rect>,
    order: Vec<PaneId>,
    container: Rect,
    padding: Sides,
    position: TabPosition,
    stretch: bool,
    scroll_offset: f64,
}

impl NavLayout {
    /// Create an engine for a strip at the given position.
    #[must_use]
    pub fn new(position: TabPosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Enable stretch sizing. Only meaningful on horizontal strips; see
    /// [`NavLayout::stretch_extent`].
    #[must_use]
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Current tab position.
    #[must_use]
    pub const fn position(&self) -> TabPosition {
        self.position
    }

    /// Move the strip to a new position. Cached geometry is stale after an
    /// axis change; callers follow up with [`NavLayout::refresh_all`].
    pub fn set_position(&mut self, position: TabPosition) {
        if self.position.axis() != position.axis() {
            self.scroll_offset = 0.0;
        }
        self.position = position;
    }

    /// Update the stretch option in place.
    pub fn set_stretch(&mut self, stretch: bool) {
        self.stretch = stretch;
    }

    /// Layout axis derived from the current position.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.position.axis()
    }

    /// Current scroll offset along the axis.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Re-measure the container and every listed item.
    ///
    /// Called when the item set changes shape: panes added or removed, the
    /// strip resized, or the position moved to the other axis. Items the
    /// host cannot measure right now are dropped from the cache.
    pub fn refresh_all<M: Measure>(&mut self, measure: &mut M, ids: &[PaneId]) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("nav.refresh", items = ids.len()).entered();

        self.container = measure.container_rect();
        self.padding = measure.padding();
        self.rects.clear();
        self.order.clear();
        for id in ids {
            if let Some(rect) = measure.item_rect(id) {
                self.rects.insert(id.clone(), rect);
            }
            self.order.push(id.clone());
        }
        self.clamp_scroll();
    }

    /// Re-measure only the activated item plus the container, then return
    /// the indicator transform and fold the item into view.
    ///
    /// This is the per-activation path; it stays O(1) in the item count.
    pub fn activate<M: Measure>(
        &mut self,
        measure: &mut M,
        id: &PaneId,
    ) -> Option<IndicatorTransform> {
        self.container = measure.container_rect();
        self.padding = measure.padding();
        let rect = measure.item_rect(id)?;
        self.rects.insert(id.clone(), rect);
        self.scroll_offset = self.scroll_offset_for(id);
        let transform = self.indicator_for(id);
        #[cfg(feature = "tracing")]
        if let Some(t) = &transform {
            tracing::debug!(
                message = "nav.activate",
                id = %id,
                translate = t.translate,
                size = t.size,
            );
        }
        transform
    }

    /// Indicator transform for an item from cached geometry.
    #[must_use]
    pub fn indicator_for(&self, id: &PaneId) -> Option<IndicatorTransform> {
        let axis = self.axis();
        let rect = self.rects.get(id)?;
        let translate =
            rect.leading(axis) - self.container.leading(axis) - self.padding.start(axis);
        Some(IndicatorTransform {
            translate,
            size: rect.extent(axis),
            axis,
        })
    }

    /// The scroll offset that brings an item's leading and trailing edges
    /// inside the visible window, moving by the minimum amount.
    ///
    /// Already-visible items leave the offset unchanged.
    #[must_use]
    pub fn scroll_offset_for(&self, id: &PaneId) -> f64 {
        let axis = self.axis();
        let Some(rect) = self.rects.get(id) else {
            return self.scroll_offset;
        };
        let viewport = self.container.extent(axis);
        if viewport <= 0.0 {
            return self.scroll_offset;
        }
        // Position within the scrolled content: measured boxes already
        // reflect the current offset, so add it back.
        let leading = rect.leading(axis) - self.container.leading(axis) + self.scroll_offset;
        let trailing = leading + rect.extent(axis);

        let mut offset = self.scroll_offset;
        if trailing > offset + viewport {
            offset = trailing - viewport;
        }
        if leading < offset {
            offset = leading;
        }
        offset.max(0.0)
    }

    /// Whether the cumulative item extent exceeds the visible window.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.total_extent() > self.container.extent(self.axis())
    }

    /// Sum of cached item extents along the axis.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        let axis = self.axis();
        self.order
            .iter()
            .filter_map(|id| self.rects.get(id))
            .map(|rect| rect.extent(axis))
            .sum()
    }

    /// Equal per-item extent under stretch sizing.
    ///
    /// Stretch only applies to horizontal strips; vertical positions get
    /// `None` silently rather than an error.
    #[must_use]
    pub fn stretch_extent(&self, item_count: usize) -> Option<f64> {
        if !self.stretch || item_count == 0 || self.axis() != Axis::Horizontal {
            return None;
        }
        Some(self.container.extent(Axis::Horizontal) / item_count as f64)
    }

    /// Cached box for an item, if it has been measured.
    #[must_use]
    pub fn item_rect(&self, id: &PaneId) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// Number of items with cached geometry.
    #[must_use]
    pub fn measured_len(&self) -> usize {
        self.rects.len()
    }

    fn clamp_scroll(&mut self) {
        let max = (self.total_extent() - self.container.extent(self.axis())).max(0.0);
        self.scroll_offset = self.scroll_offset.clamp(0.0, max);
    }
}
