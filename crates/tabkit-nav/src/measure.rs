#![forbid(unsafe_code)]

//! Host measurement primitives.

use tabkit_core::geometry::{Rect, Sides};
use tabkit_core::id::PaneId;

/// The host's geometry oracle.
///
/// Wraps whatever the host uses to read boxes ("bounding box of element",
/// "read computed style"). The engine calls these as rarely as it can: a
/// full sweep only on item-set or axis changes, a single item lookup per
/// activation. Methods take `&mut self` so test doubles can count calls.
pub trait Measure {
    /// Bounding box of one nav item, in the same coordinate space as the
    /// container. `None` when the item is not currently rendered.
    fn item_rect(&mut self, id: &PaneId) -> Option<Rect>;

    /// Bounding box of the nav strip's visible container.
    fn container_rect(&mut self) -> Rect;

    /// Computed padding of the nav strip. Axis-start padding shifts the
    /// coordinate origin of items but must not shift the indicator.
    fn padding(&mut self) -> Sides;
}
