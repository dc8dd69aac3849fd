#![forbid(unsafe_code)]

//! Host-facing event surface and input plumbing types.

use crate::geometry::{Axis, TabPosition};
use crate::id::PaneId;

/// What triggered an activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOrigin {
    /// Pointer press on a nav item.
    Click,
    /// Arrow-key navigation.
    Keyboard,
    /// Host-driven activation.
    Programmatic,
}

/// Action carried by the combined `edit` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// The add affordance was pressed.
    Add,
    /// A pane's close affordance was pressed.
    Remove,
}

/// Events emitted to the host. Drained from the facade after each input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// A click-origin activation committed. Carries the target pane id.
    TabClick { id: PaneId },
    /// An activation committed, regardless of origin.
    TabChange { id: PaneId },
    /// The "new tab" affordance was pressed. The host appends the pane and
    /// picks the new active id itself.
    TabAdd,
    /// A pane's close affordance was pressed. The host applies the removal.
    TabRemove { id: PaneId },
    /// Combined add/remove variant for hosts preferring one handler.
    /// `id` is `None` for adds.
    Edit {
        id: Option<PaneId>,
        action: EditAction,
    },
    /// Controlled mode only: the commit the host must apply to its active
    /// binding.
    ActiveChangeRequested { id: PaneId },
}

/// Arrow keys relevant to nav-strip navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
}

/// Step direction over the ordered pane list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing index, wrapping past the end.
    Forward,
    /// Decreasing index, wrapping past the start.
    Backward,
}

impl NavKey {
    /// Map a key to a step direction for the given tab position.
    ///
    /// Forward is the axis-appropriate increasing-index key: right when the
    /// strip is horizontal, down when it is vertical. Keys on the
    /// perpendicular axis are ignored.
    #[must_use]
    pub const fn direction(self, position: TabPosition) -> Option<Direction> {
        match (position.axis(), self) {
            (Axis::Horizontal, Self::Right) => Some(Direction::Forward),
            (Axis::Horizontal, Self::Left) => Some(Direction::Backward),
            (Axis::Vertical, Self::Down) => Some(Direction::Forward),
            (Axis::Vertical, Self::Up) => Some(Direction::Backward),
            _ => None,
        }
    }
}
