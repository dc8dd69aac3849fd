#![forbid(unsafe_code)]

//! Keyboard navigation over the ordered pane list.
//!
//! Arrow navigation both moves focus and activates: the resolved target is
//! fed straight back into the controller with keyboard origin. There is no
//! separate roving-focus mode.

use tabkit_core::event::Direction;
use tabkit_core::id::PaneId;

use crate::registry::PaneRegistry;

/// The next focus target from `focused` in `direction`.
///
/// Steps with wrap-around over the full ordered list, skipping disabled
/// panes, until a non-disabled pane is found. Returns `None` once every
/// other pane has been visited (disabled-only sets never navigate and
/// never loop). An unknown `focused` id also yields `None`.
#[must_use]
pub fn next(registry: &PaneRegistry, focused: &PaneId, direction: Direction) -> Option<PaneId> {
    let panes = registry.list();
    let len = panes.len();
    let start = registry.position(focused)?;

    let mut index = start;
    for _ in 1..=len.saturating_sub(1) {
        index = match direction {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        };
        let entry = &panes[index];
        if !entry.pane().is_disabled() {
            return Some(entry.id().clone());
        }
    }
    None
}
