#![forbid(unsafe_code)]

//! Shared value types for the tabkit tab-container engine.
//!
//! Everything here is plain data: pane identifiers, the pane model, float
//! geometry in host pixel space, the host-facing event surface, and the
//! diagnostic error taxonomy. No rendering, no I/O.

pub mod error;
pub mod event;
pub mod geometry;
pub mod id;
pub mod pane;

pub use error::TabsError;
pub use event::{ActivationOrigin, Direction, EditAction, NavKey, TabEvent};
pub use geometry::{Axis, Rect, Sides, TabPosition};
pub use id::PaneId;
pub use pane::Pane;
