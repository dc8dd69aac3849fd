#![forbid(unsafe_code)]

//! Headless tabbed-container engine.
//!
//! A navigation strip of selectable, optionally closable/addable items
//! paired with a content area showing exactly one pane at a time. This
//! crate owns the logic: the pane registry, the guarded active-tab state
//! machine, keyboard navigation, editable-tab removal planning, and (via
//! [`tabkit_nav`]) the indicator/scroll geometry. Rendering and DOM
//! measurement stay on the host side; everything observable here is plain
//! data.
//!
//! ```
//! use tabkit::{Tabs, TabEvent};
//! use tabkit_core::{Pane, PaneId};
//!
//! let mut tabs = Tabs::new().closable(true);
//! tabs.sync_panes(vec![
//!     Pane::new("Home").id("home"),
//!     Pane::new("Logs").id("logs").lazy(true),
//! ]);
//! assert_eq!(tabs.current(), Some(&PaneId::from("home")));
//!
//! tabs.click(&PaneId::from("logs"));
//! assert!(matches!(
//!     tabs.drain_events().as_slice(),
//!     [TabEvent::TabClick { .. }, TabEvent::TabChange { .. }]
//! ));
//! ```

pub mod controller;
pub mod editable;
pub mod keyboard;
pub mod registry;
pub mod tabs;

pub use controller::{
    ActiveTabController, GuardDecision, GuardTicket, LeaveGuard, Outcome, RejectReason,
};
pub use editable::plan_removal;
pub use registry::{PaneRegistry, SyncDelta};
pub use tabs::{NavWrapper, TabKind, Tabs};

pub use tabkit_core::{
    ActivationOrigin, Axis, Direction, EditAction, NavKey, Pane, PaneId, Rect, Sides, TabEvent,
    TabPosition, TabsError,
};
pub use tabkit_nav::{IndicatorTransform, Measure, NavLayout};
