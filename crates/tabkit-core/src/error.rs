#![forbid(unsafe_code)]

//! Diagnostic errors.
//!
//! Expected rejections (disabled pane, guard veto) are modeled as outcome
//! enums on the controller, not errors: they leave the UI unchanged and
//! must stay silent. Only configuration mistakes surface here.

use crate::id::PaneId;

/// Configuration errors surfaced to the host as diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabsError {
    /// Two panes were registered with the same explicit id. The first
    /// registration wins; the duplicate is ignored.
    #[error("duplicate pane id `{0}`; keeping the first registration")]
    DuplicateId(PaneId),
}
