#![forbid(unsafe_code)]

//! The pane model.

use crate::id::PaneId;

/// A single selectable content unit managed by the tab container.
///
/// Hosts build panes with the combinators and hand them to the registry;
/// the registry resolves a missing id to a positional one and stamps the
/// registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Pane {
    id: Option<PaneId>,
    label: String,
    disabled: bool,
    closable: Option<bool>,
    lazy: bool,
}

impl Pane {
    /// Create a new pane with a display label and no explicit id.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            disabled: false,
            closable: None,
            lazy: false,
        }
    }

    /// Name the pane explicitly. Names may be textual or numeric.
    #[must_use]
    pub fn id(mut self, id: impl Into<PaneId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set whether the pane rejects activation.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Per-pane closable override. Unset panes follow the container-level
    /// closable/editable configuration.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    /// Defer mounting the pane's content until it is first activated.
    #[must_use]
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// The explicit id, if the host named this pane.
    #[must_use]
    pub fn explicit_id(&self) -> Option<&PaneId> {
        self.id.as_ref()
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Update the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Whether activation requests are rejected.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Update the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The per-pane closable override, if any.
    #[must_use]
    pub const fn closable_override(&self) -> Option<bool> {
        self.closable
    }

    /// Update the per-pane closable override.
    pub fn set_closable(&mut self, closable: Option<bool>) {
        self.closable = closable;
    }

    /// Whether content mounting waits for first activation.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        self.lazy
    }
}
