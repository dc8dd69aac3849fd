#![forbid(unsafe_code)]

//! Active-tab state machine.
//!
//! Owns (or, in controlled mode, projects) the active pane id and mediates
//! every activation request through an optional leave guard. Guard
//! resolutions are matched against a monotonic request sequence so a later
//! request always supersedes an earlier pending one (last-request-wins).

use std::collections::VecDeque;
use std::fmt;

use tabkit_core::event::{ActivationOrigin, TabEvent};
use tabkit_core::id::PaneId;

use crate::registry::PaneRegistry;

/// A leave guard's answer for one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Commit the transition now.
    Allow,
    /// Discard the transition now; everything stays as it was.
    Deny,
    /// Answer later through [`ActiveTabController::resolve_guard`].
    Defer,
}

/// Host-supplied predicate over the leaving and entering pane ids.
pub type LeaveGuard = Box<dyn FnMut(Option<&PaneId>, &PaneId) -> GuardDecision>;

/// Handle for resolving a deferred guard. Carries the request sequence it
/// was issued under; stale tickets resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardTicket {
    seq: u64,
}

/// Why an activation request was rejected. Rejections are silent: no event
/// reaches the host and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The target pane's disabled flag is set.
    DisabledPane,
    /// The target id is not in the registry.
    UnknownPane,
    /// The leave guard declined synchronously.
    GuardVeto,
}

/// Result of an activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transition committed synchronously.
    Committed,
    /// The target already is the active pane; nothing happened.
    AlreadyActive,
    /// A deferred guard holds the transition; resolve with the ticket.
    Pending(GuardTicket),
    /// The request was discarded.
    Rejected(RejectReason),
}

struct PendingTransition {
    target: PaneId,
    origin: ActivationOrigin,
    seq: u64,
}

/// The active-tab controller.
///
/// Uncontrolled (default): the controller owns the active id. Controlled:
/// the host owns it; commits surface as [`TabEvent::ActiveChangeRequested`]
/// and the host projects the value back via
/// [`ActiveTabController::apply_external`]. Derived observations (hidden
/// flags, `is_active`) read the same way in both modes.
#[derive(Default)]
pub struct ActiveTabController {
    current: Option<PaneId>,
    pending: Option<PendingTransition>,
    seq: u64,
    controlled: bool,
    requested_external: Option<PaneId>,
    guard: Option<LeaveGuard>,
    events: VecDeque<TabEvent>,
}

impl fmt::Debug for ActiveTabController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTabController")
            .field("current", &self.current)
            .field("pending", &self.pending.as_ref().map(|p| &p.target))
            .field("seq", &self.seq)
            .field("controlled", &self.controlled)
            .field("guard", &self.guard.is_some())
            .finish()
    }
}

impl ActiveTabController {
    /// Create an uncontrolled controller with no guard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace the leave guard.
    pub fn set_guard(&mut self, guard: Option<LeaveGuard>) {
        self.guard = guard;
    }

    /// Switch between controlled and uncontrolled active-id ownership.
    pub fn set_controlled(&mut self, controlled: bool) {
        self.controlled = controlled;
    }

    /// The committed active pane id.
    #[must_use]
    pub fn current(&self) -> Option<&PaneId> {
        self.current.as_ref()
    }

    /// Whether an id is the active pane.
    #[must_use]
    pub fn is_active(&self, id: &PaneId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Assistive-tech hidden flag for a pane: false only for the active one.
    #[must_use]
    pub fn is_hidden(&self, id: &PaneId) -> bool {
        !self.is_active(id)
    }

    /// Id of an in-flight guarded transition, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<&PaneId> {
        self.pending.as_ref().map(|p| &p.target)
    }

    /// Request a transition to `target`.
    ///
    /// Synchronous outcomes return immediately; a deferred guard returns
    /// [`Outcome::Pending`] and the active pane stays put until the ticket
    /// resolves. A new request supersedes any prior pending one.
    pub fn request_activate(
        &mut self,
        registry: &PaneRegistry,
        target: PaneId,
        origin: ActivationOrigin,
    ) -> Outcome {
        if self.is_active(&target) {
            return Outcome::AlreadyActive;
        }
        let Some(entry) = registry.get(&target) else {
            return Outcome::Rejected(RejectReason::UnknownPane);
        };
        if entry.pane().is_disabled() {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "tabs.reject_disabled", id = %target);
            return Outcome::Rejected(RejectReason::DisabledPane);
        }

        // Every request bumps the sequence; any earlier pending guard is
        // now stale regardless of how it eventually resolves.
        self.seq += 1;
        self.pending = None;

        if let Some(guard) = self.guard.as_mut() {
            match guard(self.current.as_ref(), &target) {
                GuardDecision::Allow => {}
                GuardDecision::Deny => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(message = "tabs.guard_veto", id = %target);
                    return Outcome::Rejected(RejectReason::GuardVeto);
                }
                GuardDecision::Defer => {
                    let seq = self.seq;
                    self.pending = Some(PendingTransition {
                        target,
                        origin,
                        seq,
                    });
                    return Outcome::Pending(GuardTicket { seq });
                }
            }
        }
        self.commit(target, origin);
        Outcome::Committed
    }

    /// Resolve a deferred guard.
    ///
    /// Applies only when the ticket still matches the latest request
    /// sequence; stale tickets are ignored and return `None`. A denial
    /// discards the pending transition with no event and no state change.
    pub fn resolve_guard(&mut self, ticket: GuardTicket, accept: bool) -> Option<Outcome> {
        let pending = self.pending.as_ref()?;
        if pending.seq != ticket.seq || ticket.seq != self.seq {
            return None;
        }
        let PendingTransition { target, origin, .. } = self.pending.take()?;
        if accept {
            self.commit(target, origin);
            Some(Outcome::Committed)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "tabs.guard_veto", id = %target);
            Some(Outcome::Rejected(RejectReason::GuardVeto))
        }
    }

    /// Project a host-owned active id into the controller (controlled
    /// mode). Emits `tab-change` only when this applies a commit the
    /// controller previously requested; unsolicited host jumps are silent.
    pub fn apply_external(&mut self, id: Option<PaneId>) {
        let was_requested = id.is_some() && self.requested_external == id;
        self.requested_external = None;
        self.current = id;
        if was_requested
            && let Some(id) = self.current.clone()
        {
            self.events.push_back(TabEvent::TabChange { id });
        }
    }

    /// Activate without consulting the guard. Removal fallback path: a
    /// disappearing active pane is not a navigational transition.
    pub fn force_activate(&mut self, id: PaneId) {
        self.seq += 1;
        self.pending = None;
        self.commit(id, ActivationOrigin::Programmatic);
    }

    /// Clear the active pane entirely (no panes remain). Valid terminal
    /// state, not an error; emits nothing.
    pub fn clear_active(&mut self) {
        self.seq += 1;
        self.pending = None;
        self.current = None;
        self.requested_external = None;
    }

    /// Set the active id directly: no guard, no events. Default selection
    /// and state restoration use this; queued events stay untouched.
    pub(crate) fn set_current_silently(&mut self, id: Option<PaneId>) {
        self.seq += 1;
        self.pending = None;
        self.requested_external = None;
        self.current = id;
    }

    /// Drop any pending transition whose target is gone from the registry.
    pub fn cancel_pending_for(&mut self, removed: &[PaneId]) {
        if let Some(pending) = &self.pending
            && removed.contains(&pending.target)
        {
            self.pending = None;
        }
    }

    /// Drain events accumulated since the last call, in emission order.
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn push_event(&mut self, event: TabEvent) {
        self.events.push_back(event);
    }

    fn commit(&mut self, target: PaneId, origin: ActivationOrigin) {
        self.pending = None;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "tabs.activate",
            from = self
                .current
                .as_ref()
                .map(ToString::to_string)
                .as_deref(),
            to = %target,
            controlled = self.controlled,
        );
        if origin == ActivationOrigin::Click {
            self.events.push_back(TabEvent::TabClick { id: target.clone() });
        }
        if self.controlled {
            self.requested_external = Some(target.clone());
            self.events
                .push_back(TabEvent::ActiveChangeRequested { id: target });
        } else {
            self.current = Some(target.clone());
            self.events.push_back(TabEvent::TabChange { id: target });
        }
    }
}
