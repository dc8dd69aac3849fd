#![forbid(unsafe_code)]

//! The tab-container facade.
//!
//! Wires the registry, activation controller, keyboard navigation, removal
//! planning, and nav layout behind one configuration surface. Output is
//! pure data (events, hidden flags, indicator transforms); a rendering
//! layer consumes it.

use ahash::AHashSet;

use tabkit_core::error::TabsError;
use tabkit_core::event::{ActivationOrigin, EditAction, NavKey, TabEvent};
use tabkit_core::geometry::TabPosition;
use tabkit_core::id::PaneId;
use tabkit_core::pane::Pane;
use tabkit_nav::{Measure, NavLayout};

use crate::controller::{ActiveTabController, GuardTicket, LeaveGuard, Outcome};
use crate::editable;
use crate::keyboard;
use crate::registry::{PaneRegistry, SyncDelta};

/// Presentation variant. Styling only; no logic keys off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum TabKind {
    /// Plain underlined tabs.
    #[default]
    Plain,
    /// Card-style tabs.
    Card,
    /// Card tabs inside a bordered container.
    BorderCard,
}

/// An injectable wrapper around the nav strip (e.g. a sticky/affix
/// container). Opaque pass-through for the rendering layer; no logic
/// keys off it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NavWrapper {
    tag: String,
    props: Vec<(String, String)>,
}

impl NavWrapper {
    /// Wrap the nav strip in the named component.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: Vec::new(),
        }
    }

    /// Add a pass-through property for the wrapper.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.push((key.into(), value.into()));
        self
    }

    /// Wrapper component tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Pass-through properties, in insertion order.
    #[must_use]
    pub fn props(&self) -> &[(String, String)] {
        &self.props
    }
}

/// A tabbed container.
///
/// The host pushes its declarative pane list through
/// [`Tabs::sync_panes`], feeds input (`click`, `handle_key`, affordance
/// presses), and drains [`TabEvent`]s after each input.
#[derive(Debug)]
pub struct Tabs {
    registry: PaneRegistry,
    controller: ActiveTabController,
    layout: NavLayout,
    kind: TabKind,
    position: TabPosition,
    editable: bool,
    addable: bool,
    closable: bool,
    controlled: bool,
    nav_wrapper: Option<NavWrapper>,
    mounted: AHashSet<PaneId>,
    diagnostics: Vec<TabsError>,
}

impl Default for Tabs {
    fn default() -> Self {
        Self::new()
    }
}

impl Tabs {
    /// Create an empty, uncontrolled, plain tab container at the top.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: PaneRegistry::new(),
            controller: ActiveTabController::new(),
            layout: NavLayout::new(TabPosition::Top),
            kind: TabKind::Plain,
            position: TabPosition::Top,
            editable: false,
            addable: false,
            closable: false,
            controlled: false,
            nav_wrapper: None,
            mounted: AHashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Set the presentation variant.
    #[must_use]
    pub fn kind(mut self, kind: TabKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set where the nav strip sits.
    #[must_use]
    pub fn position(mut self, position: TabPosition) -> Self {
        self.position = position;
        self.layout.set_position(position);
        self
    }

    /// Stretch nav items to equal widths (horizontal strips only).
    #[must_use]
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.layout.set_stretch(stretch);
        self
    }

    /// Show both add and close affordances on every pane.
    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Show the "new tab" affordance.
    #[must_use]
    pub fn addable(mut self, addable: bool) -> Self {
        self.addable = addable;
        self
    }

    /// Show close affordances (per-pane `closable` still overrides).
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Let the host own the active id. Commits surface as
    /// [`TabEvent::ActiveChangeRequested`]; the host projects the value
    /// back with [`Tabs::apply_external_active`].
    #[must_use]
    pub fn controlled(mut self, controlled: bool) -> Self {
        self.controlled = controlled;
        self.controller.set_controlled(controlled);
        self
    }

    /// Install a leave guard consulted before committing away from the
    /// current pane.
    #[must_use]
    pub fn guard(mut self, guard: LeaveGuard) -> Self {
        self.controller.set_guard(Some(guard));
        self
    }

    /// Wrap the nav strip in an injectable component.
    #[must_use]
    pub fn wrap_nav(mut self, wrapper: NavWrapper) -> Self {
        self.nav_wrapper = Some(wrapper);
        self
    }

    // --- host-driven pane list ---

    /// Replace the pane list with the host's declarative list.
    ///
    /// Diffs by id. If the active pane disappears, the pre-removal
    /// neighbor fallback applies without consulting the guard; a pending
    /// guarded transition to a removed pane is dropped. When nothing
    /// remains, the active id becomes none (valid terminal state).
    pub fn sync_panes(&mut self, panes: Vec<Pane>) -> SyncDelta {
        let old_order: Vec<PaneId> = self.registry.ids().cloned().collect();
        let (delta, errors) = self.registry.sync(panes);
        self.diagnostics.extend(errors);
        self.controller.cancel_pending_for(&delta.removed);
        self.mounted.retain(|id| self.registry.contains(id));

        if let Some(current) = self.controller.current().cloned()
            && !self.registry.contains(&current)
        {
            match self.fallback_from(&old_order, &current) {
                Some(fallback) => self.controller.force_activate(fallback),
                None => self.controller.clear_active(),
            }
        }
        self.ensure_default_active();
        self.mark_active_mounted();
        delta
    }

    /// Register a single pane imperatively.
    pub fn register_pane(&mut self, pane: Pane) -> Result<PaneId, TabsError> {
        let id = self.registry.register(pane).map(|e| e.id().clone());
        match id {
            Ok(id) => {
                // Adding never implicitly activates; only an empty
                // container picks up a default.
                self.ensure_default_active();
                self.mark_active_mounted();
                Ok(id)
            }
            Err(err) => {
                self.diagnostics.push(err.clone());
                Err(err)
            }
        }
    }

    /// Remove a single pane imperatively, applying the removal fallback if
    /// it was active.
    pub fn unregister_pane(&mut self, id: &PaneId) -> Option<Pane> {
        let was_active = self.controller.is_active(id);
        let fallback = editable::plan_removal(&self.registry, id, self.controller.current());
        let pane = self.registry.unregister(id)?;
        self.controller.cancel_pending_for(std::slice::from_ref(id));
        self.mounted.remove(id);
        if was_active {
            match fallback {
                Some(fallback) => self.controller.force_activate(fallback),
                None => self.controller.clear_active(),
            }
            self.mark_active_mounted();
        }
        Some(pane)
    }

    // --- input ---

    /// Pointer press on a nav item.
    pub fn click(&mut self, id: &PaneId) -> Outcome {
        let outcome =
            self.controller
                .request_activate(&self.registry, id.clone(), ActivationOrigin::Click);
        self.mark_active_mounted();
        outcome
    }

    /// Programmatic activation.
    pub fn activate(&mut self, id: &PaneId) -> Outcome {
        let outcome = self.controller.request_activate(
            &self.registry,
            id.clone(),
            ActivationOrigin::Programmatic,
        );
        self.mark_active_mounted();
        outcome
    }

    /// Arrow-key navigation from the focused item. Moves focus and
    /// activates in one step; returns the new focus target and the
    /// activation outcome, or `None` when the key does not navigate.
    pub fn handle_key(&mut self, focused: &PaneId, key: NavKey) -> Option<(PaneId, Outcome)> {
        let direction = key.direction(self.position)?;
        let target = keyboard::next(&self.registry, focused, direction)?;
        let outcome = self.controller.request_activate(
            &self.registry,
            target.clone(),
            ActivationOrigin::Keyboard,
        );
        self.mark_active_mounted();
        Some((target, outcome))
    }

    /// Resolve a deferred leave guard.
    pub fn resolve_guard(&mut self, ticket: GuardTicket, accept: bool) -> Option<Outcome> {
        let outcome = self.controller.resolve_guard(ticket, accept);
        self.mark_active_mounted();
        outcome
    }

    /// Controlled mode: project the host-owned active id.
    pub fn apply_external_active(&mut self, id: Option<PaneId>) {
        self.controller.apply_external(id);
        self.mark_active_mounted();
    }

    /// Restore a previously persisted active id without emitting events or
    /// consulting the guard.
    pub fn restore_active(&mut self, id: Option<PaneId>) {
        match id {
            Some(id) if self.registry.contains(&id) => {
                self.controller.set_current_silently(Some(id));
                self.mark_active_mounted();
            }
            _ => self.controller.clear_active(),
        }
    }

    /// The "new tab" affordance was pressed. Emits `tab-add` and the
    /// combined `edit`; the host appends the pane and picks the active id.
    pub fn press_add(&mut self) {
        if !self.addable_enabled() {
            return;
        }
        self.controller.push_event(TabEvent::TabAdd);
        self.controller.push_event(TabEvent::Edit {
            id: None,
            action: EditAction::Add,
        });
    }

    /// A pane's close affordance was pressed. Emits `tab-remove` and the
    /// combined `edit`; the host applies the removal (typically via
    /// [`Tabs::sync_panes`] or [`Tabs::unregister_pane`]).
    pub fn press_close(&mut self, id: &PaneId) {
        if !self.pane_closable(id) {
            return;
        }
        self.controller
            .push_event(TabEvent::TabRemove { id: id.clone() });
        self.controller.push_event(TabEvent::Edit {
            id: Some(id.clone()),
            action: EditAction::Remove,
        });
    }

    // --- observations ---

    /// Drain events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        self.controller.drain_events()
    }

    /// Drain configuration diagnostics (duplicate ids).
    pub fn drain_diagnostics(&mut self) -> Vec<TabsError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// The committed active pane id.
    #[must_use]
    pub fn current(&self) -> Option<&PaneId> {
        self.controller.current()
    }

    /// Whether an id is the active pane.
    #[must_use]
    pub fn is_active(&self, id: &PaneId) -> bool {
        self.controller.is_active(id)
    }

    /// Assistive-tech hidden flag: false only for the active pane.
    #[must_use]
    pub fn is_pane_hidden(&self, id: &PaneId) -> bool {
        self.controller.is_hidden(id)
    }

    /// Whether a pane's content should be instantiated. Lazy panes wait
    /// for their first activation and then stay mounted.
    #[must_use]
    pub fn should_mount(&self, id: &PaneId) -> bool {
        match self.registry.get(id) {
            Some(entry) if entry.pane().is_lazy() => self.mounted.contains(id),
            Some(_) => true,
            None => false,
        }
    }

    /// Whether a pane shows a close affordance.
    #[must_use]
    pub fn pane_closable(&self, id: &PaneId) -> bool {
        let Some(entry) = self.registry.get(id) else {
            return false;
        };
        entry
            .pane()
            .closable_override()
            .unwrap_or(self.editable || self.closable)
    }

    /// Whether the add affordance shows.
    #[must_use]
    pub fn addable_enabled(&self) -> bool {
        self.editable || self.addable
    }

    /// The registered panes, in display order.
    #[must_use]
    pub fn registry(&self) -> &PaneRegistry {
        &self.registry
    }

    /// Mutable registry access for host-side label/flag updates.
    pub fn registry_mut(&mut self) -> &mut PaneRegistry {
        &mut self.registry
    }

    /// The nav layout engine. Rendering layers feed it measurements.
    #[must_use]
    pub fn layout(&self) -> &NavLayout {
        &self.layout
    }

    /// Mutable layout access.
    pub fn layout_mut(&mut self) -> &mut NavLayout {
        &mut self.layout
    }

    /// Re-measure the whole strip (item set changed, resize, or the
    /// position moved to the other axis).
    pub fn refresh_nav<M: Measure>(&mut self, measure: &mut M) {
        let ids: Vec<PaneId> = self.registry.ids().cloned().collect();
        self.layout.refresh_all(measure, &ids);
    }

    /// Recompute the indicator and scroll offset for the active pane,
    /// measuring only that item.
    pub fn refresh_indicator<M: Measure>(
        &mut self,
        measure: &mut M,
    ) -> Option<tabkit_nav::IndicatorTransform> {
        let id = self.controller.current()?.clone();
        self.layout.activate(measure, &id)
    }

    /// Indicator transform for the active pane from cached geometry.
    #[must_use]
    pub fn indicator(&self) -> Option<tabkit_nav::IndicatorTransform> {
        self.layout.indicator_for(self.controller.current()?)
    }

    /// Current nav-strip scroll offset along the axis.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.layout.scroll_offset()
    }

    /// Presentation variant.
    #[must_use]
    pub const fn tab_kind(&self) -> TabKind {
        self.kind
    }

    /// Nav strip position.
    #[must_use]
    pub const fn tab_position(&self) -> TabPosition {
        self.position
    }

    /// Move the nav strip. Indicator and scroll geometry are stale until
    /// the next [`Tabs::refresh_nav`].
    pub fn set_tab_position(&mut self, position: TabPosition) {
        self.position = position;
        self.layout.set_position(position);
    }

    /// The configured nav-strip wrapper, if any.
    #[must_use]
    pub fn nav_wrapper(&self) -> Option<&NavWrapper> {
        self.nav_wrapper.as_ref()
    }

    // --- internals ---

    /// First pane becomes active when nothing is (uncontrolled only; a
    /// controlled host owns the initial value). Silent, like the original
    /// container's default selection.
    fn ensure_default_active(&mut self) {
        if self.controlled || self.controller.current().is_some() || self.registry.is_empty() {
            return;
        }
        if let Some(first) = self.registry.list().first() {
            let id = first.id().clone();
            self.controller.set_current_silently(Some(id));
        }
    }

    fn mark_active_mounted(&mut self) {
        if let Some(current) = self.controller.current()
            && self.registry.contains(current)
        {
            self.mounted.insert(current.clone());
        }
    }

    /// Surviving neighbor of a removed active pane, scanning the
    /// pre-removal order forward from its old position, then backward.
    fn fallback_from(&self, old_order: &[PaneId], removed: &PaneId) -> Option<PaneId> {
        let pos = old_order.iter().position(|id| id == removed)?;
        old_order[pos + 1..]
            .iter()
            .chain(old_order[..pos].iter().rev())
            .find(|id| self.registry.contains(id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::{NavWrapper, TabKind, Tabs};
    use crate::controller::{GuardDecision, Outcome};
    use tabkit_core::event::{EditAction, NavKey, TabEvent};
    use tabkit_core::geometry::TabPosition;
    use tabkit_core::id::PaneId;
    use tabkit_core::pane::Pane;

    fn id(name: &str) -> PaneId {
        PaneId::from(name)
    }

    fn named_panes(names: &[&str]) -> Vec<Pane> {
        names.iter().map(|n| Pane::new(*n).id(*n)).collect()
    }

    #[test]
    fn first_pane_is_active_by_default() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(vec![Pane::new("A"), Pane::new("B")]);
        assert_eq!(tabs.current(), Some(&id("0")));
        assert!(tabs.drain_events().is_empty(), "default selection is silent");
    }

    #[test]
    fn exactly_one_pane_is_visible() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a", "b", "c"]));
        tabs.click(&id("b"));
        let visible: Vec<_> = ["a", "b", "c"]
            .iter()
            .filter(|n| !tabs.is_pane_hidden(&id(n)))
            .collect();
        assert_eq!(visible, vec![&"b"]);
    }

    #[test]
    fn click_emits_click_and_change() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a", "b"]));
        tabs.click(&id("b"));
        assert_eq!(
            tabs.drain_events(),
            vec![
                TabEvent::TabClick { id: id("b") },
                TabEvent::TabChange { id: id("b") },
            ]
        );
    }

    #[test]
    fn keyboard_moves_and_activates() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(vec![
            Pane::new("A").id("a").disabled(true),
            Pane::new("B").id("b"),
            Pane::new("C").id("c"),
            Pane::new("D").id("d"),
        ]);
        tabs.click(&id("b"));
        tabs.drain_events();

        let (target, outcome) = tabs.handle_key(&id("b"), NavKey::Right).unwrap();
        assert_eq!(target, id("c"));
        assert_eq!(outcome, Outcome::Committed);
        assert_eq!(tabs.current(), Some(&id("c")));
        // Keyboard origin: change only, no click event.
        assert_eq!(tabs.drain_events(), vec![TabEvent::TabChange { id: id("c") }]);

        let (target, _) = tabs.handle_key(&id("d"), NavKey::Right).unwrap();
        assert_eq!(target, id("b"), "wraps past the disabled head");
        let (target, _) = tabs.handle_key(&id("b"), NavKey::Left).unwrap();
        assert_eq!(target, id("d"), "backward wraps skipping disabled");
    }

    #[test]
    fn perpendicular_keys_are_ignored() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a", "b"]));
        assert!(tabs.handle_key(&id("a"), NavKey::Down).is_none());

        let mut tabs = Tabs::new().position(TabPosition::Left);
        tabs.sync_panes(named_panes(&["a", "b"]));
        assert!(tabs.handle_key(&id("a"), NavKey::Right).is_none());
        let (target, _) = tabs.handle_key(&id("a"), NavKey::Down).unwrap();
        assert_eq!(target, id("b"));
    }

    #[test]
    fn removing_active_pane_falls_to_next() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a", "b", "c"]));
        tabs.click(&id("b"));
        tabs.drain_events();

        tabs.sync_panes(named_panes(&["a", "c"]));
        assert_eq!(tabs.current(), Some(&id("c")));
        assert_eq!(tabs.drain_events(), vec![TabEvent::TabChange { id: id("c") }]);
    }

    #[test]
    fn removing_active_last_falls_back() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a", "b", "c"]));
        tabs.click(&id("c"));
        tabs.drain_events();

        tabs.sync_panes(named_panes(&["a", "b"]));
        assert_eq!(tabs.current(), Some(&id("b")));
    }

    #[test]
    fn removal_fallback_skips_simultaneously_removed_neighbors() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a", "b", "c"]));
        tabs.click(&id("b"));
        tabs.drain_events();

        // b (active) and c vanish together; the fallback is a, not c.
        tabs.sync_panes(named_panes(&["a"]));
        assert_eq!(tabs.current(), Some(&id("a")));
    }

    #[test]
    fn removing_every_pane_clears_active() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["only"]));
        assert_eq!(tabs.current(), Some(&id("only")));
        tabs.sync_panes(vec![]);
        assert_eq!(tabs.current(), None);
        assert!(tabs.drain_events().is_empty());
        // Every pane hidden once nothing is active.
        assert!(tabs.is_pane_hidden(&id("only")));
    }

    #[test]
    fn removal_fallback_bypasses_guard() {
        let mut tabs = Tabs::new().guard(Box::new(|_, _| GuardDecision::Deny));
        tabs.sync_panes(named_panes(&["a", "b"]));
        tabs.restore_active(Some(id("a")));

        tabs.sync_panes(named_panes(&["b"]));
        assert_eq!(tabs.current(), Some(&id("b")));
    }

    #[test]
    fn adding_panes_does_not_steal_active() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a"]));
        tabs.sync_panes(named_panes(&["a", "b", "c"]));
        assert_eq!(tabs.current(), Some(&id("a")));
    }

    #[test]
    fn imperative_register_and_unregister() {
        let mut tabs = Tabs::new();
        let a = tabs.register_pane(Pane::new("A").id("a")).unwrap();
        tabs.register_pane(Pane::new("B").id("b")).unwrap();
        assert_eq!(tabs.current(), Some(&a));

        tabs.unregister_pane(&a);
        assert_eq!(tabs.current(), Some(&id("b")));
        tabs.unregister_pane(&id("b"));
        assert_eq!(tabs.current(), None);
    }

    #[test]
    fn duplicate_ids_surface_as_diagnostics() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(vec![
            Pane::new("first").id("x"),
            Pane::new("second").id("x"),
        ]);
        assert_eq!(tabs.registry().len(), 1);
        assert_eq!(tabs.drain_diagnostics().len(), 1);
        assert!(tabs.drain_diagnostics().is_empty());
    }

    #[test]
    fn close_affordance_rules() {
        let mut tabs = Tabs::new().closable(true);
        tabs.sync_panes(vec![
            Pane::new("A").id("a"),
            Pane::new("B").id("b").closable(false),
        ]);
        assert!(tabs.pane_closable(&id("a")));
        assert!(!tabs.pane_closable(&id("b")), "per-pane override wins");

        let mut tabs = Tabs::new();
        tabs.sync_panes(vec![
            Pane::new("A").id("a"),
            Pane::new("B").id("b").closable(true),
        ]);
        assert!(!tabs.pane_closable(&id("a")));
        assert!(tabs.pane_closable(&id("b")));

        let mut tabs = Tabs::new().editable(true);
        tabs.sync_panes(named_panes(&["a"]));
        assert!(tabs.pane_closable(&id("a")), "editable implies closable");
        assert!(tabs.addable_enabled(), "editable implies addable");
    }

    #[test]
    fn press_close_emits_remove_and_edit() {
        let mut tabs = Tabs::new().closable(true);
        tabs.sync_panes(named_panes(&["a", "b"]));
        tabs.drain_events();
        tabs.press_close(&id("b"));
        assert_eq!(
            tabs.drain_events(),
            vec![
                TabEvent::TabRemove { id: id("b") },
                TabEvent::Edit {
                    id: Some(id("b")),
                    action: EditAction::Remove,
                },
            ]
        );
        // Registry untouched; the host applies the removal.
        assert_eq!(tabs.registry().len(), 2);
    }

    #[test]
    fn press_close_ignored_when_not_closable() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a"]));
        tabs.press_close(&id("a"));
        assert!(tabs.drain_events().is_empty());
    }

    #[test]
    fn press_add_emits_add_and_edit() {
        let mut tabs = Tabs::new().addable(true);
        tabs.sync_panes(named_panes(&["a"]));
        tabs.press_add();
        assert_eq!(
            tabs.drain_events(),
            vec![
                TabEvent::TabAdd,
                TabEvent::Edit {
                    id: None,
                    action: EditAction::Add,
                },
            ]
        );
    }

    #[test]
    fn press_add_ignored_when_not_addable() {
        let mut tabs = Tabs::new();
        tabs.press_add();
        assert!(tabs.drain_events().is_empty());
    }

    #[test]
    fn lazy_panes_mount_on_first_activation_and_stay() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(vec![
            Pane::new("A").id("a"),
            Pane::new("B").id("b").lazy(true),
        ]);
        assert!(tabs.should_mount(&id("a")));
        assert!(!tabs.should_mount(&id("b")));

        tabs.click(&id("b"));
        assert!(tabs.should_mount(&id("b")));

        // Navigating away keeps it mounted.
        tabs.click(&id("a"));
        assert!(tabs.should_mount(&id("b")));
    }

    #[test]
    fn numeric_pane_names_round_trip() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(vec![
            Pane::new("A").id(0),
            Pane::new("B").id(1),
            Pane::new("C").id(2),
            Pane::new("D").id(3),
        ]);
        for n in [1i64, 0, 2, 0, 3, 0, 1] {
            tabs.click(&PaneId::from(n));
            assert_eq!(tabs.current(), Some(&PaneId::Number(n)));
        }
        // Pane named 0 active: a real value, not an unset sentinel.
        tabs.click(&PaneId::from(0));
        assert_eq!(tabs.current(), Some(&PaneId::Number(0)));
        assert_ne!(tabs.current(), None);
    }

    #[test]
    fn controlled_mode_round_trip() {
        let mut tabs = Tabs::new().controlled(true);
        tabs.sync_panes(named_panes(&["a", "b"]));
        assert_eq!(tabs.current(), None, "controlled default comes from the host");
        tabs.apply_external_active(Some(id("a")));

        tabs.click(&id("b"));
        assert_eq!(tabs.current(), Some(&id("a")));
        let events = tabs.drain_events();
        assert_eq!(
            events,
            vec![
                TabEvent::TabClick { id: id("b") },
                TabEvent::ActiveChangeRequested { id: id("b") },
            ]
        );

        tabs.apply_external_active(Some(id("b")));
        assert_eq!(tabs.current(), Some(&id("b")));
        assert!(!tabs.is_pane_hidden(&id("b")));
        assert!(tabs.is_pane_hidden(&id("a")));
    }

    #[test]
    fn restore_active_is_silent_and_validated() {
        let mut tabs = Tabs::new();
        tabs.sync_panes(named_panes(&["a", "b"]));
        tabs.restore_active(Some(id("b")));
        assert_eq!(tabs.current(), Some(&id("b")));
        assert!(tabs.drain_events().is_empty());

        tabs.restore_active(Some(id("ghost")));
        assert_eq!(tabs.current(), None);
    }

    #[test]
    fn config_accessors() {
        let tabs = Tabs::new()
            .kind(TabKind::BorderCard)
            .position(TabPosition::Right)
            .wrap_nav(NavWrapper::new("affix").prop("offset", "120"));
        assert_eq!(tabs.tab_kind(), TabKind::BorderCard);
        assert_eq!(tabs.tab_position(), TabPosition::Right);
        let wrapper = tabs.nav_wrapper().unwrap();
        assert_eq!(wrapper.tag(), "affix");
        assert_eq!(wrapper.props(), &[("offset".to_string(), "120".to_string())]);
        assert_eq!(tabs.layout().position(), TabPosition::Right);
    }
}
