#![forbid(unsafe_code)]

//! Removal planning for editable tab sets.

use tabkit_core::id::PaneId;

use crate::registry::PaneRegistry;

/// The active id after removing `removed`, computed against the registry
/// as it exists *before* the removal (neighbors are identified in the
/// pre-removal order).
///
/// Removing a non-active pane leaves the active id unchanged. Removing the
/// active pane falls back to the next pane, else the previous one, else
/// `None` when nothing remains. Pure: the registry is untouched.
///
/// Adding a pane never implicitly activates it; activation-on-add is the
/// host's decision in its own add handler.
#[must_use]
pub fn plan_removal(
    registry: &PaneRegistry,
    removed: &PaneId,
    active: Option<&PaneId>,
) -> Option<PaneId> {
    if active != Some(removed) {
        return active.cloned();
    }
    let panes = registry.list();
    let pos = registry.position(removed)?;
    panes
        .get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|p| panes.get(p)))
        .map(|entry| entry.id().clone())
}

#[cfg(test)]
mod tests {
    use super::plan_removal;
    use crate::registry::PaneRegistry;
    use tabkit_core::id::PaneId;
    use tabkit_core::pane::Pane;

    fn registry(names: &[&str]) -> PaneRegistry {
        let mut registry = PaneRegistry::new();
        for name in names {
            registry.register(Pane::new(*name).id(*name)).unwrap();
        }
        registry
    }

    fn id(name: &str) -> PaneId {
        PaneId::from(name)
    }

    #[test]
    fn removing_inactive_pane_keeps_active() {
        let registry = registry(&["a", "b", "c"]);
        assert_eq!(
            plan_removal(&registry, &id("a"), Some(&id("b"))),
            Some(id("b"))
        );
    }

    #[test]
    fn removing_active_middle_falls_forward() {
        let registry = registry(&["a", "b", "c"]);
        assert_eq!(
            plan_removal(&registry, &id("b"), Some(&id("b"))),
            Some(id("c"))
        );
    }

    #[test]
    fn removing_active_last_falls_back() {
        let registry = registry(&["a", "b", "c"]);
        assert_eq!(
            plan_removal(&registry, &id("c"), Some(&id("c"))),
            Some(id("b"))
        );
    }

    #[test]
    fn removing_sole_pane_yields_none() {
        let registry = registry(&["only"]);
        assert_eq!(plan_removal(&registry, &id("only"), Some(&id("only"))), None);
    }

    #[test]
    fn no_active_pane_stays_none() {
        let registry = registry(&["a", "b"]);
        assert_eq!(plan_removal(&registry, &id("a"), None), None);
    }

    #[test]
    fn unknown_removed_id_with_matching_active_yields_none() {
        let registry = registry(&["a"]);
        assert_eq!(
            plan_removal(&registry, &id("ghost"), Some(&id("ghost"))),
            None
        );
    }
}
