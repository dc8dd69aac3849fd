#![forbid(unsafe_code)]

//! Ordered pane registry.

use tabkit_core::error::TabsError;
use tabkit_core::id::PaneId;
use tabkit_core::pane::Pane;

/// One registered pane: the host's pane plus its resolved id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: PaneId,
    pane: Pane,
}

impl Entry {
    /// Resolved identifier (explicit name or positional fallback).
    #[must_use]
    pub fn id(&self) -> &PaneId {
        &self.id
    }

    /// The pane as the host supplied it.
    #[must_use]
    pub fn pane(&self) -> &Pane {
        &self.pane
    }

    /// Mutable access for host-side label/flag updates.
    pub fn pane_mut(&mut self) -> &mut Pane {
        &mut self.pane
    }
}

/// Changes produced by a [`PaneRegistry::sync`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncDelta {
    /// Ids present after the sync that were absent before, in order.
    pub added: Vec<PaneId>,
    /// Ids present before the sync that are now gone, in order.
    pub removed: Vec<PaneId>,
}

impl SyncDelta {
    /// Whether the sync changed the id set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The ordered set of registered panes. Insertion order is display and
/// navigation order; ids are unique.
#[derive(Debug, Clone, Default)]
pub struct PaneRegistry {
    entries: Vec<Entry>,
}

impl PaneRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a pane's id: the explicit name when the host gave one, else
    /// the zero-based sibling position as text.
    #[must_use]
    pub fn resolve_id(explicit: Option<&PaneId>, fallback_index: usize) -> PaneId {
        explicit
            .cloned()
            .unwrap_or_else(|| PaneId::positional(fallback_index))
    }

    /// Append a pane. A duplicate explicit id keeps the first registration
    /// and reports the duplicate as a configuration diagnostic.
    pub fn register(&mut self, pane: Pane) -> Result<&Entry, TabsError> {
        let id = Self::resolve_id(pane.explicit_id(), self.entries.len());
        if self.contains(&id) {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = "tabs.duplicate_id", id = %id);
            return Err(TabsError::DuplicateId(id));
        }
        self.entries.push(Entry { id, pane });
        Ok(self.entries.last().unwrap_or_else(|| unreachable!()))
    }

    /// Remove a pane by id.
    pub fn unregister(&mut self, id: &PaneId) -> Option<Pane> {
        let pos = self.position(id)?;
        Some(self.entries.remove(pos).pane)
    }

    /// Replace the registered set with the host's declarative list,
    /// diffing by id. Order after the sync is the new list's order.
    ///
    /// Positional fallback ids are re-resolved against the new list, so an
    /// unnamed pane keeps its identity only while its position is stable —
    /// the same contract the positional-id scheme has always had.
    /// Duplicates within the new list keep the first occurrence.
    pub fn sync(&mut self, panes: Vec<Pane>) -> (SyncDelta, Vec<TabsError>) {
        let mut next: Vec<Entry> = Vec::with_capacity(panes.len());
        let mut errors = Vec::new();
        for pane in panes {
            let id = Self::resolve_id(pane.explicit_id(), next.len());
            if next.iter().any(|e| e.id == id) {
                #[cfg(feature = "tracing")]
                tracing::warn!(message = "tabs.duplicate_id", id = %id);
                errors.push(TabsError::DuplicateId(id));
                continue;
            }
            next.push(Entry { id, pane });
        }

        let delta = SyncDelta {
            added: next
                .iter()
                .filter(|e| !self.contains(&e.id))
                .map(|e| e.id.clone())
                .collect(),
            removed: self
                .entries
                .iter()
                .filter(|e| !next.iter().any(|n| n.id == e.id))
                .map(|e| e.id.clone())
                .collect(),
        };
        self.entries = next;
        (delta, errors)
    }

    /// All entries in display order.
    #[must_use]
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    /// Ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &PaneId> {
        self.entries.iter().map(Entry::id)
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &PaneId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: &PaneId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| &e.id == id)
    }

    /// Display position of an id.
    #[must_use]
    pub fn position(&self, id: &PaneId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    /// Whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: &PaneId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    /// Number of registered panes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
