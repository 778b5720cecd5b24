use crate::geometry::limits::MAX_SELECTION;
use crate::model::Mountain;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection is full; nothing changed.
    Rejected,
}

/// Ordered, duplicate-free, capped set of mountains. Insertion order is
/// display order.
#[derive(Clone, Debug)]
pub struct Selection {
    items: Vec<Mountain>,
    ids: HashSet<String>,
    capacity: usize,
}

impl Default for Selection {
    fn default() -> Self { Self::new() }
}

impl Selection {
    pub fn new() -> Self { Self::with_capacity(MAX_SELECTION) }

    pub fn with_capacity(capacity: usize) -> Self {
        Selection { items: Vec::with_capacity(capacity), ids: HashSet::with_capacity(capacity), capacity }
    }

    /// Removal always succeeds, the cap only blocks additions.
    pub fn toggle(&mut self, mountain: &Mountain) -> ToggleOutcome {
        if self.ids.remove(&mountain.id) {
            self.items.retain(|m| m.id != mountain.id);
            return ToggleOutcome::Removed;
        }
        if self.items.len() >= self.capacity {
            return ToggleOutcome::Rejected;
        }
        self.ids.insert(mountain.id.clone());
        self.items.push(mountain.clone());
        ToggleOutcome::Added
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.items.retain(|m| m.id != id);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool { self.ids.contains(id) }

    pub fn mountains(&self) -> &[Mountain] { &self.items }

    pub fn ids(&self) -> Vec<&str> { self.items.iter().map(|m| m.id.as_str()).collect() }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn is_full(&self) -> bool { self.items.len() >= self.capacity }

    pub fn capacity(&self) -> usize { self.capacity }

    /// Would toggling `id` be refused? True only for unselected ids at the cap.
    pub fn is_blocked(&self, id: &str) -> bool { self.is_full() && !self.contains(id) }
}
