//! Parent/child adjacency for self-referential records

use std::collections::{BTreeSet, HashMap};

use crate::store::RecordId;

/// Tracks the single parent→children edge between records.
///
/// Holds only id pairs; record lifecycle is owned by the store. All
/// existence checks are O(1).
#[derive(Debug, Default)]
pub struct RelationIndex {
    /// child id -> parent id (at most one parent per child)
    parent: HashMap<RecordId, RecordId>,
    /// parent id -> sorted child ids
    children: HashMap<RecordId, BTreeSet<RecordId>>,
}

impl RelationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `parent` as the parent of `child`, dropping any previous
    /// parent edge of `child` first.
    ///
    /// The store validates both ids before calling in; the index itself
    /// has no failure modes.
    pub fn link(&mut self, child: RecordId, parent: RecordId) {
        self.unlink(child);
        self.parent.insert(child, parent);
        self.children.entry(parent).or_default().insert(child);
    }

    /// Removes the parent edge of `child`, if any.
    pub fn unlink(&mut self, child: RecordId) {
        if let Some(previous) = self.parent.remove(&child) {
            if let Some(siblings) = self.children.get_mut(&previous) {
                siblings.remove(&child);
                if siblings.is_empty() {
                    self.children.remove(&previous);
                }
            }
        }
    }

    pub fn has_parent(&self, id: RecordId) -> bool {
        self.parent.contains_key(&id)
    }

    pub fn has_children(&self, id: RecordId) -> bool {
        self.children.contains_key(&id)
    }

    /// Returns the parent of `id`, if any.
    pub fn parent_of(&self, id: RecordId) -> Option<RecordId> {
        self.parent.get(&id).copied()
    }

    /// Returns the children of `id` in ascending id order; empty for ids
    /// with no children, including ids that were never created.
    pub fn children_of(&self, id: RecordId) -> BTreeSet<RecordId> {
        self.children.get(&id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_registers_both_directions() {
        let mut index = RelationIndex::new();
        index.link(2, 1);

        assert!(index.has_parent(2));
        assert!(index.has_children(1));
        assert_eq!(index.parent_of(2), Some(1));
        assert!(index.children_of(1).contains(&2));
    }

    #[test]
    fn test_relink_drops_old_edge() {
        let mut index = RelationIndex::new();
        index.link(3, 1);
        index.link(3, 2);

        assert_eq!(index.parent_of(3), Some(2));
        assert!(!index.children_of(1).contains(&3));
        assert!(index.children_of(2).contains(&3));
        assert!(!index.has_children(1));
    }

    #[test]
    fn test_unlink_clears_edge() {
        let mut index = RelationIndex::new();
        index.link(2, 1);
        index.unlink(2);

        assert!(!index.has_parent(2));
        assert!(!index.has_children(1));
        assert!(index.children_of(1).is_empty());
    }

    #[test]
    fn test_unlink_without_edge_is_noop() {
        let mut index = RelationIndex::new();
        index.unlink(42);
        assert!(!index.has_parent(42));
    }

    #[test]
    fn test_many_children_sorted_ascending() {
        let mut index = RelationIndex::new();
        index.link(5, 1);
        index.link(3, 1);
        index.link(9, 1);

        let children: Vec<_> = index.children_of(1).into_iter().collect();
        assert_eq!(children, vec![3, 5, 9]);
    }

    #[test]
    fn test_absent_id_has_no_relations() {
        let index = RelationIndex::new();
        assert!(!index.has_parent(99));
        assert!(!index.has_children(99));
        assert!(index.children_of(99).is_empty());
    }
}
