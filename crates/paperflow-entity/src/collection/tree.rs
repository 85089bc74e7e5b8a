//! Collection tree construction for hierarchical display.
//!
//! Turns a flat, owner-scoped list of collection rows into a forest of
//! [`CollectionNode`] trees. Child ordering follows the input ordering, so
//! callers that want alphabetical children sort before building.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::CollectionSummary;

/// A node in the collection tree.
///
/// Derived read-only projection of a collection; built fresh on every read
/// and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionNode {
    /// Collection ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Parent collection ID as stored (None for roots).
    pub parent_id: Option<Uuid>,
    /// Number of papers directly associated with this collection.
    pub paper_count: i64,
    /// Child collection nodes, in input order.
    pub children: Vec<CollectionNode>,
}

impl CollectionNode {
    /// Total number of nodes in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CollectionNode::subtree_len)
            .sum::<usize>()
    }
}

/// Build a forest of collection trees from a flat list.
///
/// A collection whose `parent_id` does not resolve within the input set
/// (for example the parent belongs to another owner, or was deleted
/// concurrently) is treated as a root rather than an error. A collection
/// that names itself as parent is likewise demoted to a root. Each node is
/// attached at most once, so corrupted cyclic input cannot make this loop.
pub fn build_tree(collections: Vec<CollectionSummary>) -> Vec<CollectionNode> {
    let ids: HashSet<Uuid> = collections.iter().map(|c| c.id).collect();

    // First pass: partition into roots and per-parent child lists,
    // preserving input order within each bucket.
    let mut children_of: HashMap<Uuid, Vec<CollectionSummary>> = HashMap::new();
    let mut roots: Vec<CollectionSummary> = Vec::new();

    for collection in collections {
        match collection.parent_id {
            Some(parent_id) if parent_id != collection.id && ids.contains(&parent_id) => {
                children_of.entry(parent_id).or_default().push(collection);
            }
            _ => roots.push(collection),
        }
    }

    // Second pass: assemble each root's subtree by draining child buckets.
    roots
        .into_iter()
        .map(|root| attach_children(root, &mut children_of))
        .collect()
}

/// Convert one summary row into a node, moving its children out of the
/// bucket map. Removal guarantees a bucket is consumed at most once.
fn attach_children(
    summary: CollectionSummary,
    children_of: &mut HashMap<Uuid, Vec<CollectionSummary>>,
) -> CollectionNode {
    let children = children_of
        .remove(&summary.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach_children(child, children_of))
        .collect();

    CollectionNode {
        id: summary.id,
        name: summary.name,
        description: summary.description,
        color: summary.color,
        parent_id: summary.parent_id,
        paper_count: summary.paper_count,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: Uuid, name: &str, parent_id: Option<Uuid>) -> CollectionSummary {
        CollectionSummary {
            id,
            name: name.to_string(),
            description: None,
            color: None,
            parent_id,
            paper_count: 0,
        }
    }

    #[test]
    fn test_chain_of_three() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let tree = build_tree(vec![
            summary(a, "root", None),
            summary(b, "mid", Some(a)),
            summary(c, "leaf", Some(b)),
        ]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, a);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].id, b);
        assert_eq!(tree[0].children[0].children.len(), 1);
        assert_eq!(tree[0].children[0].children[0].id, c);
    }

    #[test]
    fn test_node_count_preserved() {
        let root = Uuid::new_v4();
        let mut input = vec![summary(root, "root", None)];
        for i in 0..10 {
            input.push(summary(Uuid::new_v4(), &format!("child {i}"), Some(root)));
        }

        let tree = build_tree(input);
        let total: usize = tree.iter().map(CollectionNode::subtree_len).sum();
        assert_eq!(total, 11);
    }

    #[test]
    fn test_missing_parent_becomes_root() {
        let orphan = Uuid::new_v4();
        let tree = build_tree(vec![summary(orphan, "orphan", Some(Uuid::new_v4()))]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, orphan);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_self_parent_becomes_root() {
        let id = Uuid::new_v4();
        let tree = build_tree(vec![summary(id, "loop", Some(id))]);

        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_children_keep_input_order() {
        let root = Uuid::new_v4();
        let (b, a) = (Uuid::new_v4(), Uuid::new_v4());
        let tree = build_tree(vec![
            summary(root, "root", None),
            summary(b, "beta", Some(root)),
            summary(a, "alpha", Some(root)),
        ]);

        let names: Vec<&str> = tree[0].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_multiple_roots() {
        let tree = build_tree(vec![
            summary(Uuid::new_v4(), "one", None),
            summary(Uuid::new_v4(), "two", None),
        ]);
        assert_eq!(tree.len(), 2);
    }
}
