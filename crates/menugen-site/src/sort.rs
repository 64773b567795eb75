//! Sibling ordering.
//!
//! Siblings with a position come first, ordered by position. Siblings
//! without one follow. Ties (equal positions, or both absent) are broken by
//! display name, compared case-sensitively.

use std::cmp::Ordering;

use crate::tree::{MenuNode, MenuTree};

/// Compare two siblings.
#[must_use]
pub fn compare_siblings(a: &MenuNode, b: &MenuNode) -> Ordering {
    let by_position = match (a.position, b.position) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_position.then_with(|| a.name.cmp(&b.name))
}

/// Sort every children list in the tree, roots and nodes alike.
pub(crate) fn sort_siblings(tree: &mut MenuTree) {
    let (nodes, children, roots) = tree.parts_mut();
    let nodes: &[MenuNode] = nodes;

    for list in children.iter_mut() {
        list.sort_by(|&a, &b| compare_siblings(&nodes[a], &nodes[b]));
    }
    for root in roots.iter_mut() {
        root.children_mut()
            .sort_by(|&a, &b| compare_siblings(&nodes[a], &nodes[b]));
    }
}
