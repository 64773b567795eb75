//! Descendant URL closure.
//!
//! Every node reachable from a root gets the URLs of its whole subtree:
//! for each child in sibling order, the child's own suburls followed by the
//! child's URL. Leaves get an empty list.

use crate::tree::{MenuNode, MenuTree};

/// Fill `suburls` for every node reachable from a discovered root.
///
/// Uses post-order DFS so each node reads finished child lists.
pub(crate) fn propagate_suburls(tree: &mut MenuTree) {
    fn dfs(idx: usize, nodes: &mut [MenuNode], children: &[Vec<usize>]) {
        for &child in &children[idx] {
            dfs(child, nodes, children);
        }

        let mut suburls = Vec::new();
        for &child in &children[idx] {
            suburls.extend_from_slice(&nodes[child].suburls);
            suburls.push(nodes[child].url.clone());
        }
        nodes[idx].suburls = suburls;
    }

    let (nodes, children, roots) = tree.parts_mut();
    let children: &[Vec<usize>] = children;
    for root in roots.iter() {
        for &top in root.children() {
            dfs(top, nodes, children);
        }
    }
}
