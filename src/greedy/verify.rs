//! Independence and maximality checks.

use super::types::IndependentSet;
use crate::graph::MutableGraph;

/// Returns `true` if no two members of `set` are adjacent in `graph`.
///
/// A member with a self-loop counts as adjacent to itself.
pub fn is_independent<G: MutableGraph>(graph: &G, set: &IndependentSet<G::Node>) -> bool {
    let members = set.as_slice();
    members.iter().enumerate().all(|(i, a)| {
        members[i..].iter().all(|b| !graph.are_adjacent(a, b))
    })
}

/// Returns `true` if every non-member of `graph` has a neighbor in `set`.
///
/// Does not check independence; combine with [`is_independent`].
pub fn is_maximal<G: MutableGraph>(graph: &G, set: &IndependentSet<G::Node>) -> bool {
    graph.nodes().iter().all(|node| {
        set.contains(node)
            || graph
                .neighbors(node)
                .iter()
                .any(|neighbor| set.contains(neighbor))
    })
}
