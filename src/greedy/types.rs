//! Independent set container.

use std::fmt;

/// An ordered sequence of node identifiers, no two of them adjacent.
///
/// Order is the order in which the builder selected the nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndependentSet<N> {
    nodes: Vec<N>,
}

impl<N> IndependentSet<N> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a node. Callers are responsible for independence.
    pub(crate) fn push(&mut self, node: N) {
        self.nodes.push(node);
    }

    /// Cardinality of the set.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Members in selection order.
    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    /// Iterates over the members in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Consumes the set, returning its members.
    pub fn into_vec(self) -> Vec<N> {
        self.nodes
    }
}

impl<N: PartialEq> IndependentSet<N> {
    /// Returns `true` if `node` is a member.
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }
}

impl<N> Default for IndependentSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for IndependentSet<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self { nodes }
    }
}

impl<'a, N> IntoIterator for &'a IndependentSet<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Renders as a bracketed, quoted listing: `['39', '10', '42']`.
impl<N: fmt::Display> fmt::Display for IndependentSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{node}'")?;
        }
        write!(f, "]")
    }
}
