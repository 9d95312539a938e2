use std::fmt::{Debug, Display};

use crate::Node;

/// A directed edge is defined by its source and its target.
/// Edges have no identity of their own: at most one edge exists per ordered pair.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the source of the edge
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the target of the edge
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns *true* if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: Node) -> bool {
        self.0 == u || self.1 == u
    }

    /// Simple bijection from `0..n^2` to all possible (directed) edges of `n` nodes in
    /// row-major order
    pub fn from_u64(x: u64, n: u64) -> Self {
        debug_assert!(x < n * n);

        let u = x / n;
        let v = x % n;
        Edge(u as Node, v as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<Edge> for (Node, Node) {
    fn from(value: Edge) -> Self {
        (value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64_is_row_major() {
        let n = 3u64;
        let edges: Vec<Edge> = (0..n * n).map(|x| Edge::from_u64(x, n)).collect();
        assert_eq!(edges[0], Edge(0, 0));
        assert_eq!(edges[1], Edge(0, 1));
        assert_eq!(edges[3], Edge(1, 0));
        assert_eq!(edges[8], Edge(2, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Edge(3, 5).to_string(), "(3,5)");
        assert_eq!(format!("{:?}", Edge(3, 5).reverse()), "(5,3)");
        assert!(Edge(2, 2).is_loop());
        assert!(Edge(1, 4).is_incident_to(4));
    }
}
