/*!
# Errors

Every precondition of the graph operations (valid indices, presence or absence of an edge,
distinct path endpoints, non-empty graphs) is captured by [`GraphError`].

The `try_*` methods of the graph traits return these errors *before* touching the graph, so a
failed call never leaves a partially modified graph behind. Their non-`try` counterparts treat a
violated precondition as a programming error and panic with the error's message.
*/

use thiserror::Error;

use crate::{edge::Edge, node::*};

/// A violated precondition of a graph operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The node is not in `0..n`
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    /// The edge was about to be inserted a second time
    #[error("edge {0} already exists")]
    EdgeExists(Edge),

    /// The edge was accessed or removed but is not in the graph
    #[error("edge {0} does not exist")]
    EdgeMissing(Edge),

    /// Shortest paths are only defined between distinct nodes
    #[error("path query from node {0} to itself")]
    DegeneratePath(Node),

    /// The query needs at least one node
    #[error("graph has no nodes")]
    EmptyGraph,
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

/// Unwraps a [`Result`] and panics with the error message otherwise.
///
/// Used by the panicking counterparts of the `try_*` methods.
pub(crate) trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for Result<T> {
    #[inline]
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(x) => x,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::NodeOutOfRange { node: 4, n: 3 }.to_string(),
            "node 4 is out of range for a graph with 3 nodes"
        );
        assert_eq!(
            GraphError::EdgeExists(Edge(0, 1)).to_string(),
            "edge (0,1) already exists"
        );
        assert_eq!(
            GraphError::EdgeMissing(Edge(2, 0)).to_string(),
            "edge (2,0) does not exist"
        );
    }

    #[test]
    #[should_panic(expected = "graph has no nodes")]
    fn or_panic_panics() {
        let res: Result<()> = Err(GraphError::EmptyGraph);
        res.or_panic();
    }
}
