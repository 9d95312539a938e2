use super::*;

/// Connectivity predicates for directed graphs.
///
/// Both predicates start a DFS from node `0` and check that it reaches all nodes. A graph without
/// nodes has no node to start from, so the predicates are not defined on it.
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if every node can reach every other node along directed edges.
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no nodes.
    fn try_is_strongly_connected(&self) -> Result<bool> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        // `0` reaches all nodes and all nodes reach `0`
        Ok(self.dfs(0).count() == self.len()
            && AdjacencyView::reversed(self).dfs(0).count() == self.len())
    }

    /// Returns *true* if the graph is connected when ignoring edge directions.
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no nodes.
    fn try_is_weakly_connected(&self) -> Result<bool> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        Ok(AdjacencyView::symmetrized(self).dfs(0).count() == self.len())
    }

    /// Returns *true* if every node can reach every other node along directed edges.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjArray::<(), ()>::from_edges([(); 3], [((0, 1), ()), ((2, 1), ())]);
    /// assert!(g.is_weakly_connected());
    /// assert!(!g.is_strongly_connected());
    ///
    /// g.add_edges([((1, 0), ()), ((1, 2), ())]);
    /// assert!(g.is_strongly_connected());
    /// ```
    ///
    /// ** Panics if the graph has no nodes **
    #[track_caller]
    fn is_strongly_connected(&self) -> bool {
        self.try_is_strongly_connected().or_panic()
    }

    /// Returns *true* if the graph is connected when ignoring edge directions.
    /// ** Panics if the graph has no nodes **
    #[track_caller]
    fn is_weakly_connected(&self) -> bool {
        self.try_is_weakly_connected().or_panic()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Traversal + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_edges<const N: usize>(n: usize, edges: [(Node, Node); N]) -> AdjMatrix<(), ()> {
        AdjMatrix::from_edges(vec![(); n], edges.map(|e| (e, ())))
    }

    #[test]
    fn cycle_is_strongly_connected() {
        let graph = from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert!(graph.is_strongly_connected());
        assert!(graph.is_weakly_connected());
    }

    #[test]
    fn converging_edges_are_only_weakly_connected() {
        let graph = from_edges(3, [(0, 1), (2, 1)]);
        assert!(!graph.is_strongly_connected());
        assert!(graph.is_weakly_connected());
    }

    #[test]
    fn reachable_from_root_is_not_enough() {
        // 0 reaches everyone, but nobody reaches 0
        let graph = from_edges(3, [(0, 1), (1, 2), (2, 1)]);
        assert!(!graph.is_strongly_connected());
        assert!(graph.is_weakly_connected());
    }

    #[test]
    fn isolated_nodes() {
        let single = from_edges(1, []);
        assert!(single.is_strongly_connected());
        assert!(single.is_weakly_connected());

        let graph = from_edges(3, [(0, 1), (1, 0), (2, 2)]);
        assert!(!graph.is_strongly_connected());
        assert!(!graph.is_weakly_connected());
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArray::<(), ()>::new();
        assert_eq!(graph.try_is_strongly_connected(), Err(GraphError::EmptyGraph));
        assert_eq!(graph.try_is_weakly_connected(), Err(GraphError::EmptyGraph));
    }

    #[test]
    #[should_panic(expected = "graph has no nodes")]
    fn empty_graph_panics() {
        AdjMatrix::<(), ()>::new().is_weakly_connected();
    }
}
