use super::*;

/// An owned snapshot of the adjacency structure of a graph, possibly with altered edge directions.
///
/// Views only store the adjacency (no payloads) and implement [`AdjacencyList`], so all
/// traversal algorithms can run on them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyView {
    nbs: Vec<Vec<Node>>,
}

impl AdjacencyView {
    /// Copies the out-neighborhoods of `graph` in their enumeration order
    pub fn forward<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            nbs: graph
                .vertices()
                .map(|u| graph.neighbors_of(u).collect())
                .collect(),
        }
    }

    /// Every edge `(u, v)` of `graph` becomes `(v, u)` in the view
    pub fn reversed<G: AdjacencyList>(graph: &G) -> Self {
        let mut nbs = vec![Vec::new(); graph.len()];
        for Edge(u, v) in graph.edges() {
            nbs[v as usize].push(u);
        }
        Self { nbs }
    }

    /// Every edge `(u, v)` of `graph` is present in both directions in the view.
    /// Neighborhoods are sorted and free of duplicates.
    pub fn symmetrized<G: AdjacencyList>(graph: &G) -> Self {
        let mut nbs = vec![Vec::new(); graph.len()];
        for Edge(u, v) in graph.edges() {
            nbs[u as usize].push(v);
            if u != v {
                nbs[v as usize].push(u);
            }
        }

        for list in &mut nbs {
            list.sort_unstable();
            list.dedup();
        }

        Self { nbs }
    }
}

impl GraphNodeOrder for AdjacencyView {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl AdjacencyList for AdjacencyView {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn views() {
        let graph = AdjMatrix::<(), ()>::from_edges(
            [(); 4],
            [((0, 1), ()), ((1, 0), ()), ((2, 1), ()), ((3, 3), ())],
        );

        let forward = AdjacencyView::forward(&graph);
        assert_eq!(forward.edge_set(), graph.edge_set());

        let reversed = AdjacencyView::reversed(&graph);
        assert_eq!(
            reversed.ordered_edges().collect_vec(),
            vec![Edge(0, 1), Edge(1, 0), Edge(1, 2), Edge(3, 3)]
        );

        let sym = AdjacencyView::symmetrized(&graph);
        assert_eq!(sym.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(sym.neighbors_of(3).collect_vec(), vec![3]);
        assert_eq!(sym.number_of_nodes(), 4);
    }
}
