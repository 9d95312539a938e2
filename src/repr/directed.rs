/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with a vertex payload type
and a [`Neighborhood`] type, which controls how outgoing edges and their payloads are stored.

## Provided Representations

- [`AdjMatrix`]: dense: one optional payload slot per ordered pair of nodes.
  `O(1)` edge queries, `O(n)` to append a node, `O(n^2)` memory.
- [`AdjArray`]: sparse: per node a list of `(target, payload)` in insertion order.
  `O(deg)` edge queries, amortized `O(1)` to append a node, memory linear in the number of edges.
- [`SparseAdjArray`]: like [`AdjArray`] but stores up to four edges per node inline.

All representations answer every query identically for the same sequence of operations, apart
from the enumeration order of edges and the text produced by [`Display`].

## Design
Vertex payloads are kept in a `Vec<V>` indexed by node. Removing node `u` removes its payload,
its neighborhood and, in a single pass per remaining neighborhood, every edge into `u` while
shifting all higher targets down by one.
*/

use std::fmt::{self, Display, Formatter};

use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph owning a payload per vertex and per edge.
///
/// # Type parameters
/// - `V`: payload of a vertex
/// - `Nbs`: [`Neighborhood`] implementation used for outgoing adjacency (and edge payloads).
#[derive(Clone, Debug)]
pub struct DirectedGraph<V, Nbs>
where
    Nbs: Neighborhood,
{
    vertices: Vec<V>,
    out_nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Directed graph using an adjacency matrix of optional edge payloads.
pub type AdjMatrix<V, E> = DirectedGraph<V, MatrixNeighborhood<E>>;

/// Directed graph using adjacency arrays (`Vec<(Node, E)>`).
pub type AdjArray<V, E> = DirectedGraph<V, ArrNeighborhood<E>>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[(Node, E); 4]>`).
pub type SparseAdjArray<V, E> = DirectedGraph<V, SparseNeighborhood<E>>;

impl<V, Nbs: Neighborhood> Default for DirectedGraph<V, Nbs> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            out_nbs: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<V, Nbs: Neighborhood> DirectedGraph<V, Nbs> {
    /// Creates an empty graph with space reserved for `n` nodes
    pub fn with_capacity(n: NumNodes) -> Self {
        Self {
            vertices: Vec::with_capacity(n as usize),
            out_nbs: Vec::with_capacity(n as usize),
            num_edges: 0,
        }
    }

    /// Returns the adjacency dump of the graph (see [`Display`])
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn check_edge(&self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)
    }
}

impl<V, Nbs: Neighborhood> GraphType for DirectedGraph<V, Nbs> {
    type VertexData = V;
    type EdgeData = Nbs::Payload;
}

impl<V, Nbs: Neighborhood> GraphNew for DirectedGraph<V, Nbs> {
    fn new() -> Self {
        Self::default()
    }
}

impl<V, Nbs: Neighborhood> GraphNodeOrder for DirectedGraph<V, Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl<V, Nbs: Neighborhood> GraphEdgeOrder for DirectedGraph<V, Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V, Nbs: Neighborhood> AdjacencyList for DirectedGraph<V, Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }
}

impl<V, Nbs: Neighborhood> AdjacencyTest for DirectedGraph<V, Nbs> {
    fn try_has_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_edge(u, v)?;
        Ok(self.out_nbs[u as usize].has_neighbor(v))
    }
}

impl<V, Nbs: Neighborhood> GraphVertexData for DirectedGraph<V, Nbs> {
    fn try_vertex(&self, u: Node) -> Result<&V> {
        self.check_node(u)?;
        Ok(&self.vertices[u as usize])
    }

    fn try_vertex_mut(&mut self, u: Node) -> Result<&mut V> {
        self.check_node(u)?;
        Ok(&mut self.vertices[u as usize])
    }

    fn vertex_data(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }
}

impl<V, Nbs: Neighborhood> GraphEdgeData for DirectedGraph<V, Nbs> {
    fn try_edge(&self, u: Node, v: Node) -> Result<&Nbs::Payload> {
        self.check_edge(u, v)?;
        self.out_nbs[u as usize]
            .payload(v)
            .ok_or(GraphError::EdgeMissing(Edge(u, v)))
    }

    fn try_edge_mut(&mut self, u: Node, v: Node) -> Result<&mut Nbs::Payload> {
        self.check_edge(u, v)?;
        self.out_nbs[u as usize]
            .payload_mut(v)
            .ok_or(GraphError::EdgeMissing(Edge(u, v)))
    }

    fn edges_with_data(&self) -> impl Iterator<Item = (Edge, &Nbs::Payload)> + '_ {
        self.out_nbs
            .iter()
            .enumerate()
            .flat_map(|(u, nbs)| nbs.entries().map(move |(v, data)| (Edge(u as Node, v), data)))
    }
}

impl<V, Nbs: Neighborhood> GraphVertexEditing for DirectedGraph<V, Nbs> {
    fn add_vertex(&mut self, data: V) -> Node {
        let u = self.number_of_nodes();
        for nbs in &mut self.out_nbs {
            nbs.push_node();
        }
        self.out_nbs.push(Nbs::new(u + 1));
        self.vertices.push(data);
        u
    }

    fn try_remove_vertex(&mut self, u: Node) -> Result<V> {
        self.check_node(u)?;

        let data = self.vertices.remove(u as usize);
        let out = self.out_nbs.remove(u as usize);

        // Edges out of `u` (including a possible loop) are dropped with `out`, edges into `u`
        // are dropped by the remaining neighborhoods
        let mut removed = out.num_of_neighbors();
        for nbs in &mut self.out_nbs {
            removed += nbs.remove_node(u);
        }
        self.num_edges -= removed;

        trace!(node = u, removed_edges = removed, "removed vertex");
        Ok(data)
    }
}

impl<V, Nbs: Neighborhood> GraphEdgeEditing for DirectedGraph<V, Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node, data: Nbs::Payload) -> Result<()> {
        self.check_edge(u, v)?;

        let nbs = &mut self.out_nbs[u as usize];
        if nbs.has_neighbor(v) {
            return Err(GraphError::EdgeExists(Edge(u, v)));
        }
        nbs.add_neighbor(v, data);
        self.num_edges += 1;
        Ok(())
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<Nbs::Payload> {
        self.check_edge(u, v)?;

        let data = self.out_nbs[u as usize]
            .try_remove_neighbor(v)
            .ok_or(GraphError::EdgeMissing(Edge(u, v)))?;
        self.num_edges -= 1;
        Ok(data)
    }
}

impl<V, Nbs: Neighborhood> Display for DirectedGraph<V, Nbs> {
    /// Writes one line per node: a row of `0`/`1` for [`AdjMatrix`] and `u: v1 v2 ...` for the
    /// list representations. The format is meant for humans only.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (u, nbs) in self.out_nbs.iter().enumerate() {
            nbs.fmt_row(f, u as Node)?;
        }
        Ok(())
    }
}

impl<V, E, A, B> PartialEq<DirectedGraph<V, B>> for DirectedGraph<V, A>
where
    V: PartialEq,
    E: PartialEq,
    A: Neighborhood<Payload = E>,
    B: Neighborhood<Payload = E>,
{
    fn eq(&self, other: &DirectedGraph<V, B>) -> bool {
        self.structurally_eq(other)
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    (
        GraphNew,
        GraphVertexEditing,
        GraphEdgeEditing,
        GraphEdgeData,
        Renumbering,
        Clear
    )
);

test_graph_ops!(
    test_adj_array,
    AdjArray,
    (
        GraphNew,
        GraphVertexEditing,
        GraphEdgeEditing,
        GraphEdgeData,
        Renumbering,
        Clear
    )
);

test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    (
        GraphNew,
        GraphVertexEditing,
        GraphEdgeEditing,
        GraphEdgeData,
        Renumbering,
        Clear
    )
);
