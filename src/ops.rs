use std::ops::Range;

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

use crate::{error::*, *};

/// Associates the payload types with a graph
pub trait GraphType {
    /// Payload owned by every vertex
    type VertexData;

    /// Payload owned by every edge
    type EdgeData;
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range `0..n` of all node indices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an error if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        let n = self.number_of_nodes();
        if u < n {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node: u, n })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph in the enumeration order of the
    /// representation (grouped by source in increasing order).
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().sorted_unstable()
    }

    /// Returns the edges of the graph as an unordered set
    fn edge_set(&self) -> FxHashSet<Edge> {
        self.edges().collect()
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph or an error if `u` or `v` is
    /// not a node of the graph.
    fn try_has_edge(&self, u: Node, v: Node) -> Result<bool>;

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    #[track_caller]
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.try_has_edge(u, v).or_panic()
    }

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    #[track_caller]
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Access to the payloads of vertices
pub trait GraphVertexData: GraphType + GraphNodeOrder {
    /// Returns a reference to the payload of `u`
    fn try_vertex(&self, u: Node) -> Result<&Self::VertexData>;

    /// Returns a mutable reference to the payload of `u`
    fn try_vertex_mut(&mut self, u: Node) -> Result<&mut Self::VertexData>;

    /// Returns a reference to the payload of `u`
    /// ** Panics if `u >= n` **
    #[track_caller]
    fn vertex(&self, u: Node) -> &Self::VertexData {
        self.try_vertex(u).or_panic()
    }

    /// Returns a mutable reference to the payload of `u`
    /// ** Panics if `u >= n` **
    #[track_caller]
    fn vertex_mut(&mut self, u: Node) -> &mut Self::VertexData {
        self.try_vertex_mut(u).or_panic()
    }

    /// Returns an iterator over all vertex payloads in index order
    fn vertex_data(&self) -> impl Iterator<Item = &Self::VertexData> + '_;
}

/// Access to the payloads of edges
pub trait GraphEdgeData: GraphType + AdjacencyTest + GraphEdgeOrder {
    /// Returns a reference to the payload of edge `(u, v)`
    fn try_edge(&self, u: Node, v: Node) -> Result<&Self::EdgeData>;

    /// Returns a mutable reference to the payload of edge `(u, v)`
    fn try_edge_mut(&mut self, u: Node, v: Node) -> Result<&mut Self::EdgeData>;

    /// Returns a reference to the payload of edge `(u, v)`
    /// ** Panics if `u >= n || v >= n` or the edge does not exist **
    #[track_caller]
    fn edge(&self, u: Node, v: Node) -> &Self::EdgeData {
        self.try_edge(u, v).or_panic()
    }

    /// Returns a mutable reference to the payload of edge `(u, v)`
    /// ** Panics if `u >= n || v >= n` or the edge does not exist **
    #[track_caller]
    fn edge_mut(&mut self, u: Node, v: Node) -> &mut Self::EdgeData {
        self.try_edge_mut(u, v).or_panic()
    }

    /// Returns an iterator over all edges together with their payloads in the enumeration
    /// order of the representation
    fn edges_with_data(&self) -> impl Iterator<Item = (Edge, &Self::EdgeData)> + '_;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without nodes
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphType + GraphNodeOrder {
    /// Appends a new vertex and returns its index which is always the previous number of nodes
    fn add_vertex(&mut self, data: Self::VertexData) -> Node;

    /// Appends all vertices of the collection in order
    fn add_vertices<I>(&mut self, data: I)
    where
        I: IntoIterator<Item = Self::VertexData>,
    {
        for d in data {
            self.add_vertex(d);
        }
    }

    /// Removes vertex `u` together with all edges incident to it and returns its payload.
    /// Every node `v > u` is renamed to `v - 1` afterwards.
    fn try_remove_vertex(&mut self, u: Node) -> Result<Self::VertexData>;

    /// Removes vertex `u` together with all edges incident to it and returns its payload.
    /// Every node `v > u` is renamed to `v - 1` afterwards.
    /// ** Panics if `u >= n` **
    #[track_caller]
    fn remove_vertex(&mut self, u: Node) -> Self::VertexData {
        self.try_remove_vertex(u).or_panic()
    }

    /// Removes all vertices, always the one with the highest index first
    fn clear(&mut self) {
        while let Some(u) = self.number_of_nodes().checked_sub(1) {
            self.remove_vertex(u);
        }
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphType + AdjacencyTest {
    /// Adds the edge `(u, v)` with payload `data`.
    /// Fails if `u` or `v` is not a node or the edge is already present.
    fn try_add_edge(&mut self, u: Node, v: Node, data: Self::EdgeData) -> Result<()>;

    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    #[track_caller]
    fn add_edge(&mut self, u: Node, v: Node, data: Self::EdgeData) {
        self.try_add_edge(u, v, data).or_panic()
    }

    /// Adds all edges in the collection
    /// ** Panics if any edge is invalid or already present **
    fn add_edges<I, T>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (T, Self::EdgeData)>,
        T: Into<Edge>,
    {
        for (e, data) in edges {
            let Edge(u, v) = e.into();
            self.add_edge(u, v, data);
        }
    }

    /// Removes the directed edge *(u,v)* from the graph and returns its payload.
    /// Fails if `u` or `v` is not a node or the edge does not exist.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<Self::EdgeData>;

    /// Removes the directed edge *(u,v)* from the graph. I.e., the edge FROM u TO v.
    /// ** Panics if the edge is not present or u, v >= n **
    #[track_caller]
    fn remove_edge(&mut self, u: Node, v: Node) -> Self::EdgeData {
        self.try_remove_edge(u, v).or_panic()
    }
}

/// A super trait for creating a graph from scratch from its vertex payloads and edges
pub trait GraphFromScratch: GraphType {
    /// Create a graph from vertex payloads (defining the number of nodes) and edges with
    /// payloads
    fn from_edges<IV, IE, T>(vertices: IV, edges: IE) -> Self
    where
        IV: IntoIterator<Item = Self::VertexData>,
        IE: IntoIterator<Item = (T, Self::EdgeData)>,
        T: Into<Edge>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphVertexEditing + GraphEdgeEditing,
{
    fn from_edges<IV, IE, T>(vertices: IV, edges: IE) -> Self
    where
        IV: IntoIterator<Item = Self::VertexData>,
        IE: IntoIterator<Item = (T, Self::EdgeData)>,
        T: Into<Edge>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices);
        graph.add_edges(edges);
        graph
    }
}

/// Replaces the content of a graph by a deep copy of another graph, possibly of a
/// different representation.
pub trait GraphAssign: GraphVertexEditing + GraphEdgeEditing + Sized {
    /// Clears `self` and replays all vertices (in index order) and then all edges (in the
    /// enumeration order of `other`) into it.
    fn assign_from<G>(&mut self, other: &G)
    where
        G: GraphVertexData<VertexData = Self::VertexData> + GraphEdgeData<EdgeData = Self::EdgeData>,
        Self::VertexData: Clone,
        Self::EdgeData: Clone,
    {
        debug!(
            nodes = other.number_of_nodes(),
            edges = other.number_of_edges(),
            "replaying graph"
        );

        self.clear();
        self.add_vertices(other.vertex_data().cloned());
        for (Edge(u, v), data) in other.edges_with_data() {
            self.add_edge(u, v, data.clone());
        }
    }

    /// Creates a deep copy of `other` in the representation of `Self`
    fn from_graph<G>(other: &G) -> Self
    where
        Self: GraphNew,
        G: GraphVertexData<VertexData = Self::VertexData> + GraphEdgeData<EdgeData = Self::EdgeData>,
        Self::VertexData: Clone,
        Self::EdgeData: Clone,
    {
        let mut graph = Self::new();
        graph.assign_from(other);
        graph
    }
}

impl<G> GraphAssign for G where G: GraphVertexEditing + GraphEdgeEditing {}

/// Compares graphs by structure, independent of their representation
pub trait GraphCompare: GraphVertexData + GraphEdgeData {
    /// Returns *true* if both graphs have the same number of nodes, equal vertex payloads at
    /// every index, and the same set of edges with equal payloads.
    fn structurally_eq<G>(&self, other: &G) -> bool
    where
        G: GraphVertexData<VertexData = Self::VertexData> + GraphEdgeData<EdgeData = Self::EdgeData>,
        Self::VertexData: PartialEq,
        Self::EdgeData: PartialEq,
    {
        self.number_of_nodes() == other.number_of_nodes()
            && self.number_of_edges() == other.number_of_edges()
            && self.vertex_data().eq(other.vertex_data())
            && other
                .edges_with_data()
                .all(|(Edge(u, v), data)| matches!(self.try_edge(u, v), Ok(x) if x == data))
    }
}

impl<G> GraphCompare for G where G: GraphVertexData + GraphEdgeData {}
