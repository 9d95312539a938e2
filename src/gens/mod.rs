/*!
# Graph Generators

This module provides random graph generation and deterministic substructures.

The random model is `G(n,p)`: the number of nodes `n` is drawn uniformly from a range and every
ordered pair of nodes (self-loops included) becomes an edge with probability `p`. The generator
[`Gnp`] is configured with a builder-style pattern:

1. Create a generator instance (`Gnp::new()`).
2. Set parameters (`.nodes_between(min, max).prob(p)`).
3. Draw the number of nodes via `sample_nodes()` and the edges via `stream()` or `generate()`.

The [`RandomGraph`] trait runs a generator on a graph in place and fills all payloads with
clones of the given values. The random source is always provided by the caller, so seeding is
under the caller's control.
*/

use rand::Rng;
use tracing::debug;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for replacing the content of a graph by a random graph.
pub trait RandomGraph: GraphVertexEditing + GraphEdgeEditing + GraphEdgeOrder + Sized
where
    Self::VertexData: Clone,
    Self::EdgeData: Clone,
{
    /// Clears the graph and replaces it by a random `G(n,p)` graph where `n` is drawn uniformly
    /// from `min_nodes..=max_nodes`. Every vertex payload is a clone of `vertex_data` and every
    /// edge payload a clone of `edge_data`.
    ///
    /// ** Panics if `min_nodes > max_nodes` or `p` is not in `[0, 1]`; the graph is left
    /// untouched in this case **
    ///
    /// # Example
    /// ```
    /// use lgraphs::{prelude::*, gens::*};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut g = AdjMatrix::<u8, u8>::new();
    /// g.random_graph(&mut rng, 3, 10, 0.5, 1, 2);
    ///
    /// assert!((3..=10).contains(&g.number_of_nodes()));
    /// assert!(g.vertex_data().all(|x| *x == 1));
    /// assert!(g.edges_with_data().all(|(_, x)| *x == 2));
    /// ```
    fn random_graph<R: Rng>(
        &mut self,
        rng: &mut R,
        min_nodes: NumNodes,
        max_nodes: NumNodes,
        p: f64,
        vertex_data: Self::VertexData,
        edge_data: Self::EdgeData,
    ) {
        let generator = Gnp::new().nodes_between(min_nodes, max_nodes).prob(p);
        self.random_graph_with(rng, &generator, vertex_data, edge_data);
    }

    /// Clears the graph and replaces it by a graph drawn from `generator`.
    /// ** Panics if `generator` has no probability set **
    fn random_graph_with<R: Rng>(
        &mut self,
        rng: &mut R,
        generator: &Gnp,
        vertex_data: Self::VertexData,
        edge_data: Self::EdgeData,
    ) {
        let n = generator.sample_nodes(rng);
        let edges = generator.stream(rng, n);

        self.clear();
        self.add_vertices((0..n).map(|_| vertex_data.clone()));
        for Edge(u, v) in edges {
            self.add_edge(u, v, edge_data.clone());
        }

        debug!(
            nodes = n,
            edges = self.number_of_edges(),
            ?generator,
            "generated random graph"
        );
    }

    /// Creates a random `G(n,p)` graph with exactly `n` nodes
    fn gnp<R: Rng>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        vertex_data: Self::VertexData,
        edge_data: Self::EdgeData,
    ) -> Self
    where
        Self: GraphNew,
    {
        let mut graph = Self::new();
        graph.random_graph_with(rng, &Gnp::new().nodes(n).prob(p), vertex_data, edge_data);
        graph
    }
}

impl<G> RandomGraph for G
where
    G: GraphVertexEditing + GraphEdgeEditing + GraphEdgeOrder,
    G::VertexData: Clone,
    G::EdgeData: Clone,
{
}
