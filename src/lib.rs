/*!
`lgraphs` is a library for **directed graphs with payloads**: every vertex and every edge owns a
value of a user-chosen type.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Nodes are positional: removing node `u` renames every node `v > u` to `v - 1`, so the indices
always stay contiguous. For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.
Between any ordered pair of nodes there is at most one edge; self-loops are allowed.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjMatrix`](crate::repr::AdjMatrix): dense, one optional edge payload per ordered pair
- [`AdjArray`](crate::repr::AdjArray): sparse, one list of `(target, payload)` per node
- [`SparseAdjArray`](crate::repr::SparseAdjArray): like `AdjArray` with small inline lists

All representations answer every query identically and can be converted into each other.

# Design

All operations are provided via traits on the graph itself. Operations with a precondition come
in pairs: `try_*` returns a [`GraphError`](crate::error::GraphError) and leaves the graph untouched,
the plain variant panics with the same message.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph representations,
- [`algo`] includes traversals (`graph.bfs(start_node)`), shortest paths and connectivity tests,
- [`gens`] includes a random graph generator and deterministic substructures such as paths/cycles,
- [`error`] includes the error type for violated preconditions.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut g = AdjMatrix::<&str, f64>::new();
let a = g.add_vertex("a");
let b = g.add_vertex("b");
let c = g.add_vertex("c");
g.add_edge(a, b, 1.5);
g.add_edge(b, c, 0.5);

assert_eq!(g.shortest_path(a, c), vec![a, b, c]);
assert!(g.is_weakly_connected() && !g.is_strongly_connected());

g.remove_vertex(b);
assert_eq!(g.number_of_nodes(), 2);
assert_eq!(*g.vertex(1), "c");
assert!(g.is_singleton_graph());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `lgraphs::prelude` includes definitions for nodes and edges, the error type, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
