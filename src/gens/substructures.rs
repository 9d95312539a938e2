/*!
# Substructure Generators

This module provides utility methods to add **paths** and **cycles** to an already existing
graph. Every inserted edge receives a clone of the given payload.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = AdjArray::<(), u8>::from_edges([(); 5], std::iter::empty::<(Edge, u8)>());
g.connect_path([0, 1, 2], 1);
g.connect_cycle([2, 3, 4], 2);

assert_eq!(
    g.ordered_edges().collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
assert_eq!(*g.edge(4, 2), 2);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles) inside an already existing
/// graph.
pub trait GeneratorSubstructures: GraphType {
    /// Connects the given nodes in order with a **path**: every consecutive pair `(u, v)` is
    /// connected by the edge `(u, v)`.
    /// ** Panics if a node is out of range or an edge already exists **
    fn connect_path<P>(&mut self, nodes_on_path: P, data: Self::EdgeData)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. A single node receives a self-loop.
    /// ** Panics if a node is out of range or an edge already exists **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, data: Self::EdgeData)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
    G::EdgeData: Clone,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, data: Self::EdgeData)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, data.clone());
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, data: Self::EdgeData)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur, data.clone());
                prev = cur;
            }

            self.add_edge(prev, first, data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn empty(n: usize) -> AdjMatrix<(), u32> {
        AdjMatrix::from_edges(vec![(); n], std::iter::empty::<(Edge, u32)>())
    }

    #[test]
    fn test_connect_path() {
        {
            let mut g = empty(6);
            g.connect_path([], 0);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = empty(6);
            g.connect_path([1], 0);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = empty(6);
            g.connect_path([2, 1], 5);
            assert_eq!(g.number_of_edges(), 1);
            assert_eq!(*g.edge(2, 1), 5);
        }

        {
            let mut g = empty(6);
            g.connect_path([0, 3, 1, 4], 0);
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = empty(6);
            g.connect_cycle([], 0);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = empty(6);
            g.connect_cycle([1], 0);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(1, 1));
        }

        {
            let mut g = empty(6);
            g.connect_cycle([0, 3, 1, 4], 9);
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1), Edge(4, 0)]
            );
            assert!(g.edges_with_data().all(|(_, data)| *data == 9));
        }
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn overlapping_substructures() {
        let mut g = empty(3);
        g.connect_path([0, 1, 2], 0);
        g.connect_cycle([1, 2], 0);
    }
}
