/*!
# Conversions between Representations

Any [`DirectedGraph`] can be converted into any other representation with the same payload
types. The conversion replays all vertices in index order and then all edges of the source in
its enumeration order (see [`GraphAssign`]). For example, converting an [`AdjMatrix`] into an
[`AdjArray`] produces out-neighborhoods sorted by target.

```
use lgraphs::prelude::*;

let edges = [((2, 0), 1), ((0, 2), 2), ((2, 1), 3)];
let matrix = AdjMatrix::<char, u8>::from_edges(['a', 'b', 'c'], edges);
let list = AdjArray::from(&matrix);

assert!(list == matrix);
assert_eq!(list.dump(), "0: 2 \n1: \n2: 0 1 \n");

let mut other = SparseAdjArray::<char, u8>::new();
other.assign_from(&list);
assert!(other == matrix);
```
*/

use super::*;

impl<V, E, A, B> From<&DirectedGraph<V, A>> for DirectedGraph<V, B>
where
    V: Clone,
    E: Clone,
    A: Neighborhood<Payload = E>,
    B: Neighborhood<Payload = E>,
{
    fn from(other: &DirectedGraph<V, A>) -> Self {
        Self::from_graph(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, gens::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..20 {
            let mut matrix = AdjMatrix::<u32, u32>::new();
            matrix.random_graph(rng, 1, 15, 0.3, 0, 0);
            for (u, v) in matrix.ordered_edges().map(|e| (e.0, e.1)).collect_vec() {
                *matrix.edge_mut(u, v) = rng.random();
            }
            for u in matrix.vertices_range() {
                *matrix.vertex_mut(u) = rng.random();
            }

            let list = AdjArray::from(&matrix);
            let sparse = SparseAdjArray::from(&list);
            let back = AdjMatrix::from(&sparse);

            assert_eq!(list.edge_set(), matrix.edge_set());
            assert!(list == matrix && sparse == matrix && back == matrix);
            assert!(back.vertex_data().eq(matrix.vertex_data()));
            assert_eq!(back.dump(), matrix.dump());

            // matrix enumeration is row-major, so the replayed lists are sorted
            assert_eq!(list.edges().collect_vec(), matrix.edges().collect_vec());
        }
    }

    #[test]
    fn assignment_overwrites() {
        let source = AdjMatrix::<u8, u8>::from_edges([1, 2], [((1, 0), 3)]);
        let mut target = AdjArray::<u8, u8>::from_edges([7; 5], [((0, 1), 1), ((4, 4), 1)]);

        target.assign_from(&source);
        assert_eq!(target.number_of_nodes(), 2);
        assert_eq!(target.edges_with_data().collect_vec(), vec![(Edge(1, 0), &3)]);
        assert!(target == source);

        // the source is not affected by later changes of the copy
        target.remove_vertex(0);
        assert_eq!(source.number_of_nodes(), 2);
        assert!(source.has_edge(1, 0));
    }

    /// Number of distinct shortest paths from `from` to `to`
    fn count_shortest_paths<G: AdjacencyList>(graph: &G, from: Node, to: Node) -> usize {
        let n = graph.len();
        let mut dist = vec![None; n];
        let mut count = vec![0usize; n];
        dist[from as usize] = Some(0u32);
        count[from as usize] = 1;

        let mut queue = std::collections::VecDeque::from([from]);
        while let Some(u) = queue.pop_front() {
            let du = dist[u as usize].unwrap_or_default();
            for v in graph.neighbors_of(u) {
                match dist[v as usize] {
                    None => {
                        dist[v as usize] = Some(du + 1);
                        count[v as usize] = count[u as usize];
                        queue.push_back(v);
                    }
                    Some(dv) if dv == du + 1 => {
                        count[v as usize] = count[v as usize].saturating_add(count[u as usize]);
                    }
                    _ => {}
                }
            }
        }

        count[to as usize]
    }

    /// Compares two representations on the queries that do not depend on the edge order
    fn assert_equivalent<A, B>(a: &DirectedGraph<u32, A>, b: &DirectedGraph<u32, B>)
    where
        A: Neighborhood<Payload = u32>,
        B: Neighborhood<Payload = u32>,
    {
        let n = a.number_of_nodes();
        assert_eq!(n, b.number_of_nodes());
        assert_eq!(a.number_of_edges(), b.number_of_edges());
        assert_eq!(a.edge_set(), b.edge_set());
        assert!(a == b);

        for (u, v) in a.vertices_range().cartesian_product(a.vertices_range()) {
            assert_eq!(a.has_edge(u, v), b.has_edge(u, v));
        }

        if n > 0 {
            assert_eq!(a.is_strongly_connected(), b.is_strongly_connected());
            assert_eq!(a.is_weakly_connected(), b.is_weakly_connected());
        }

        if n > 1 {
            for (u, v) in [(0, n - 1), (n - 1, 0), (n / 2, 0), (1, n / 2)] {
                if u == v {
                    continue;
                }
                assert_eq!(a.shortest_path_length(u, v), b.shortest_path_length(u, v));

                // ties may be broken differently by the row orders
                if count_shortest_paths(a, u, v) <= 1 {
                    let path = a.shortest_path(u, v);
                    assert_eq!(path, b.shortest_path(u, v));
                    assert!(path.iter().tuple_windows().all(|(&x, &y)| a.has_edge(x, y)));
                }
            }
        }
    }

    #[test]
    fn random_operations_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xc0ffee);

        let mut matrix = AdjMatrix::<u32, u32>::new();
        let mut list = AdjArray::<u32, u32>::new();
        let mut sparse = SparseAdjArray::<u32, u32>::new();

        for _ in 0..2000 {
            let n = matrix.number_of_nodes();
            let data = rng.random_range(0..4);

            match rng.random_range(0..10) {
                0 | 1 => {
                    matrix.add_vertex(data);
                    list.add_vertex(data);
                    sparse.add_vertex(data);
                }
                2 if n > 0 => {
                    let u = rng.random_range(0..n);
                    let x = matrix.remove_vertex(u);
                    assert_eq!(list.remove_vertex(u), x);
                    assert_eq!(sparse.remove_vertex(u), x);
                }
                3..=6 if n > 0 => {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let res = matrix.try_add_edge(u, v, data);
                    assert_eq!(list.try_add_edge(u, v, data), res);
                    assert_eq!(sparse.try_add_edge(u, v, data), res);
                }
                7 | 8 if n > 0 => {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let res = matrix.try_remove_edge(u, v);
                    assert_eq!(list.try_remove_edge(u, v), res);
                    assert_eq!(sparse.try_remove_edge(u, v), res);
                }
                9 => {
                    let seed = data as u64;
                    matrix.random_graph(&mut Pcg64Mcg::seed_from_u64(seed), 0, 12, 0.2, data, 1);
                    list.random_graph(&mut Pcg64Mcg::seed_from_u64(seed), 0, 12, 0.2, data, 1);
                    sparse.random_graph(&mut Pcg64Mcg::seed_from_u64(seed), 0, 12, 0.2, data, 1);
                }
                _ => {}
            }

            assert_equivalent(&matrix, &list);
            assert_equivalent(&list, &sparse);
        }
    }

    /// Alternately generates one representation at random, copies it into the other and checks
    /// that both answer all queries identically, also after removing a vertex and an edge.
    #[test]
    fn copies_behave_identically() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

        let mut matrix = AdjMatrix::<u32, u32>::new();
        let mut list = AdjArray::<u32, u32>::new();

        for round in 0..200 {
            if round % 2 == 0 {
                matrix.random_graph(rng, 3, 10, 0.5, 0, 0);
                list.assign_from(&matrix);
            } else {
                list.random_graph(rng, 3, 10, 0.5, 0, 0);
                matrix.assign_from(&list);
            }

            for _ in 0..2 {
                let n = matrix.number_of_nodes();
                assert_eq!(n, list.number_of_nodes());
                assert_eq!(matrix.has_edge(0, n - 1), list.has_edge(0, n - 1));
                assert_eq!(matrix.shortest_path(0, n - 1), list.shortest_path(0, n - 1));
                assert_eq!(
                    matrix.shortest_path_length(0, n - 1),
                    list.shortest_path_length(0, n - 1)
                );
                assert_eq!(matrix.is_weakly_connected(), list.is_weakly_connected());
                assert_eq!(matrix.is_strongly_connected(), list.is_strongly_connected());

                matrix.remove_vertex(0);
                list.remove_vertex(0);

                let edges = matrix.edges().collect_vec();
                assert_eq!(edges, list.edges().collect_vec());

                if let Some(&Edge(u, v)) = edges.first() {
                    assert_eq!(matrix.remove_edge(u, v), list.remove_edge(u, v));
                }
            }
        }
    }
}
