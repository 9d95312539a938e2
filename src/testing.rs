/// Shared test suite for all graph representations.
///
/// Every arm checks `$graph<u32, u32>` against a naive reference model consisting of the list of
/// vertex payloads and an `n x n` matrix of optional edge payloads.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::*, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            type Graph = $graph<u32, u32>;

            #[derive(Clone, Debug, Default)]
            struct Model {
                vertices: Vec<u32>,
                edges: Vec<Vec<Option<u32>>>,
            }

            impl Model {
                fn n(&self) -> NumNodes {
                    self.vertices.len() as NumNodes
                }

                fn add_vertex(&mut self, data: u32) -> Node {
                    for row in &mut self.edges {
                        row.push(None);
                    }
                    self.vertices.push(data);
                    self.edges.push(vec![None; self.vertices.len()]);
                    self.n() - 1
                }

                fn remove_vertex(&mut self, u: Node) -> u32 {
                    self.edges.remove(u as usize);
                    for row in &mut self.edges {
                        row.remove(u as usize);
                    }
                    self.vertices.remove(u as usize)
                }

                /// All edges with payloads in row-major order
                fn edge_list(&self) -> Vec<(Edge, u32)> {
                    self.edges
                        .iter()
                        .enumerate()
                        .flat_map(|(u, row)| {
                            row.iter().enumerate().filter_map(move |(v, x)| {
                                x.map(|x| (Edge(u as Node, v as Node), x))
                            })
                        })
                        .collect_vec()
                }

                fn assert_matches(&self, graph: &Graph) {
                    let n = self.n();
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.is_empty(), n == 0);
                    assert_eq!(graph.vertex_data().copied().collect_vec(), self.vertices);

                    let edges = self.edge_list();
                    assert_eq!(graph.number_of_edges() as usize, edges.len());

                    let mut graph_edges = graph
                        .edges_with_data()
                        .map(|(e, x)| (e, *x))
                        .collect_vec();
                    graph_edges.sort_unstable();
                    assert_eq!(graph_edges, edges);

                    for u in 0..n {
                        assert_eq!(
                            graph.degree_of(u) as usize,
                            self.edges[u as usize].iter().flatten().count()
                        );
                        for v in 0..n {
                            let expected = self.edges[u as usize][v as usize];
                            assert_eq!(graph.has_edge(u, v), expected.is_some());
                            assert_eq!(graph.try_edge(u, v).ok().copied(), expected);
                        }
                    }
                }
            }

            /// Creates a random graph with `n > 0` nodes and at most `m_ub` edges and its model
            fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> (Graph, Model) {
                let mut graph = Graph::new();
                let mut model = Model::default();

                for _ in 0..n {
                    let data = rng.random();
                    assert_eq!(graph.add_vertex(data), model.add_vertex(data));
                }

                for _ in 0..m_ub {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let data = rng.random();

                    if model.edges[u as usize][v as usize].is_none() {
                        model.edges[u as usize][v as usize] = Some(data);
                        graph.add_edge(u, v, data);
                    }
                }

                (graph, model)
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = Graph::new();
            assert!(graph.is_empty());
            assert!(graph.is_singleton_graph());
            assert_eq!(graph.edges().count(), 0);
            assert_eq!(graph.dump(), "");
            Model::default().assert_matches(&graph);

            let graph = Graph::from_edges(0..10, std::iter::empty::<(Edge, u32)>());
            assert_eq!(graph.number_of_nodes(), 10);
            assert_eq!(graph.vertices().collect_vec(), (0..10).collect_vec());
            assert_eq!(graph.vertex_data().copied().collect_vec(), (0..10).collect_vec());
            assert!(graph.is_singleton_graph());
        }
    };
    ($graph:ident: GraphVertexEditing) => {
        #[test]
        fn graph_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 5, 20] {
                for _ in 0..10 {
                    let (mut graph, mut model) = random_graph(rng, n, n * 3);
                    model.assert_matches(&graph);

                    for _ in 0..(2 * n) {
                        if model.n() > 0 && rng.random_bool(0.5) {
                            let u = rng.random_range(0..model.n());
                            assert_eq!(graph.remove_vertex(u), model.remove_vertex(u));
                        } else {
                            let data = rng.random();
                            let v = graph.add_vertex(data);
                            assert_eq!(v, model.add_vertex(data));

                            // connect the new node from a random node (possibly itself)
                            let u = rng.random_range(0..model.n());
                            graph.add_edge(u, v, data);
                            model.edges[u as usize][v as usize] = Some(data);
                        }

                        model.assert_matches(&graph);
                    }

                    let n = model.n();
                    assert_eq!(
                        graph.try_remove_vertex(n),
                        Err(GraphError::NodeOutOfRange { node: n, n })
                    );
                    model.assert_matches(&graph);
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [1 as NumNodes, 10, 30] {
                for _ in 0..5 {
                    let (mut graph, mut model) = random_graph(rng, n, n * 2);

                    for _ in 0..(n * 10) {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let slot = &mut model.edges[u as usize][v as usize];

                        if rng.random_bool(0.5) {
                            let data = rng.random();
                            if slot.is_some() {
                                assert_eq!(
                                    graph.try_add_edge(u, v, data),
                                    Err(GraphError::EdgeExists(Edge(u, v)))
                                );
                            } else {
                                assert_eq!(graph.try_add_edge(u, v, data), Ok(()));
                                *slot = Some(data);
                            }
                        } else if let Some(data) = slot.take() {
                            assert_eq!(graph.try_remove_edge(u, v), Ok(data));
                        } else {
                            assert_eq!(
                                graph.try_remove_edge(u, v),
                                Err(GraphError::EdgeMissing(Edge(u, v)))
                            );
                        }

                        assert_eq!(
                            graph.try_has_edge(u, v),
                            Ok(model.edges[u as usize][v as usize].is_some())
                        );
                    }

                    model.assert_matches(&graph);

                    assert!(graph.try_add_edge(0, n, 0).is_err());
                    assert!(graph.try_has_edge(n, 0).is_err());
                    assert!(graph.try_remove_edge(n, n).is_err());
                    model.assert_matches(&graph);
                }
            }
        }
    };
    ($graph:ident: GraphEdgeData) => {
        #[test]
        fn graph_edge_data() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 30] {
                let (mut graph, mut model) = random_graph(rng, n, n * 4);

                for (Edge(u, v), old) in model.edge_list() {
                    assert_eq!(*graph.edge(u, v), old);

                    let data = rng.random();
                    *graph.edge_mut(u, v) = data;
                    model.edges[u as usize][v as usize] = Some(data);
                }

                for u in 0..n {
                    let data = rng.random();
                    *graph.vertex_mut(u) = data;
                    model.vertices[u as usize] = data;
                    assert_eq!(*graph.vertex(u), data);
                }

                model.assert_matches(&graph);

                let missing = (0..n)
                    .cartesian_product(0..n)
                    .find(|&(u, v)| model.edges[u as usize][v as usize].is_none());
                if let Some((u, v)) = missing {
                    assert_eq!(graph.try_edge(u, v), Err(GraphError::EdgeMissing(Edge(u, v))));
                    assert!(graph.try_edge_mut(u, v).is_err());
                }

                assert_eq!(graph.try_vertex(n), Err(GraphError::NodeOutOfRange { node: n, n }));
                assert!(graph.try_vertex_mut(n).is_err());
            }
        }
    };
    ($graph:ident: Renumbering) => {
        #[test]
        fn renumbering() {
            let rng = &mut Pcg64Mcg::seed_from_u64(6);

            for n in [2 as NumNodes, 10, 30] {
                for _ in 0..10 {
                    let (mut graph, _) = random_graph(rng, n, n * 3);
                    let before = graph.clone();

                    let removed = rng.random_range(0..n);
                    let old = |u: Node| if u < removed { u } else { u + 1 };
                    graph.remove_vertex(removed);

                    assert_eq!(graph.number_of_nodes(), n - 1);
                    for u in 0..(n - 1) {
                        assert_eq!(graph.vertex(u), before.vertex(old(u)));
                        for v in 0..(n - 1) {
                            assert_eq!(graph.try_edge(u, v).ok(), before.try_edge(old(u), old(v)).ok());
                        }
                    }

                    let incident = before
                        .edges()
                        .filter(|e| e.is_incident_to(removed))
                        .count() as NumEdges;
                    assert_eq!(graph.number_of_edges(), before.number_of_edges() - incident);
                }
            }
        }
    };
    ($graph:ident: Clear) => {
        #[test]
        fn clear() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);
            let (mut graph, _) = random_graph(rng, 20, 60);

            graph.clear();
            Model::default().assert_matches(&graph);

            graph.clear();
            assert!(graph.is_empty());

            assert_eq!(graph.add_vertex(1), 0);
            assert!(graph.is_singleton_graph());
            assert!(!graph.has_edge(0, 0));
        }
    };
}

pub(crate) use test_graph_ops;
