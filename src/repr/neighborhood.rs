use std::fmt::{self, Formatter};

use smallvec::SmallVec;

use super::*;

/// Storage for the outgoing edges of a single node together with their payloads.
///
/// A [`DirectedGraph`] keeps one neighborhood per node and informs all of them whenever a node
/// is appended to or removed from the graph so that they can keep their targets consistent.
pub trait Neighborhood: Sized {
    /// Payload stored per edge
    type Payload;

    /// Creates an empty neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all neighbors and the payloads of the corresponding edges
    fn entries(&self) -> impl Iterator<Item = (Node, &Self::Payload)> + '_;

    /// Returns the payload of the edge to `v` if it exists
    /// ** Might panic if `v >= n` **
    fn payload(&self, v: Node) -> Option<&Self::Payload>;

    /// Returns the payload of the edge to `v` mutably if it exists
    /// ** Might panic if `v >= n` **
    fn payload_mut(&mut self, v: Node) -> Option<&mut Self::Payload>;

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.payload(v).is_some()
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    fn add_neighbor(&mut self, v: Node, data: Self::Payload);

    /// Removes the neighbor `v` and returns the payload of the removed edge if it existed.
    /// The relative order of all other neighbors is retained.
    fn try_remove_neighbor(&mut self, v: Node) -> Option<Self::Payload>;

    /// Informs the Neighborhood that a node was appended to the graph
    fn push_node(&mut self);

    /// Informs the Neighborhood that node `u` was removed from the graph: drops the edge to `u`
    /// and decrements every neighbor `v > u` in a single pass.
    /// Returns the number of dropped edges.
    fn remove_node(&mut self, u: Node) -> NumNodes;

    /// Writes the line of the adjacency dump belonging to node `u`
    fn fmt_row(&self, f: &mut Formatter<'_>, u: Node) -> fmt::Result;
}

/// Dense Neighborhood storing one optional payload per potential target, i.e. one row of an
/// adjacency matrix.
#[derive(Clone, Debug)]
pub struct MatrixNeighborhood<E>(pub Vec<Option<E>>);

impl<E> Neighborhood for MatrixNeighborhood<E> {
    type Payload = E;

    fn new(n: NumNodes) -> Self {
        Self((0..n).map(|_| None).collect())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.iter().filter(|slot| slot.is_some()).count() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.entries().map(|(v, _)| v)
    }

    fn entries(&self) -> impl Iterator<Item = (Node, &E)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(v, slot)| slot.as_ref().map(|data| (v as Node, data)))
    }

    fn payload(&self, v: Node) -> Option<&E> {
        self.0[v as usize].as_ref()
    }

    fn payload_mut(&mut self, v: Node) -> Option<&mut E> {
        self.0[v as usize].as_mut()
    }

    fn add_neighbor(&mut self, v: Node, data: E) {
        debug_assert!(self.0[v as usize].is_none());
        self.0[v as usize] = Some(data);
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<E> {
        self.0[v as usize].take()
    }

    fn push_node(&mut self) {
        self.0.push(None);
    }

    fn remove_node(&mut self, u: Node) -> NumNodes {
        // Removing the column shifts all higher targets by itself
        self.0.remove(u as usize).is_some() as NumNodes
    }

    fn fmt_row(&self, f: &mut Formatter<'_>, _u: Node) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{} ", slot.is_some() as u8)?;
        }
        writeln!(f)
    }
}

/// Basic list Neighborhood using `Vec<(Node, E)>` in insertion order
#[derive(Clone, Debug)]
pub struct ArrNeighborhood<E>(pub Vec<(Node, E)>);

/// Like [`ArrNeighborhood`] but uses `SmallVec<[(Node, E); 4]>` instead.
/// Prefer this if the graph is known to be sparse and payloads are small.
#[derive(Clone, Debug)]
pub struct SparseNeighborhood<E>(pub SmallVec<[(Node, E); 4]>);

macro_rules! impl_list_neighborhood {
    ($nbs:ident) => {
        impl<E> Neighborhood for $nbs<E> {
            type Payload = E;

            fn new(_n: NumNodes) -> Self {
                Self(Default::default())
            }

            fn num_of_neighbors(&self) -> NumNodes {
                self.0.len() as NumNodes
            }

            fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
                self.0.iter().map(|(v, _)| *v)
            }

            fn entries(&self) -> impl Iterator<Item = (Node, &E)> + '_ {
                self.0.iter().map(|(v, data)| (*v, data))
            }

            fn payload(&self, v: Node) -> Option<&E> {
                self.0.iter().find(|(x, _)| *x == v).map(|(_, data)| data)
            }

            fn payload_mut(&mut self, v: Node) -> Option<&mut E> {
                self.0
                    .iter_mut()
                    .find(|(x, _)| *x == v)
                    .map(|(_, data)| data)
            }

            fn add_neighbor(&mut self, v: Node, data: E) {
                self.0.push((v, data));
            }

            fn try_remove_neighbor(&mut self, v: Node) -> Option<E> {
                let pos = self.0.iter().position(|(x, _)| *x == v)?;
                Some(self.0.remove(pos).1)
            }

            fn push_node(&mut self) {}

            fn remove_node(&mut self, u: Node) -> NumNodes {
                let size_before = self.0.len();
                self.0.retain_mut(|(v, _)| {
                    if *v == u {
                        return false;
                    }
                    if *v > u {
                        *v -= 1;
                    }
                    true
                });
                (size_before - self.0.len()) as NumNodes
            }

            fn fmt_row(&self, f: &mut Formatter<'_>, u: Node) -> fmt::Result {
                write!(f, "{u}: ")?;
                for v in self.neighbors() {
                    write!(f, "{v} ")?;
                }
                writeln!(f)
            }
        }
    };
}

impl_list_neighborhood!(ArrNeighborhood);
impl_list_neighborhood!(SparseNeighborhood);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn matrix_remove_node_shifts_columns() {
        let mut nbs = MatrixNeighborhood::<char>::new(4);
        nbs.add_neighbor(0, 'a');
        nbs.add_neighbor(2, 'b');
        nbs.add_neighbor(3, 'c');

        assert_eq!(nbs.remove_node(2), 1);
        assert_eq!(nbs.entries().collect_vec(), vec![(0, &'a'), (2, &'c')]);

        assert_eq!(nbs.remove_node(1), 0);
        assert_eq!(nbs.entries().collect_vec(), vec![(0, &'a'), (1, &'c')]);

        nbs.push_node();
        assert_eq!(nbs.0.len(), 3);
        assert!(!nbs.has_neighbor(2));
    }

    #[test]
    fn list_remove_node_in_single_pass() {
        let mut nbs = ArrNeighborhood::<char>::new(5);
        nbs.add_neighbor(4, 'a');
        nbs.add_neighbor(1, 'b');
        nbs.add_neighbor(2, 'c');
        nbs.add_neighbor(0, 'd');

        assert_eq!(nbs.remove_node(1), 1);
        // order is retained, higher targets are shifted
        assert_eq!(nbs.neighbors().collect_vec(), vec![3, 1, 0]);
        assert_eq!(nbs.payload(1), Some(&'c'));
    }

    #[test]
    fn list_remove_neighbor_keeps_order() {
        let mut nbs = SparseNeighborhood::<u32>::new(8);
        for v in [5, 3, 7, 1, 0, 6] {
            nbs.add_neighbor(v, 10 * v);
        }

        assert_eq!(nbs.try_remove_neighbor(7), Some(70));
        assert_eq!(nbs.try_remove_neighbor(7), None);
        assert_eq!(nbs.neighbors().collect_vec(), vec![5, 3, 1, 0, 6]);

        *nbs.payload_mut(3).unwrap() += 1;
        assert_eq!(nbs.payload(3), Some(&31));
        assert_eq!(nbs.num_of_neighbors(), 5);
    }
}
