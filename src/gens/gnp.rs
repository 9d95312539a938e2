use super::*;
use crate::utils::Probability;

/// `G(n,p)` generators produce every ordered pair `(u, v)` of a graph with `n` nodes (self-loops
/// included) as an edge with probability `p`, independently from each other.
///
/// The number of nodes can either be fixed via [`Gnp::nodes`] or drawn uniformly from a range
/// via [`Gnp::nodes_between`].
///
/// # Example
/// ```
/// use lgraphs::{prelude::*, gens::*};
///
/// let gnp = Gnp::new().nodes_between(3, 10).prob(1.0);
/// let mut rng = rand::rng();
///
/// let n = gnp.sample_nodes(&mut rng);
/// assert!((3..=10).contains(&n));
/// assert_eq!(gnp.stream(&mut rng, n).count(), (n * n) as usize);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    min_nodes: NumNodes,
    max_nodes: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the number of nodes to `n`
    pub fn nodes(self, n: NumNodes) -> Self {
        self.nodes_between(n, n)
    }

    /// Draws the number of nodes uniformly from `min..=max`
    pub fn nodes_between(mut self, min: NumNodes, max: NumNodes) -> Self {
        assert!(min <= max, "Minimum number of nodes {min} exceeds maximum {max}!");
        self.min_nodes = min;
        self.max_nodes = max;
        self
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "Probability {prob} is not in [0, 1]!");
        self.p = Some(prob);
        self
    }

    /// Draws a number of nodes uniformly from the configured range
    pub fn sample_nodes<R: Rng>(&self, rng: &mut R) -> NumNodes {
        rng.random_range(self.min_nodes..=self.max_nodes)
    }

    /// Creates a stream over the random edges of a graph with `n` nodes in row-major order.
    /// ** Panics if no probability was set **
    pub fn stream<'a, R: Rng>(
        &self,
        rng: &'a mut R,
        n: NumNodes,
    ) -> impl Iterator<Item = Edge> + use<'a, R> {
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };

        let n = n as u64;
        (0..n * n)
            .filter(move |_| rng.random_bool(p))
            .map(move |x| Edge::from_u64(x, n))
    }

    /// Collects the random edges of a graph with `n` nodes.
    /// ** Panics if no probability was set **
    pub fn generate<R: Rng>(&self, rng: &mut R, n: NumNodes) -> Vec<Edge> {
        self.stream(rng, n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        assert!(Gnp::new().prob(0.0).generate(&mut rng, 20).is_empty());

        let edges = Gnp::new().prob(1.0).generate(&mut rng, 4);
        assert_eq!(edges.len(), 16);
        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(edges.contains(&Edge(2, 2)));
    }

    #[test]
    fn node_range() {
        let mut rng = Pcg64Mcg::seed_from_u64(1234);
        let gnp = Gnp::new().nodes_between(3, 10);

        let samples = (0..500).map(|_| gnp.sample_nodes(&mut rng)).collect_vec();
        assert!(samples.iter().all(|n| (3..=10).contains(n)));
        assert_eq!(samples.iter().min(), Some(&3));
        assert_eq!(samples.iter().max(), Some(&10));

        assert_eq!(Gnp::new().nodes(7).sample_nodes(&mut rng), 7);
    }

    #[test]
    fn density() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let n = 100;
        let m = Gnp::new().prob(0.3).stream(&mut rng, n).count() as f64;
        let expected = 0.3 * (n * n) as f64;
        assert!((m - expected).abs() < 0.05 * expected);
    }

    #[test]
    #[should_panic(expected = "is not in [0, 1]")]
    fn invalid_probability() {
        Gnp::new().prob(1.5);
    }

    #[test]
    #[should_panic(expected = "exceeds maximum")]
    fn invalid_node_range() {
        Gnp::new().nodes_between(5, 4);
    }

    #[test]
    #[should_panic(expected = "was not set")]
    fn unset_probability() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        Gnp::new().nodes(3).generate(&mut rng, 3);
    }
}
