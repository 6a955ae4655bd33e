use std::collections::BTreeSet;
use std::fmt::Debug;

use num_bigint::BigUint;
use num_traits::Float;

use crate::algorithm::path_state::PathState;
use crate::graph::Graph;
use crate::Result;

/// Shortest-path tree of one run, with path multiplicities
///
/// Holds one [`PathState`] per graph vertex, indexed by vertex id, plus the
/// reachable vertices in settle order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<W>
where
    W: Float + Debug + Copy,
{
    source: usize,
    states: Vec<PathState<W>>,
    settled_order: Vec<usize>,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) fn new(source: usize, states: Vec<PathState<W>>, settled_order: Vec<usize>) -> Self {
        ShortestPathTree {
            source,
            states,
            settled_order,
        }
    }

    /// Source vertex ID
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices covered by the tree
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Full record of a vertex, `None` if the id is outside the graph
    pub fn state(&self, vertex: usize) -> Option<&PathState<W>> {
        self.states.get(vertex)
    }

    /// Shortest distance to a vertex, `None` if it is unreachable or unknown
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.state(vertex)
            .filter(|state| state.is_reachable())
            .map(PathState::distance)
    }

    /// Number of shortest paths to a vertex; zero if unreachable or unknown
    pub fn shortest_path_count(&self, vertex: usize) -> BigUint {
        self.state(vertex)
            .map(|state| state.shortest_path_count().clone())
            .unwrap_or_default()
    }

    /// Immediate predecessors of a vertex on shortest paths
    pub fn predecessors(&self, vertex: usize) -> Option<&BTreeSet<usize>> {
        self.state(vertex).map(PathState::predecessors)
    }

    /// Reachable vertices in a topological order of the shortest-path DAG.
    ///
    /// Every vertex comes after all of its predecessors and distances along the
    /// order never decrease by more than the tolerance, so walking it backwards
    /// visits every vertex after all of its shortest-path successors.
    pub fn settled_order(&self) -> &[usize] {
        &self.settled_order
    }

    /// Iterates over reachable vertices and their records, by vertex id
    pub fn reachable(&self) -> impl Iterator<Item = (usize, &PathState<W>)> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_reachable())
    }

    /// Consumes the tree, returning the per-vertex records
    pub fn into_states(self) -> Vec<PathState<W>> {
        self.states
    }
}

/// Trait for shortest path algorithms that count shortest paths
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths, path counts and predecessor sets from a source vertex
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathTree<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get one shortest path from source to target as a sequence of vertices.
    ///
    /// Among tied predecessors the one with the smallest id is followed, so the
    /// result is deterministic.
    fn get_path(&self, tree: &ShortestPathTree<W>, target: usize) -> Option<Vec<usize>> {
        tree.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != tree.source() {
            let next = *tree.predecessors(current)?.iter().next()?;
            path.push(next);
            current = next;

            // A valid tree never revisits a vertex
            if path.len() > tree.len() {
                log::warn!("Path to {} exceeds graph size, predecessor cycle", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Number of shortest paths from source to target
    fn count_paths(&self, tree: &ShortestPathTree<W>, target: usize) -> BigUint {
        tree.shortest_path_count(target)
    }
}
