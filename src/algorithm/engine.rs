use std::fmt::Debug;
use std::time::Instant;

use log::{debug, trace, warn};
use num_bigint::BigUint;
use num_traits::Float;

use crate::algorithm::path_state::PathState;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::config::EngineConfig;
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm extended to count shortest paths.
///
/// Besides distances, every run records how many distinct shortest paths reach
/// each vertex and which vertices immediately precede it on those paths. Two
/// path lengths within the configured tolerance of each other count as equal.
///
/// Edge weights must be non-negative. A negative or NaN weight met during a run
/// aborts it with [`Error::MalformedGraph`].
///
/// The engine holds only configuration, so one instance can serve any number of
/// independent runs, including concurrent runs from different threads over a
/// shared graph.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine<W>
where
    W: Float + Debug + Copy,
{
    config: EngineConfig<W>,
}

impl<W> ShortestPathEngine<W>
where
    W: Float + Debug + Copy,
{
    /// Creates an engine with the default tolerance
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig<W>) -> Self {
        ShortestPathEngine { config }
    }

    /// Creates an engine with an explicit tie tolerance
    pub fn with_tolerance(tolerance: W) -> Result<Self> {
        Ok(Self::with_config(EngineConfig::new(tolerance)?))
    }

    pub fn config(&self) -> &EngineConfig<W> {
        &self.config
    }

    /// Computes distances, shortest-path counts and predecessor sets from `start`.
    ///
    /// Vertices unreachable from `start` keep an infinite distance, a zero count
    /// and no predecessors.
    pub fn compute<G>(&self, graph: &G, start: usize) -> Result<ShortestPathTree<W>>
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if !Self::is_vertex(graph, n, start) {
            return Err(Error::InvalidStartNode(start));
        }

        let started = Instant::now();
        debug!("Computing shortest paths from {} over {} vertices", start, n);

        let mut states = vec![PathState::new(); n];
        states[start].mark_as_source();

        let mut settled = vec![false; n];
        let mut settled_order = Vec::new();
        let mut late_ties = 0usize;

        let mut queue = IndexedMinHeap::with_capacity(n);
        queue.push(start, W::zero());

        while let Some((u, distance_u)) = queue.pop() {
            settled[u] = true;
            settled_order.push(u);

            let count_u = states[u].shortest_path_count().clone();

            for (v, weight) in graph.outgoing_edges(u) {
                if weight.is_nan() || weight < W::zero() || !Self::is_vertex(graph, n, v) {
                    warn!("Aborting run from {}: malformed edge {} -> {} ({:?})", start, u, v, weight);
                    return Err(Error::MalformedGraph {
                        from: u,
                        to: v,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }

                // A shortest path never revisits a vertex
                if v == u || v == start {
                    continue;
                }

                let candidate = distance_u + weight;
                let state_v = &mut states[v];
                let distance_v = state_v.distance();
                let tolerance = self.config.tolerance();

                if candidate < distance_v - tolerance {
                    trace!("Shorter path to {} via {}: {:?} -> {:?}", v, u, distance_v, candidate);
                    state_v.record_shorter_path(u, &count_u, candidate);
                    queue.push(v, candidate);
                } else if (candidate - distance_v).abs() <= tolerance {
                    trace!("Tied path to {} via {} at {:?}", v, u, distance_v);
                    // v already passed its count on if it is settled
                    if settled[v] {
                        late_ties += 1;
                    }
                    state_v.record_tied_path(u, &count_u);
                }
            }
        }

        if late_ties > 0 {
            debug!("{} ties reached settled vertices, recounting from {}", late_ties, start);
            settled_order = recount_paths(&mut states, start, &settled_order);
        }

        debug!(
            "Settled {} of {} vertices from {} in {:?}",
            settled_order.len(),
            n,
            start,
            started.elapsed()
        );

        Ok(ShortestPathTree::new(start, states, settled_order))
    }

    fn is_vertex<G>(graph: &G, n: usize, vertex: usize) -> bool
    where
        G: Graph<W>,
    {
        vertex < n && graph.has_vertex(vertex)
    }
}

/// Recomputes every path count from the predecessor sets, in topological order.
///
/// Needed once a tie reached a vertex after it was settled: with zero-weight (or
/// sub-tolerance) edges, settle order is not a topological order of the
/// shortest-path DAG. Ready vertices are taken in settle order, so the returned
/// order stays sorted by distance up to the tolerance.
///
/// A zero-weight cycle leaves every vertex on it waiting for another. The waiting
/// vertex with the smallest id that already has a counted predecessor is then
/// released by dropping its uncounted predecessors. The choice depends only on
/// the predecessor sets, so results do not depend on edge insertion order.
fn recount_paths<W>(states: &mut [PathState<W>], start: usize, settled_order: &[usize]) -> Vec<usize>
where
    W: Float + Debug + Copy,
{
    let n = states.len();
    let mut rank = vec![usize::MAX; n];
    for (position, &v) in settled_order.iter().enumerate() {
        rank[v] = position;
    }

    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut waiting_on = vec![0usize; n];
    for &v in settled_order {
        for &u in states[v].predecessors() {
            successors[u].push(v);
        }
        waiting_on[v] = states[v].predecessors().len();
    }

    let mut counted = vec![false; n];
    let mut order = Vec::with_capacity(settled_order.len());
    let mut ready = IndexedMinHeap::with_capacity(n);
    ready.push(start, rank[start]);

    while order.len() < settled_order.len() {
        let v = match ready.pop() {
            Some((v, _)) => v,
            None => {
                let Some(v) = settled_order
                    .iter()
                    .copied()
                    .filter(|&v| !counted[v])
                    .filter(|&v| states[v].predecessors().iter().any(|&u| counted[u]))
                    .min()
                else {
                    break;
                };
                trace!("Breaking zero-weight cycle at {}", v);
                states[v].retain_predecessors(|u| counted[u]);
                v
            }
        };

        if v != start {
            let total: BigUint = states[v]
                .predecessors()
                .iter()
                .map(|&u| states[u].shortest_path_count())
                .sum();
            states[v].replace_shortest_path_count(total);
        }
        counted[v] = true;
        order.push(v);

        for &w in &successors[v] {
            if !counted[w] && waiting_on[w] > 0 {
                waiting_on[w] -= 1;
                if waiting_on[w] == 0 {
                    ready.push(w, rank[w]);
                }
            }
        }
    }

    order
}

impl<W, G> ShortestPathAlgorithm<W, G> for ShortestPathEngine<W>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Path-counting Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathTree<W>> {
        self.compute(graph, source)
    }
}
