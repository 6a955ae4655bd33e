use std::collections::BTreeSet;
use std::fmt::Debug;

use num_bigint::BigUint;
use num_traits::{Float, One, Zero};

/// Shortest-path bookkeeping for a single node during one run.
///
/// Holds the best known distance from the source, the number of distinct
/// shortest paths achieving it and the immediate predecessors on those paths.
/// A fresh record starts unreachable: infinite distance, zero paths and no
/// predecessors.
#[derive(Debug, Clone, PartialEq)]
pub struct PathState<W>
where
    W: Float + Debug + Copy,
{
    distance: W,
    shortest_path_count: BigUint,
    predecessors: BTreeSet<usize>,
}

impl<W> PathState<W>
where
    W: Float + Debug + Copy,
{
    /// Creates an unreachable record
    pub fn new() -> Self {
        PathState {
            distance: W::infinity(),
            shortest_path_count: BigUint::zero(),
            predecessors: BTreeSet::new(),
        }
    }

    /// Marks this record as the source of the run: distance 0, one path.
    pub fn mark_as_source(&mut self) {
        self.distance = W::zero();
        self.shortest_path_count = BigUint::one();
    }

    /// Records a strictly shorter path through `predecessor`.
    ///
    /// Everything learned about the previous distance is discarded: the
    /// predecessor set becomes `{predecessor}` and the path count becomes the
    /// predecessor's count.
    pub fn record_shorter_path(
        &mut self,
        predecessor: usize,
        predecessor_count: &BigUint,
        new_distance: W,
    ) {
        self.distance = new_distance;
        self.predecessors.clear();
        self.predecessors.insert(predecessor);
        self.shortest_path_count.clone_from(predecessor_count);
    }

    /// Records another path of the current shortest length through `predecessor`.
    pub fn record_tied_path(&mut self, predecessor: usize, predecessor_count: &BigUint) {
        self.predecessors.insert(predecessor);
        self.shortest_path_count += predecessor_count;
    }

    pub(crate) fn replace_shortest_path_count(&mut self, count: BigUint) {
        self.shortest_path_count = count;
    }

    /// Keeps only the predecessors for which `keep` returns true
    pub(crate) fn retain_predecessors<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize) -> bool,
    {
        self.predecessors.retain(|&u| keep(u));
    }

    /// Shortest known distance from the source
    pub fn distance(&self) -> W {
        self.distance
    }

    /// Number of distinct shortest paths from the source
    pub fn shortest_path_count(&self) -> &BigUint {
        &self.shortest_path_count
    }

    /// Immediate predecessors on shortest paths, in ascending id order
    pub fn predecessors(&self) -> &BTreeSet<usize> {
        &self.predecessors
    }

    /// Returns true once a finite distance has been recorded
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

impl<W> Default for PathState<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_is_unreachable() {
        let state = PathState::<f64>::new();
        assert!(state.distance().is_infinite());
        assert!(state.shortest_path_count().is_zero());
        assert!(state.predecessors().is_empty());
        assert!(!state.is_reachable());
    }

    #[test]
    fn source_has_distance_zero_and_one_path() {
        let mut state = PathState::<f64>::new();
        state.mark_as_source();
        assert_eq!(state.distance(), 0.0);
        assert_eq!(*state.shortest_path_count(), BigUint::from(1u32));
        assert!(state.predecessors().is_empty());
        assert!(state.is_reachable());
    }

    #[test]
    fn tied_paths_accumulate() {
        let mut state = PathState::<f64>::new();
        state.record_shorter_path(1, &BigUint::from(2u32), 5.0);
        state.record_tied_path(2, &BigUint::from(3u32));

        assert_eq!(state.distance(), 5.0);
        assert_eq!(*state.shortest_path_count(), BigUint::from(5u32));
        assert_eq!(state.predecessors().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn shorter_path_replaces_predecessors_and_count() {
        let mut state = PathState::<f64>::new();
        state.record_shorter_path(1, &BigUint::from(2u32), 5.0);
        state.record_tied_path(2, &BigUint::from(3u32));
        state.record_shorter_path(4, &BigUint::from(7u32), 3.0);

        assert_eq!(state.distance(), 3.0);
        assert_eq!(*state.shortest_path_count(), BigUint::from(7u32));
        assert_eq!(state.predecessors().iter().copied().collect::<Vec<_>>(), vec![4]);
    }
}
