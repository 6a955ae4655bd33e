use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph with `vertices` vertices from an edge list.
    ///
    /// Fails with [`Error::MalformedGraph`] on the first edge that
    /// [`MutableGraph::add_edge`] rejects.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            if !graph.add_edge(from, to, weight) {
                return Err(Error::MalformedGraph {
                    from,
                    to,
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(graph)
    }

    fn accepts_weight(weight: W) -> bool {
        weight >= W::zero()
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || !Self::accepts_weight(weight) {
            return false;
        }

        let outgoing = &mut self.adjacency[from];
        if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
        } else {
            outgoing.push((to, weight));
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.adjacency.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !Self::accepts_weight(weight) {
            return false;
        }
        match self
            .adjacency
            .get_mut(from)
            .and_then(|outgoing| outgoing.iter_mut().find(|(target, _)| *target == to))
        {
            Some(edge) => {
                edge.1 = weight;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_rejects_unknown_vertices_and_negative_weights() {
        let mut graph: DirectedGraph<f64> = DirectedGraph::with_vertices(2);
        assert!(graph.add_edge(0, 1, 1.0));
        assert!(!graph.add_edge(0, 2, 1.0));
        assert!(!graph.add_edge(1, 0, -1.0));
        assert!(!graph.add_edge(1, 0, f64::NAN));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_replaces_parallel_edge() {
        let mut graph: DirectedGraph<f64> = DirectedGraph::with_vertices(2);
        graph.add_edge(0, 1, 5.0);
        graph.add_edge(0, 1, 2.0);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge_weight(0, 1), Some(2.0));
    }

    #[test]
    fn remove_and_update_edges() {
        let mut graph = DirectedGraph::from_edges(3, vec![(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        assert!(graph.update_edge_weight(1, 2, 4.0));
        assert_eq!(graph.get_edge_weight(1, 2), Some(4.0));
        assert!(!graph.update_edge_weight(2, 0, 1.0));

        assert!(graph.remove_edge(0, 1));
        assert!(!graph.remove_edge(0, 1));
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.outgoing_edges(0).count(), 0);
    }

    #[test]
    fn from_edges_reports_rejected_edge() {
        let result = DirectedGraph::from_edges(2, vec![(0, 1, 1.0), (1, 0, -2.0)]);
        assert_eq!(
            result.unwrap_err(),
            Error::MalformedGraph { from: 1, to: 0, weight: -2.0 }
        );

        let result = DirectedGraph::from_edges(2, vec![(0, 3, 1.0)]);
        assert!(matches!(result, Err(Error::MalformedGraph { from: 0, to: 3, .. })));
    }

    #[test]
    fn vertices_enumerates_every_id() {
        let mut graph: DirectedGraph<f64> = DirectedGraph::new();
        assert_eq!(graph.add_vertex(), 0);
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![0, 1]);
        assert!(graph.has_vertex(1));
        assert!(!graph.has_vertex(2));
        assert_eq!(graph.outgoing_edges(7).count(), 0);
    }
}
