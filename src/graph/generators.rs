use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices and roughly `n * edge_factor` edges.
///
/// Weights are drawn uniformly from `1.0..100.0`. The same seed always yields the
/// same graph.
pub fn generate_random_graph(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (n as f64 * edge_factor) as usize;

    for _ in 0..num_edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from != to {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(from, to, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with unit-weight edges pointing right and down.
///
/// Vertex `(x, y)` has id `y * width + x`. From the top-left corner, the number of
/// shortest paths to `(x, y)` is the binomial coefficient `C(x + y, x)`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}

/// Generates a chain of `diamonds` diamonds sharing their tips.
///
/// Tip `i` has id `3 * i`; the two middle vertices of diamond `i` are `3 * i + 1`
/// and `3 * i + 2`. Every edge has unit weight, so the last tip is reached by
/// `2^diamonds` shortest paths of length `2 * diamonds`.
pub fn generate_diamond_chain(diamonds: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(3 * diamonds + 1);

    for i in 0..diamonds {
        let tip = 3 * i;
        let next_tip = 3 * (i + 1);
        for middle in [tip + 1, tip + 2] {
            graph.add_edge(tip, middle, OrderedFloat(1.0));
            graph.add_edge(middle, next_tip, OrderedFloat(1.0));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random_graph(50, 3.0, 7);
        let b = generate_random_graph(50, 3.0, 7);
        assert_eq!(a.vertex_count(), 50);
        assert_eq!(a.edge_count(), b.edge_count());
        for v in a.vertices() {
            let left: Vec<_> = a.outgoing_edges(v).collect();
            let right: Vec<_> = b.outgoing_edges(v).collect();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn grid_shape() {
        let graph = generate_grid(3, 2);
        assert_eq!(graph.vertex_count(), 6);
        // 2 horizontal edges per row, 3 vertical edges
        assert_eq!(graph.edge_count(), 2 * 2 + 3);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(0, 3));
        assert!(!graph.has_edge(2, 3));
    }

    #[test]
    fn diamond_chain_shape() {
        let graph = generate_diamond_chain(2);
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 8);
        assert!(graph.has_edge(3, 4));
        assert!(graph.has_edge(5, 6));
    }
}
