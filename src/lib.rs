//! Brandes SSSP - shortest distances, shortest-path counts and predecessor sets
//!
//! This library computes, from a single source, the shortest distance to every
//! node together with the number of distinct shortest paths reaching it and the
//! immediate predecessors on those paths. It is the per-source subroutine of
//! Brandes-style betweenness centrality on directed graphs with real
//! non-negative edge weights.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    engine::ShortestPathEngine, path_state::PathState, ShortestPathAlgorithm, ShortestPathTree,
};
pub use config::EngineConfig;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Start node {0} is not part of the graph")]
    InvalidStartNode(usize),

    #[error("Malformed graph: edge {from} -> {to} with weight {weight}")]
    MalformedGraph { from: usize, to: usize, weight: f64 },

    #[error("Invalid tolerance: {0} (must be finite and non-negative)")]
    InvalidTolerance(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
