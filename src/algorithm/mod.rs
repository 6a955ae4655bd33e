pub mod traits;
pub mod path_state;
pub mod engine;

pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
