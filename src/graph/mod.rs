pub mod directed;
pub mod generators;
pub mod loader;
pub mod traits;

pub use directed::DirectedGraph;
pub use traits::{Graph, Weight};
