mod search;
mod state;

pub use search::{SearchState, shortest_distances};
