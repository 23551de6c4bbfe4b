//! This module is responsible for reading the tab-separated network,
//! objective and flow files and building a [`crate::Network`] from them.

mod builder;
mod config;
mod objective;
pub mod tsv;

pub use builder::{create_network, load_flows};
pub use config::NetworkFiles;
pub use objective::load_objective;
