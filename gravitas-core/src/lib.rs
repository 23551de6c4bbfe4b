//! Gravity-model accessibility over a multi-modal transit network.
//!
//! The crate loads a static network of stops, boarding points, population
//! centers and facilities, runs one shortest-path search per origin in
//! parallel and turns the resulting distance matrix into a two-stage
//! gravity metric.

pub mod algo;
pub mod diagnostics;
mod error;
pub mod export;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use algo::accessibility::{AccessConfig, AccessibilityResult, Origins, compute_accessibility};
pub use error::Error;
pub use loading::{NetworkFiles, create_network};
pub use model::{Arc, ArcKind, Line, Network, NetworkBuilder, Node, NodeKind};

/// Stable identity of a node inside a [`Network`]
pub type NodeId = petgraph::graph::NodeIndex;
/// Stable identity of an arc inside a [`Network`]
pub type ArcId = petgraph::graph::EdgeIndex;
/// Position of a line in [`Network::lines`]
pub type LineId = usize;
/// Travel, wait or transfer time in minutes
pub type Cost = f64;

/// Added to every boarding and alighting arc so that mode changes are never free
pub const BOARDING_EPSILON: Cost = 1e-5;

/// Length of the planning horizon when no problem file is supplied (minutes)
pub const DEFAULT_DAY_HORIZON: f64 = 1440.0;
