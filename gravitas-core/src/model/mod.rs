//! Data model of the multi-modal transit network
//!
//! Contains node, arc and line records and the network arena that owns them.

pub mod line;
pub mod network;
pub mod types;

pub use line::Line;
pub use network::{Network, NetworkBuilder};
pub use types::{Arc, ArcKind, Node, NodeKind};
