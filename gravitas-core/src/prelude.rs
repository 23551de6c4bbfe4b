pub use crate::{BOARDING_EPSILON, DEFAULT_DAY_HORIZON};

// Re-export key components
pub use crate::algo::accessibility::{
    AccessConfig, AccessibilityResult, Origins, compute_accessibility,
};
pub use crate::algo::gravity::{decay, facility_metrics, origin_metrics};
pub use crate::algo::matrix::DistanceMatrix;
pub use crate::diagnostics::{LoadingFactors, loading_factors};
pub use crate::export::{LineMetric, line_metrics, write_line_metrics, write_stop_metrics};
pub use crate::loading::{NetworkFiles, create_network, load_flows, load_objective};
pub use crate::model::{Arc, ArcKind, Line, Network, NetworkBuilder, Node, NodeKind};
pub use crate::routing::dijkstra::{SearchState, shortest_distances};

// Core identity types
pub use crate::ArcId;
pub use crate::Cost;
pub use crate::Error;
pub use crate::LineId;
pub use crate::NodeId;
