use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Locations of the files describing one network snapshot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkFiles {
    pub node_file: PathBuf,
    pub arc_file: PathBuf,
    pub transit_file: PathBuf,
    pub vehicle_file: PathBuf,
    /// Holds the planning horizon; the default horizon is used when missing
    #[serde(default)]
    pub problem_file: Option<PathBuf>,
    /// Initial arc flows, only needed by the loading factor diagnostic
    #[serde(default)]
    pub flow_file: Option<PathBuf>,
}

impl NetworkFiles {
    /// Conventional file names inside a single data directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            node_file: dir.join("node_data.txt"),
            arc_file: dir.join("arc_data.txt"),
            transit_file: dir.join("transit_data.txt"),
            vehicle_file: dir.join("vehicle_data.txt"),
            problem_file: Some(dir.join("problem_data.txt")),
            flow_file: Some(dir.join("initial_flows.txt")),
        }
    }

    pub(super) fn required(&self) -> [&Path; 4] {
        [
            &self.node_file,
            &self.arc_file,
            &self.transit_file,
            &self.vehicle_file,
        ]
    }
}
