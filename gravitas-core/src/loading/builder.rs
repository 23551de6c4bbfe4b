use std::path::Path;

use hashbrown::HashMap;
use log::{info, warn};

use super::config::NetworkFiles;
use super::tsv::{RawArc, RawFlow, RawLine, RawNode, RawVehicle, deserialize_tsv_file, read_horizon};
use crate::{ArcKind, DEFAULT_DAY_HORIZON, Error, Line, Network, NetworkBuilder, NodeId, NodeKind};

/// Creates a network from the node, arc, transit, vehicle and problem files
///
/// # Errors
///
/// Returns an error if a required file is missing or any row is malformed,
/// references an unknown node, line or vehicle type, or has a negative cost
/// or node value.
pub fn create_network(files: &NetworkFiles) -> Result<Network, Error> {
    validate_files(files)?;

    let horizon = planning_horizon(files.problem_file.as_deref())?;
    let mut builder = NetworkBuilder::new();

    info!("Reading node data: {}", files.node_file.display());
    for (position, node) in deserialize_tsv_file::<RawNode>(&files.node_file)?
        .into_iter()
        .enumerate()
    {
        if node.id != position {
            return Err(Error::InvalidData(format!(
                "Node '{}' has ID {} but is row {position}; node IDs must be consecutive from 0",
                node.name, node.id
            )));
        }
        if !node.value.is_finite() || node.value < 0.0 {
            return Err(Error::InvalidData(format!(
                "Node '{}' has invalid value {}; values must be finite and nonnegative",
                node.name, node.value
            )));
        }
        builder.add_node(NodeKind::try_from(node.node_type)?, node.value);
    }

    info!("Reading vehicle data: {}", files.vehicle_file.display());
    let seating: HashMap<i64, f64> = deserialize_tsv_file::<RawVehicle>(&files.vehicle_file)?
        .into_iter()
        .map(|vehicle| (vehicle.vehicle_type, vehicle.seating))
        .collect();

    info!("Reading transit data: {}", files.transit_file.display());
    for line in deserialize_tsv_file::<RawLine>(&files.transit_file)? {
        let seats = seating.get(&line.vehicle_type).copied().ok_or_else(|| {
            Error::InvalidData(format!(
                "Line '{}' uses unknown vehicle type {}",
                line.name, line.vehicle_type
            ))
        })?;
        builder.add_line(Line::new(
            line.name,
            line.circuit,
            seats,
            line.scaling,
            horizon,
            line.fleet,
        ));
    }

    info!("Reading arc data: {}", files.arc_file.display());
    for arc in deserialize_tsv_file::<RawArc>(&files.arc_file)? {
        // NodeId is u32 backed; range check the raw IDs before narrowing
        let node_count = builder.node_count();
        if arc.tail >= node_count || arc.head >= node_count {
            return Err(Error::InvalidData(format!(
                "Arc {}: {}->{} references a node outside 0..{node_count}",
                arc.id, arc.tail, arc.head
            )));
        }
        let line = usize::try_from(arc.line).ok();
        builder
            .add_arc(
                ArcKind::try_from(arc.arc_type)?,
                NodeId::new(arc.tail),
                NodeId::new(arc.head),
                arc.time,
                line,
            )
            .map_err(|e| match e {
                Error::InvalidData(msg) => Error::InvalidData(format!("Arc {}: {msg}", arc.id)),
                other => other,
            })?;
    }

    let network = builder.build();
    info!("Network complete: {}", network.network_info());
    Ok(network)
}

/// Reads initial arc flows, one value per core arc; arcs not listed carry no flow
///
/// # Errors
///
/// Returns an error if the file is unreadable or references an arc outside
/// the network's core arcs.
pub fn load_flows(path: &Path, network: &Network) -> Result<Vec<f64>, Error> {
    info!("Reading initial flow data: {}", path.display());
    let mut flows = vec![0.0; network.core_arcs().len()];

    for RawFlow { id, flow } in deserialize_tsv_file::<RawFlow>(path)? {
        let slot = flows.get_mut(id).ok_or_else(|| {
            Error::InvalidData(format!(
                "{}: flow for core arc {id}, but the network has {} core arcs",
                path.display(),
                network.core_arcs().len()
            ))
        })?;
        *slot = flow;
    }

    Ok(flows)
}

fn validate_files(files: &NetworkFiles) -> Result<(), Error> {
    for path in files.required() {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Network file not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}

fn planning_horizon(problem_file: Option<&Path>) -> Result<f64, Error> {
    match problem_file {
        Some(path) if path.exists() => {
            let horizon = read_horizon(path)?;
            info!("Reading time horizon as {horizon} minutes");
            Ok(horizon)
        }
        Some(path) => {
            warn!(
                "Problem file {} not found, using a {DEFAULT_DAY_HORIZON} minute horizon",
                path.display()
            );
            Ok(DEFAULT_DAY_HORIZON)
        }
        None => Ok(DEFAULT_DAY_HORIZON),
    }
}
