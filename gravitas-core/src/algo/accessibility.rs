use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;
use serde::Deserialize;

use super::gravity::{facility_metrics, origin_metrics};
use super::matrix::DistanceMatrix;
use crate::routing::dijkstra::SearchState;
use crate::{Error, Network, NodeId};

/// Node partition whose members are scored as population origins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origins {
    /// Transit stops stand in for population centers
    #[default]
    Stops,
    Population,
}

impl Origins {
    pub fn select(self, network: &Network) -> &[NodeId] {
        match self {
            Origins::Stops => network.stop_nodes(),
            Origins::Population => network.population_nodes(),
        }
    }
}

/// Objective parameters of the gravity model
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Distance decay exponent, applied with a negative sign
    pub gravity_exponent: f64,
    /// Scaling factor of the final origin metrics
    pub multiplier: f64,
    /// Number of smallest facility contributions summed per origin
    pub lowest_metrics: usize,
    pub origins: Origins,
    /// Size of a dedicated worker pool; the global rayon pool when unset
    pub threads: Option<usize>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            gravity_exponent: 1.0,
            multiplier: 1.0,
            lowest_metrics: 1,
            origins: Origins::default(),
            threads: None,
        }
    }
}

impl AccessConfig {
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] for a non-positive exponent, a
    /// negative or non-finite multiplier, an empty worker pool or a `lowest_metrics`
    /// outside `1..=facility_count`.
    pub fn validate(&self, facility_count: usize) -> Result<(), Error> {
        if !self.gravity_exponent.is_finite() || self.gravity_exponent <= 0.0 {
            return Err(Error::ConfigurationError(format!(
                "gravity_exponent must be a positive number, got {}",
                self.gravity_exponent
            )));
        }
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(Error::ConfigurationError(format!(
                "multiplier must be finite and nonnegative, got {}",
                self.multiplier
            )));
        }
        if self.lowest_metrics == 0 || self.lowest_metrics > facility_count {
            return Err(Error::ConfigurationError(format!(
                "lowest_metrics must lie in 1..={facility_count}, got {}",
                self.lowest_metrics
            )));
        }
        if self.threads == Some(0) {
            return Err(Error::ConfigurationError(
                "threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete output of one accessibility run
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityResult {
    /// Partition the origins were drawn from
    pub origin_kind: Origins,
    pub origins: Vec<NodeId>,
    /// One metric per origin, aligned with `origins`
    pub metrics: Vec<f64>,
    pub facilities: Vec<NodeId>,
    /// One metric per facility, aligned with `facilities`
    pub facility_metrics: Vec<f64>,
}

impl AccessibilityResult {
    /// `(origin, metric)` pairs in origin partition order
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.origins.iter().copied().zip(self.metrics.iter().copied())
    }

    pub fn metric(&self, origin: NodeId) -> Option<f64> {
        self.origins
            .iter()
            .position(|&node| node == origin)
            .map(|index| self.metrics[index])
    }
}

/// Runs one search per origin in parallel, then aggregates the gravity metrics.
///
/// Either every origin is evaluated or the whole run fails.
///
/// # Errors
///
/// Returns [`Error::ConfigurationError`] before any search if `config` is
/// invalid for this network, [`Error::InvalidSource`] if a search cannot
/// start, and [`Error::ThreadPool`] if the dedicated pool cannot be built.
pub fn compute_accessibility(
    network: &Network,
    config: &AccessConfig,
) -> Result<AccessibilityResult, Error> {
    let facilities = network.facility_nodes();
    config.validate(facilities.len())?;
    let origins = config.origins.select(network);

    info!(
        "Computing accessibility of {} origins against {} facilities",
        origins.len(),
        facilities.len()
    );
    let started = Instant::now();

    let matrix = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| distance_matrix(network, origins, facilities))?,
        None => distance_matrix(network, origins, facilities)?,
    };
    debug!("Distance matrix filled in {:?}", started.elapsed());

    let masses: Vec<f64> = origins.iter().map(|&n| node_value(network, n)).collect();
    let values: Vec<f64> = facilities
        .iter()
        .map(|&n| node_value(network, n))
        .collect();

    let facility_metrics = facility_metrics(&matrix, &masses, &values, config.gravity_exponent);
    let metrics = origin_metrics(
        &matrix,
        &facility_metrics,
        config.gravity_exponent,
        config.multiplier,
        config.lowest_metrics,
    );

    info!("Accessibility metrics computed in {:?}", started.elapsed());
    Ok(AccessibilityResult {
        origin_kind: config.origins,
        origins: origins.to_vec(),
        metrics,
        facilities: facilities.to_vec(),
        facility_metrics,
    })
}

/// Shortest distances from every origin to every target, one row per origin.
///
/// Rows are filled concurrently on the current rayon pool; each worker reuses
/// its own [`SearchState`].
///
/// # Errors
///
/// Returns [`Error::InvalidSource`] if any origin is not a node of `network`.
pub fn distance_matrix(
    network: &Network,
    origins: &[NodeId],
    targets: &[NodeId],
) -> Result<DistanceMatrix, Error> {
    let mut matrix = DistanceMatrix::new(origins.len(), targets.len());
    if targets.is_empty() {
        return Ok(matrix);
    }

    matrix.par_rows_mut().zip(origins.par_iter()).try_for_each_init(
        || SearchState::new(network.node_count()),
        |state, (row, &origin)| -> Result<(), Error> {
            state.run(network, origin)?;
            state.write_row(targets, row);
            Ok(())
        },
    )?;

    Ok(matrix)
}

fn node_value(network: &Network, node: NodeId) -> f64 {
    network.node(node).map_or(0.0, |n| n.value)
}
