//! Flow-to-capacity check of an initial flow vector

use log::info;

use crate::{Error, Network};

/// Loading factors of all core arcs and their summary statistics
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingFactors {
    /// One factor per core arc, aligned with [`Network::core_arcs`]
    pub factors: Vec<f64>,
    pub max: f64,
    /// Total factor divided by the number of core arcs
    pub mean_core: f64,
    /// Total factor divided by the number of in-vehicle arcs
    pub mean_line: f64,
}

/// Ratio of assigned flow to line capacity for every core arc.
///
/// Arcs without a line have factor 0. A line without capacity yields 0 for
/// zero flow and infinity otherwise.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if `flows` does not hold one value per core arc.
pub fn loading_factors(network: &Network, flows: &[f64]) -> Result<LoadingFactors, Error> {
    let core_arcs = network.core_arcs();
    if flows.len() != core_arcs.len() {
        return Err(Error::InvalidData(format!(
            "Expected {} arc flows, got {}",
            core_arcs.len(),
            flows.len()
        )));
    }

    let factors: Vec<f64> = core_arcs
        .iter()
        .zip(flows)
        .map(|(&arc, &flow)| {
            let capacity = network
                .arc(arc)
                .and_then(|a| a.line)
                .and_then(|line| network.line(line))
                .map(|line| line.capacity());
            match capacity {
                None => 0.0,
                Some(c) if c > 0.0 => flow / c,
                Some(_) if flow == 0.0 => 0.0,
                Some(_) => f64::INFINITY,
            }
        })
        .collect();

    let total: f64 = factors.iter().sum();
    let summary = LoadingFactors {
        max: factors.iter().copied().fold(0.0, f64::max),
        mean_core: mean(total, core_arcs.len()),
        mean_line: mean(total, network.line_arcs().len()),
        factors,
    };

    info!("Maximum loading factor: {}", summary.max);
    info!("Average loading factor (all core arcs): {}", summary.mean_core);
    info!("Average loading factor (line arcs only): {}", summary.mean_line);
    Ok(summary)
}

#[allow(clippy::cast_precision_loss)]
fn mean(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}
