//! Tab-separated result files

use std::path::Path;

use hashbrown::HashMap;
use itertools::Itertools;
use log::info;

use crate::{AccessibilityResult, Error, LineId, Network, NodeId, Origins};

/// Metric of one stop served by one line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetric {
    pub line: LineId,
    pub stop: NodeId,
    pub metric: f64,
}

/// Origin metrics grouped by line, ascending by `(metric, stop)` within each line.
///
/// Stops that were not scored as origins are left out.
pub fn line_metrics(network: &Network, result: &AccessibilityResult) -> Vec<LineMetric> {
    let by_stop: HashMap<NodeId, f64> = result.pairs().collect();

    network
        .lines()
        .iter()
        .enumerate()
        .flat_map(|(line, record)| {
            record
                .stops
                .iter()
                .filter_map(|stop| by_stop.get(stop).map(|&metric| (metric, *stop)))
                .sorted_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
                .map(move |(metric, stop)| LineMetric { line, stop, metric })
        })
        .collect()
}

/// Writes `Stop_ID\tGravity_Metric` rows in origin order
///
/// Population center runs are labelled `Node_ID` instead of `Stop_ID`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_stop_metrics(path: &Path, result: &AccessibilityResult) -> Result<(), Error> {
    let mut writer = tsv_writer(path)?;
    let id_column = match result.origin_kind {
        Origins::Stops => "Stop_ID",
        Origins::Population => "Node_ID",
    };
    writer.write_record([id_column, "Gravity_Metric"])?;
    for (origin, metric) in result.pairs() {
        writer.write_record([origin.index().to_string(), format!("{metric:.15}")])?;
    }
    writer.flush()?;

    info!("Wrote {} stop metrics to {}", result.metrics.len(), path.display());
    Ok(())
}

/// Writes `Line_ID\tStop_ID\tGravity_Metric` rows
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_line_metrics(path: &Path, rows: &[LineMetric]) -> Result<(), Error> {
    let mut writer = tsv_writer(path)?;
    writer.write_record(["Line_ID", "Stop_ID", "Gravity_Metric"])?;
    for row in rows {
        writer.write_record([
            row.line.to_string(),
            row.stop.index().to_string(),
            format!("{:.15}", row.metric),
        ])?;
    }
    writer.flush()?;

    info!("Wrote {} line metrics to {}", rows.len(), path.display());
    Ok(())
}

fn tsv_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessConfig, ArcKind, Line, NetworkBuilder, NodeKind, compute_accessibility};

    fn served_network() -> (Network, [NodeId; 3]) {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node(NodeKind::Stop, 1.0);
        let b = builder.add_node(NodeKind::Stop, 1.0);
        let c = builder.add_node(NodeKind::Stop, 1.0);
        let f = builder.add_node(NodeKind::Facility, 1.0);
        builder.add_arc(ArcKind::Access, f, a, 1.0, None).unwrap();
        builder.add_arc(ArcKind::Walking, b, a, 1.0, None).unwrap();
        builder.add_arc(ArcKind::Walking, c, a, 3.0, None).unwrap();

        let line = builder.add_line(Line::new("1", 20.0, 30.0, 1.0, 1440.0, 2));
        for stop in [a, b, c] {
            let platform = builder.add_node(NodeKind::Boarding, 0.0);
            builder.add_arc(ArcKind::Boarding, stop, platform, 1.0, Some(line)).unwrap();
        }
        (builder.build(), [a, b, c])
    }

    #[test]
    fn line_stops_sorted_by_ascending_metric() {
        let (network, [a, b, c]) = served_network();
        let result = compute_accessibility(&network, &AccessConfig::default()).unwrap();

        let rows = line_metrics(&network, &result);
        let stops: Vec<_> = rows.iter().map(|r| r.stop).collect();
        assert_eq!(stops, vec![c, b, a]);
        assert!(rows.iter().all(|r| r.line == 0));
        assert!(rows.windows(2).all(|w| w[0].metric <= w[1].metric));
    }

    #[test]
    fn writes_tab_separated_files() {
        let (network, [a, ..]) = served_network();
        let result = compute_accessibility(&network, &AccessConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let stop_path = dir.path().join("output").join("stop_metrics.txt");
        write_stop_metrics(&stop_path, &result).unwrap();
        let content = std::fs::read_to_string(&stop_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Stop_ID\tGravity_Metric"));
        let expected = format!("{}\t{:.15}", a.index(), result.metrics[0]);
        assert_eq!(lines.next(), Some(expected.as_str()));
        assert_eq!(lines.count(), 2);

        let line_path = dir.path().join("line_metrics.txt");
        write_line_metrics(&line_path, &line_metrics(&network, &result)).unwrap();
        let content = std::fs::read_to_string(&line_path).unwrap();
        assert!(content.starts_with("Line_ID\tStop_ID\tGravity_Metric\n"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn population_runs_label_origins_as_nodes() {
        let mut builder = NetworkBuilder::new();
        let home = builder.add_node(NodeKind::Population, 2.0);
        let f = builder.add_node(NodeKind::Facility, 1.0);
        builder.add_arc(ArcKind::Access, home, f, 4.0, None).unwrap();
        let network = builder.build();
        let config = AccessConfig {
            origins: Origins::Population,
            ..AccessConfig::default()
        };
        let result = compute_accessibility(&network, &config).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("stop_metrics.txt");
        write_stop_metrics(&path, &result).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Node_ID\tGravity_Metric"));
        assert!(lines.next().unwrap().starts_with(&format!("{}\t", home.index())));
    }
}
