use std::path::Path;

use log::{info, warn};

use super::tsv::{RawParameter, deserialize_tsv_file};
use crate::{AccessConfig, Error};

/// Reads the gravity model parameters from an objective file.
///
/// Rows are `Name Value` pairs; names are matched case-insensitively and
/// parameters that are not listed keep their defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a known parameter has a
/// value of the wrong type.
pub fn load_objective(path: &Path) -> Result<AccessConfig, Error> {
    let mut config = AccessConfig::default();

    for RawParameter { name, value } in deserialize_tsv_file::<RawParameter>(path)? {
        let key = name.to_ascii_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "lowest_metrics" => config.lowest_metrics = parse(path, &name, &value)?,
            "gravity_exponent" => config.gravity_exponent = parse(path, &name, &value)?,
            "multiplier" => config.multiplier = parse(path, &name, &value)?,
            _ => warn!("Ignoring unknown objective parameter '{name}' in {}", path.display()),
        }
    }

    info!(
        "Objective parameters: gravity_exponent={}, multiplier={}, lowest_metrics={}",
        config.gravity_exponent, config.multiplier, config.lowest_metrics
    );
    Ok(config)
}

fn parse<T: std::str::FromStr>(path: &Path, name: &str, value: &str) -> Result<T, Error> {
    value.parse().map_err(|_| {
        Error::InvalidData(format!(
            "{}: invalid value '{value}' for {name}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("objective_data.txt");
        std::fs::write(
            &path,
            "Name\tValue\nLowest_Metrics\t4\nGravity_Exponent\t1.5\nMultiplier\t100\nElements\tx\n",
        )
        .unwrap();

        let config = load_objective(&path).unwrap();
        assert_eq!(config.lowest_metrics, 4);
        assert_eq!(config.gravity_exponent, 1.5);
        assert_eq!(config.multiplier, 100.0);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn rejects_malformed_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("objective_data.txt");
        std::fs::write(&path, "Name\tValue\nLowest_Metrics\tmany\n").unwrap();
        assert!(matches!(load_objective(&path), Err(Error::InvalidData(_))));
    }
}
