use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::Error;

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        ))
    })
}

fn tsv_reader(file: File, has_headers: bool) -> csv::Reader<File> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file)
}

/// Reads every row after the header line of a tab-separated file
///
/// # Errors
///
/// Fails if the file cannot be opened or any row does not match `T`;
/// the error names the file and the line.
pub fn deserialize_tsv_file<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
{
    let mut reader = tsv_reader(open(path)?, true);
    reader
        .records()
        .map(|record| {
            let record = record?;
            record.deserialize(None).map_err(|e| {
                let line = record.position().map_or(0, csv::Position::line);
                Error::InvalidData(format!("{} line {line}: {e}", path.display()))
            })
        })
        .collect()
}

/// Planning horizon from the third line of a problem file (`Name Horizon`)
///
/// # Errors
///
/// Fails if the file cannot be opened or the horizon is missing or not a number.
pub fn read_horizon(path: &Path) -> Result<f64, Error> {
    let mut reader = tsv_reader(open(path)?, false);
    let record = reader
        .records()
        .nth(2)
        .transpose()?
        .ok_or_else(|| Error::InvalidData(format!("{}: missing horizon line", path.display())))?;

    record
        .get(1)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|horizon| horizon.is_finite() && *horizon > 0.0)
        .ok_or_else(|| {
            Error::InvalidData(format!(
                "{}: invalid horizon {:?}",
                path.display(),
                record.get(1)
            ))
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::loading::tsv::{RawArc, RawLine};

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn skips_header_and_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "arcs.txt",
            "ID\tType\tLine\tTail\tHead\tTime\n0\t3\t-1\t0\t1\t2.5\n\n1\t1\t0\t1\t2\t4\n",
        );
        let arcs: Vec<RawArc> = deserialize_tsv_file(&path).unwrap();
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].line, -1);
        assert_eq!(arcs[1].time, 4.0);
    }

    #[test]
    fn unused_trailing_columns_are_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "transit.txt",
            "ID\tName\tType\tFleet\tCircuit\tScaling\n0\tRed\t1\t5\t62.5\t0.8\n",
        );
        let lines: Vec<RawLine> = deserialize_tsv_file(&path).unwrap();
        assert_eq!(lines[0].name, "Red");
        assert_eq!(lines[0].fleet, 5);
        assert!(lines[0].capacity.is_empty());
    }

    #[test]
    fn malformed_row_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "arcs.txt", "header\n0\t3\t-1\t0\tone\t2.5\n");
        let err = deserialize_tsv_file::<RawArc>(&path).unwrap_err();
        assert!(matches!(&err, Error::InvalidData(msg) if msg.contains("arcs.txt")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = deserialize_tsv_file::<RawArc>(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn reads_horizon_from_third_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "problem.txt", "comment\nName\tHorizon\ncity\t1080\n");
        assert_eq!(read_horizon(&path).unwrap(), 1080.0);

        let short = write(&dir, "short.txt", "comment\nName\tHorizon\n");
        assert!(matches!(read_horizon(&short), Err(Error::InvalidData(_))));
    }
}
