//! Tab-separated input files: raw row types and their parsers

mod parser;
mod raw_types;

pub use parser::{deserialize_tsv_file, read_horizon};
pub use raw_types::{RawArc, RawFlow, RawLine, RawNode, RawParameter, RawVehicle};
