//! Rows of the input files, deserialized by column position.
//!
//! Columns the model does not use are kept as strings so that any content
//! is accepted there.

use serde::Deserialize;

/// `ID Name Type Line Value`
#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub id: usize,
    pub name: String,
    pub node_type: u8,
    #[serde(default)]
    pub line: String,
    pub value: f64,
}

/// `ID Type Line Tail Head Time`
#[derive(Debug, Deserialize)]
pub struct RawArc {
    pub id: usize,
    pub arc_type: u8,
    /// Negative for arcs that belong to no line
    pub line: i64,
    pub tail: usize,
    pub head: usize,
    pub time: f64,
}

/// `ID Name Type Fleet Circuit Scaling LB UB Fare Frequency Capacity`
#[derive(Debug, Deserialize)]
pub struct RawLine {
    pub id: String,
    pub name: String,
    pub vehicle_type: i64,
    pub fleet: u32,
    pub circuit: f64,
    pub scaling: f64,
    #[serde(default)]
    pub lower_bound: String,
    #[serde(default)]
    pub upper_bound: String,
    #[serde(default)]
    pub fare: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub capacity: String,
}

/// `Type Name UB Seating Cost`
#[derive(Debug, Deserialize)]
pub struct RawVehicle {
    pub vehicle_type: i64,
    pub name: String,
    pub upper_bound: String,
    pub seating: f64,
    #[serde(default)]
    pub cost: String,
}

/// `ID Flow`, where ID is the position of the arc among the core arcs
#[derive(Debug, Deserialize)]
pub struct RawFlow {
    pub id: usize,
    pub flow: f64,
}

/// `Name Value`
#[derive(Debug, Deserialize)]
pub struct RawParameter {
    pub name: String,
    pub value: String,
}
