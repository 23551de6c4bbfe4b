//! Transit lines and their fleet-derived schedule quantities

use crate::{ArcId, NodeId};

/// A transit line operated by a fleet of identical vehicles
#[derive(Debug, Clone)]
pub struct Line {
    pub name: String,
    /// Time for one vehicle to complete a full round trip (minutes)
    pub circuit: f64,
    /// Seats per vehicle
    pub seating: f64,
    /// Fraction of the horizon during which the line operates
    pub day_fraction: f64,
    /// Length of the planning period (minutes)
    pub day_horizon: f64,
    pub fleet: u32,
    /// Stops served by the line, one entry per boarding arc
    pub stops: Vec<NodeId>,
    pub in_vehicle: Vec<ArcId>,
    pub boarding: Vec<ArcId>,
}

impl Line {
    pub fn new(
        name: impl Into<String>,
        circuit: f64,
        seating: f64,
        day_fraction: f64,
        day_horizon: f64,
        fleet: u32,
    ) -> Self {
        Self {
            name: name.into(),
            circuit,
            seating,
            day_fraction,
            day_horizon,
            fleet,
            stops: Vec::new(),
            in_vehicle: Vec::new(),
            boarding: Vec::new(),
        }
    }

    /// Vehicles per minute resulting from the current fleet
    pub fn frequency(&self) -> f64 {
        if self.circuit > 0.0 {
            f64::from(self.fleet) / self.circuit
        } else {
            0.0
        }
    }

    /// Average time between departures, infinite for a line without vehicles
    pub fn headway(&self) -> f64 {
        if self.fleet > 0 {
            self.circuit / f64::from(self.fleet)
        } else {
            f64::INFINITY
        }
    }

    /// Seats offered over the whole horizon
    pub fn capacity(&self) -> f64 {
        self.frequency() * self.day_fraction * self.day_horizon * self.seating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fleet: u32) -> Line {
        Line::new("L", 60.0, 40.0, 0.75, 1440.0, fleet)
    }

    #[test]
    fn derived_quantities() {
        let l = line(4);
        assert_eq!(l.frequency(), 4.0 / 60.0);
        assert_eq!(l.headway(), 15.0);
        assert!((l.capacity() - (4.0 / 60.0) * 0.75 * 1440.0 * 40.0).abs() < 1e-9);
    }

    #[test]
    fn empty_fleet_has_no_service() {
        let l = line(0);
        assert_eq!(l.frequency(), 0.0);
        assert!(l.headway().is_infinite());
        assert_eq!(l.capacity(), 0.0);
    }

    #[test]
    fn capacity_never_decreases_with_fleet() {
        let mut previous = line(0).capacity();
        for fleet in 1..50 {
            let capacity = line(fleet).capacity();
            assert!(capacity >= previous, "fleet {fleet}: {capacity} < {previous}");
            previous = capacity;
        }
    }

    #[test]
    fn zero_circuit_does_not_divide_by_zero() {
        let l = Line::new("broken", 0.0, 40.0, 1.0, 1440.0, 3);
        assert_eq!(l.frequency(), 0.0);
        assert_eq!(l.capacity(), 0.0);
        assert_eq!(l.headway(), 0.0);
    }
}
