//! Accessibility computation: distance matrix, gravity aggregation and the
//! parallel driver tying them to the shortest-path search.

pub mod accessibility;
pub mod gravity;
pub mod matrix;
