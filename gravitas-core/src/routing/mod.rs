//! Shortest-path searches over the core network

pub mod dijkstra;
