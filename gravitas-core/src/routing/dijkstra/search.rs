use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::state::State;
use crate::{Cost, Error, Network, NodeId};

/// Reusable buffers for repeated single-source searches on one network
#[derive(Debug, Clone)]
pub struct SearchState {
    distances: Vec<Cost>,
    settled: FixedBitSet,
    heap: BinaryHeap<State>,
}

impl SearchState {
    pub fn new(node_count: usize) -> Self {
        Self {
            distances: vec![Cost::INFINITY; node_count],
            settled: FixedBitSet::with_capacity(node_count),
            heap: BinaryHeap::with_capacity(node_count / 4),
        }
    }

    /// Distances of the last search, indexed by node; unreachable nodes are infinite
    pub fn distances(&self) -> &[Cost] {
        &self.distances
    }

    pub fn into_distances(self) -> Vec<Cost> {
        self.distances
    }

    /// Copies the distances of `targets` into `row`, position by position
    pub fn write_row(&self, targets: &[NodeId], row: &mut [Cost]) {
        for (slot, target) in row.iter_mut().zip(targets) {
            *slot = self.distances[target.index()];
        }
    }

    /// Dijkstra's algorithm from `source` over the core arcs.
    ///
    /// Access arcs only connect the ends of a trip: those touching the source
    /// seed its core neighbours, and those touching a facility connect it to
    /// the core afterwards. They are never used as intermediate hops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] if `source` is not a node of `network`.
    pub fn run(&mut self, network: &Network, source: NodeId) -> Result<&[Cost], Error> {
        if !network.contains_node(source) {
            return Err(Error::InvalidSource(source));
        }
        self.reset(network.node_count());

        self.label(source, 0.0);
        for arc in network.access_arcs_at(source) {
            if let Some(entry) = arc.opposite(source).filter(|&n| is_core(network, n)) {
                self.label(entry, arc.cost);
            }
        }

        while let Some(State { cost, node }) = self.heap.pop() {
            // Stale heap entry, the node was already finalized
            if self.settled.put(node.index()) {
                continue;
            }

            for arc in network.core_out(node) {
                self.label(arc.head, cost + arc.cost);
            }
        }

        self.connect_facilities(network, source);
        Ok(&self.distances)
    }

    fn reset(&mut self, node_count: usize) {
        self.distances.clear();
        self.distances.resize(node_count, Cost::INFINITY);
        self.settled.clear();
        self.settled.grow(node_count);
        self.heap.clear();
    }

    fn label(&mut self, node: NodeId, cost: Cost) {
        let slot = &mut self.distances[node.index()];
        if cost < *slot {
            *slot = cost;
            self.heap.push(State { cost, node });
        }
    }

    fn connect_facilities(&mut self, network: &Network, source: NodeId) {
        for &facility in network.facility_nodes() {
            let mut best = self.distances[facility.index()];
            for arc in network.access_arcs_at(facility) {
                let Some(other) = arc.opposite(facility) else {
                    continue;
                };
                if other != source && !is_core(network, other) {
                    continue;
                }
                best = best.min(self.distances[other.index()] + arc.cost);
            }
            self.distances[facility.index()] = best;
        }
    }
}

fn is_core(network: &Network, node: NodeId) -> bool {
    network.node(node).is_some_and(|n| n.kind.is_core())
}

/// Shortest travel cost from `source` to every node of `network`
///
/// # Errors
///
/// Returns [`Error::InvalidSource`] if `source` is not a node of `network`.
pub fn shortest_distances(network: &Network, source: NodeId) -> Result<Vec<Cost>, Error> {
    let mut state = SearchState::new(network.node_count());
    state.run(network, source)?;
    Ok(state.into_distances())
}
