//! Arena of nodes, arcs and lines with order-stable partitions

use log::debug;
use petgraph::Direction;
use petgraph::graph::DiGraph;

use super::{Arc, ArcKind, Line, Node, NodeKind};
use crate::{ArcId, BOARDING_EPSILON, Cost, Error, LineId, NodeId};

/// Immutable transit network.
///
/// Nodes and arcs live in a petgraph arena; their indices are the stable
/// identities used everywhere else. Partitions keep insertion order, so
/// iteration over e.g. [`Network::stop_nodes`] is reproducible.
#[derive(Debug, Clone)]
pub struct Network {
    graph: DiGraph<Node, Arc>,
    lines: Vec<Line>,
    stop_nodes: Vec<NodeId>,
    boarding_nodes: Vec<NodeId>,
    population_nodes: Vec<NodeId>,
    facility_nodes: Vec<NodeId>,
    core_nodes: Vec<NodeId>,
    access_arcs: Vec<ArcId>,
    core_arcs: Vec<ArcId>,
    line_arcs: Vec<ArcId>,
    boarding_arcs: Vec<ArcId>,
    alighting_arcs: Vec<ArcId>,
    walking_arcs: Vec<ArcId>,
}

impl Network {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.graph.node_count()
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.graph.node_weight(node)
    }

    pub fn arc(&self, arc: ArcId) -> Option<&Arc> {
        self.graph.edge_weight(arc)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.graph.edge_weights()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, line: LineId) -> Option<&Line> {
        self.lines.get(line)
    }

    pub fn stop_nodes(&self) -> &[NodeId] {
        &self.stop_nodes
    }

    pub fn boarding_nodes(&self) -> &[NodeId] {
        &self.boarding_nodes
    }

    pub fn population_nodes(&self) -> &[NodeId] {
        &self.population_nodes
    }

    pub fn facility_nodes(&self) -> &[NodeId] {
        &self.facility_nodes
    }

    /// Stops and boarding nodes, the nodes joined by core arcs
    pub fn core_nodes(&self) -> &[NodeId] {
        &self.core_nodes
    }

    pub fn access_arcs(&self) -> &[ArcId] {
        &self.access_arcs
    }

    /// All non-access arcs in insertion order. Flow files index into this list.
    pub fn core_arcs(&self) -> &[ArcId] {
        &self.core_arcs
    }

    pub fn line_arcs(&self) -> &[ArcId] {
        &self.line_arcs
    }

    pub fn boarding_arcs(&self) -> &[ArcId] {
        &self.boarding_arcs
    }

    pub fn alighting_arcs(&self) -> &[ArcId] {
        &self.alighting_arcs
    }

    pub fn walking_arcs(&self) -> &[ArcId] {
        &self.walking_arcs
    }

    /// Outgoing non-access arcs of `node`
    pub fn core_out(&self, node: NodeId) -> impl Iterator<Item = &Arc> {
        self.incident(node, Direction::Outgoing)
            .filter(|arc| arc.kind.is_core())
    }

    /// Incoming non-access arcs of `node`
    pub fn core_in(&self, node: NodeId) -> impl Iterator<Item = &Arc> {
        self.incident(node, Direction::Incoming)
            .filter(|arc| arc.kind.is_core())
    }

    /// Access arcs touching `node` in either direction
    pub fn access_arcs_at(&self, node: NodeId) -> impl Iterator<Item = &Arc> {
        self.incident(node, Direction::Outgoing)
            .chain(self.incident(node, Direction::Incoming))
            .filter(|arc| arc.kind == ArcKind::Access)
    }

    fn incident(&self, node: NodeId, direction: Direction) -> impl Iterator<Item = &Arc> {
        self.graph
            .edges_directed(node, direction)
            .map(|edge| edge.weight())
    }

    pub fn network_info(&self) -> String {
        format!(
            "{} nodes ({} stops, {} boarding, {} population, {} facilities), \
             {} arcs ({} core, {} access), {} lines",
            self.node_count(),
            self.stop_nodes.len(),
            self.boarding_nodes.len(),
            self.population_nodes.len(),
            self.facility_nodes.len(),
            self.arc_count(),
            self.core_arcs.len(),
            self.access_arcs.len(),
            self.lines.len()
        )
    }
}

/// Incremental constructor for [`Network`]
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    graph: DiGraph<Node, Arc>,
    lines: Vec<Line>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Adds a node; `value` is its population mass or attractiveness and
    /// should be finite and nonnegative.
    pub fn add_node(&mut self, kind: NodeKind, value: f64) -> NodeId {
        let id = NodeId::new(self.graph.node_count());
        self.graph.add_node(Node { id, kind, value })
    }

    pub fn add_line(&mut self, line: Line) -> LineId {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Adds an arc and registers it with its line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for unknown endpoints or lines, for a
    /// line or boarding arc without a line, and for a negative or non-finite cost.
    pub fn add_arc(
        &mut self,
        kind: ArcKind,
        tail: NodeId,
        head: NodeId,
        cost: Cost,
        line: Option<LineId>,
    ) -> Result<ArcId, Error> {
        let node_count = self.graph.node_count();
        if tail.index() >= node_count || head.index() >= node_count {
            return Err(Error::InvalidData(format!(
                "Arc {}->{} references a node outside 0..{node_count}",
                tail.index(),
                head.index()
            )));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::InvalidData(format!(
                "Arc {}->{} has invalid cost {cost}",
                tail.index(),
                head.index()
            )));
        }
        if let Some(line_id) = line {
            if line_id >= self.lines.len() {
                return Err(Error::InvalidData(format!(
                    "Arc {}->{} references unknown line {line_id}",
                    tail.index(),
                    head.index()
                )));
            }
        } else if matches!(kind, ArcKind::Line | ArcKind::Boarding) {
            return Err(Error::InvalidData(format!(
                "{kind:?} arc {}->{} has no line",
                tail.index(),
                head.index()
            )));
        }

        let cost = if kind.is_mode_change() {
            cost + BOARDING_EPSILON
        } else {
            cost
        };

        let id = ArcId::new(self.graph.edge_count());
        self.graph.add_edge(
            tail,
            head,
            Arc {
                id,
                kind,
                tail,
                head,
                cost,
                line,
            },
        );

        if let Some(line) = line.map(|l| &mut self.lines[l]) {
            match kind {
                ArcKind::Line => line.in_vehicle.push(id),
                ArcKind::Boarding => {
                    line.boarding.push(id);
                    line.stops.push(tail);
                }
                _ => {}
            }
        }

        Ok(id)
    }

    pub fn build(self) -> Network {
        let mut network = Network {
            graph: self.graph,
            lines: self.lines,
            stop_nodes: Vec::new(),
            boarding_nodes: Vec::new(),
            population_nodes: Vec::new(),
            facility_nodes: Vec::new(),
            core_nodes: Vec::new(),
            access_arcs: Vec::new(),
            core_arcs: Vec::new(),
            line_arcs: Vec::new(),
            boarding_arcs: Vec::new(),
            alighting_arcs: Vec::new(),
            walking_arcs: Vec::new(),
        };

        for node in network.graph.node_weights() {
            if node.kind.is_core() {
                network.core_nodes.push(node.id);
            }
            match node.kind {
                NodeKind::Stop => network.stop_nodes.push(node.id),
                NodeKind::Boarding => network.boarding_nodes.push(node.id),
                NodeKind::Population => network.population_nodes.push(node.id),
                NodeKind::Facility => network.facility_nodes.push(node.id),
            }
        }

        for arc in network.graph.edge_weights() {
            if arc.kind == ArcKind::Access {
                network.access_arcs.push(arc.id);
                continue;
            }
            network.core_arcs.push(arc.id);
            match arc.kind {
                ArcKind::Line => network.line_arcs.push(arc.id),
                ArcKind::Boarding => network.boarding_arcs.push(arc.id),
                ArcKind::Alighting => network.alighting_arcs.push(arc.id),
                ArcKind::Walking => network.walking_arcs.push(arc.id),
                ArcKind::Access => {}
            }
        }

        debug!("Built network: {}", network.network_info());
        network
    }
}
