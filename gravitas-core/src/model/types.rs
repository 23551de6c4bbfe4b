//! Node and arc records

use crate::{ArcId, Cost, Error, LineId, NodeId};

/// Role a node plays in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Stop,
    Boarding,
    Population,
    Facility,
}

impl NodeKind {
    /// Stops and boarding points form the routable core of the network
    pub fn is_core(self) -> bool {
        matches!(self, NodeKind::Stop | NodeKind::Boarding)
    }
}

impl TryFrom<u8> for NodeKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(NodeKind::Stop),
            1 => Ok(NodeKind::Boarding),
            2 => Ok(NodeKind::Population),
            3 => Ok(NodeKind::Facility),
            other => Err(Error::InvalidData(format!("Unknown node type code {other}"))),
        }
    }
}

/// Role an arc plays in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcKind {
    /// In-vehicle travel between consecutive boarding points of a line
    Line,
    Boarding,
    Alighting,
    Walking,
    /// Connector between a population center or facility and the core network
    Access,
}

impl ArcKind {
    pub fn is_core(self) -> bool {
        self != ArcKind::Access
    }

    /// Boarding and alighting arcs carry [`crate::BOARDING_EPSILON`] on top of their nominal cost
    pub fn is_mode_change(self) -> bool {
        matches!(self, ArcKind::Boarding | ArcKind::Alighting)
    }
}

impl TryFrom<u8> for ArcKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ArcKind::Line),
            1 => Ok(ArcKind::Boarding),
            2 => Ok(ArcKind::Alighting),
            3 => Ok(ArcKind::Walking),
            4 => Ok(ArcKind::Access),
            other => Err(Error::InvalidData(format!("Unknown arc type code {other}"))),
        }
    }
}

/// Network node
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Population mass for origins, attractiveness for facilities
    pub value: f64,
}

/// Network arc
#[derive(Debug, Clone)]
pub struct Arc {
    pub id: ArcId,
    pub kind: ArcKind,
    pub tail: NodeId,
    pub head: NodeId,
    /// Effective cost, including the boarding epsilon where it applies
    pub cost: Cost,
    pub line: Option<LineId>,
}

impl Arc {
    /// Endpoint on the opposite side of `node`, if `node` is an endpoint at all
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.tail == node {
            Some(self.head)
        } else if self.head == node {
            Some(self.tail)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_codes_round_trip_to_kinds() {
        assert_eq!(NodeKind::try_from(0u8).unwrap(), NodeKind::Stop);
        assert_eq!(NodeKind::try_from(3u8).unwrap(), NodeKind::Facility);
        assert_eq!(ArcKind::try_from(1u8).unwrap(), ArcKind::Boarding);
        assert_eq!(ArcKind::try_from(4u8).unwrap(), ArcKind::Access);
        assert!(matches!(NodeKind::try_from(9u8), Err(Error::InvalidData(_))));
        assert!(matches!(ArcKind::try_from(5u8), Err(Error::InvalidData(_))));
    }

    #[test]
    fn only_access_arcs_leave_the_core() {
        assert!(ArcKind::Line.is_core());
        assert!(ArcKind::Walking.is_core());
        assert!(!ArcKind::Access.is_core());
        assert!(NodeKind::Boarding.is_core());
        assert!(!NodeKind::Facility.is_core());
    }

    #[test]
    fn opposite_endpoint() {
        let arc = Arc {
            id: ArcId::new(0),
            kind: ArcKind::Access,
            tail: NodeId::new(1),
            head: NodeId::new(2),
            cost: 1.0,
            line: None,
        };
        assert_eq!(arc.opposite(NodeId::new(1)), Some(NodeId::new(2)));
        assert_eq!(arc.opposite(NodeId::new(2)), Some(NodeId::new(1)));
        assert_eq!(arc.opposite(NodeId::new(3)), None);
    }
}
