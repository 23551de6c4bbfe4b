use std::cmp::Ordering;

use crate::{Cost, NodeId};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct State {
    pub(super) cost: Cost,
    pub(super) node: NodeId,
}

impl Eq for State {}

// Min-heap by (cost, node): reversed from standard Rust BinaryHeap,
// node index breaks ties so equal-cost labels settle in a fixed order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn pops_lowest_cost_then_lowest_node() {
        let mut heap = BinaryHeap::new();
        for (cost, node) in [(2.0, 0), (1.0, 5), (1.0, 3), (0.5, 9)] {
            heap.push(State {
                cost,
                node: NodeId::new(node),
            });
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|s| (s.cost, s.node.index()))
            .collect();
        assert_eq!(order, vec![(0.5, 9), (1.0, 3), (1.0, 5), (2.0, 0)]);
    }
}
