//! Per-search node state.

use arcgraph_core::{Cost, NodeId};

/// Where a node is in the life cycle of a single search.
///
/// A node only moves forward: `Unvisited -> Frontier -> Settled`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Not discovered yet.
    Unvisited,
    /// Discovered (marked) and waiting in the frontier, its cost may still decrease.
    Frontier,
    /// Taken from the frontier, its neighbours have been relaxed.
    Settled,
}

#[derive(Clone, Debug)]
struct Entry {
    phase: Phase,
    cost: Option<Cost>,
    estimate: f64,
    previous: Option<NodeId>,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            phase: Phase::Unvisited,
            cost: None,
            estimate: 0.0,
            previous: None,
        }
    }
}

/// Search context: cost, estimate, phase and back-pointer of every node slot.
///
/// A fresh context is allocated by every goal-directed search, so searches never see
/// each other's state and the graph itself is never modified by them.
/// Queries about slots outside the context return the "unvisited" defaults.
#[derive(Clone, Debug)]
pub struct SearchState {
    entries: Vec<Entry>,
}

impl SearchState {
    pub(crate) fn new(capacity: usize) -> Self {
        SearchState {
            entries: vec![Entry::default(); capacity],
        }
    }

    /// Cost of the cheapest known path from the start (g-cost). `None` means unknown.
    pub fn cost(&self, id: NodeId) -> Option<Cost> {
        self.entries.get(id.index()).and_then(|e| e.cost)
    }

    /// Estimated remaining cost (h-cost) recorded for the node.
    pub fn estimate(&self, id: NodeId) -> f64 {
        self.entries.get(id.index()).map_or(0.0, |e| e.estimate)
    }

    pub fn phase(&self, id: NodeId) -> Phase {
        self.entries.get(id.index()).map_or(Phase::Unvisited, |e| e.phase)
    }

    /// Whether the node has been discovered by the search.
    pub fn is_marked(&self, id: NodeId) -> bool {
        self.phase(id) != Phase::Unvisited
    }

    pub fn is_settled(&self, id: NodeId) -> bool {
        self.phase(id) == Phase::Settled
    }

    /// Predecessor of the node on the best path found.
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.entries.get(id.index()).and_then(|e| e.previous)
    }

    pub(crate) fn mark(&mut self, id: NodeId) {
        let entry = &mut self.entries[id.index()];
        debug_assert_eq!(entry.phase, Phase::Unvisited);
        entry.phase = Phase::Frontier;
    }

    pub(crate) fn settle(&mut self, id: NodeId) {
        let entry = &mut self.entries[id.index()];
        debug_assert_eq!(entry.phase, Phase::Frontier);
        entry.phase = Phase::Settled;
    }

    /// Put a settled node back on the frontier after a cheaper path to it was found.
    pub(crate) fn reopen(&mut self, id: NodeId) {
        let entry = &mut self.entries[id.index()];
        debug_assert_eq!(entry.phase, Phase::Settled);
        entry.phase = Phase::Frontier;
    }

    pub(crate) fn set_cost(&mut self, id: NodeId, cost: Cost, previous: Option<NodeId>) {
        let entry = &mut self.entries[id.index()];
        debug_assert_ne!(entry.phase, Phase::Settled, "Settled node {} relaxed", id);
        entry.cost = Some(cost);
        entry.previous = previous;
    }

    pub(crate) fn set_estimate(&mut self, id: NodeId, estimate: f64) {
        self.entries[id.index()].estimate = estimate;
    }

    /// Walk the back-pointers from `goal` to `start`.
    /// Returns the nodes goal first, or `None` if the chain does not lead to `start`.
    pub(crate) fn reverse_path(&self, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
        let mut rev_path = vec![goal];
        let mut cur_id = goal;
        while cur_id != start {
            // A chain longer than the number of slots has a cycle in it
            if rev_path.len() > self.entries.len() {
                return None;
            }
            cur_id = self.previous(cur_id)?;
            rev_path.push(cur_id);
        }
        Some(rev_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SearchState::new(3);
        assert_eq!(state.phase(NodeId(1)), Phase::Unvisited);
        assert_eq!(state.cost(NodeId(1)), None);
        assert_eq!(state.previous(NodeId(1)), None);
        assert_eq!(state.estimate(NodeId(1)), 0.0);
        assert!(!state.is_marked(NodeId(7)));
        assert_eq!(state.cost(NodeId(7)), None);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = SearchState::new(2);
        state.mark(NodeId(0));
        assert!(state.is_marked(NodeId(0)));
        assert!(!state.is_settled(NodeId(0)));
        state.settle(NodeId(0));
        assert_eq!(state.phase(NodeId(0)), Phase::Settled);
        state.reopen(NodeId(0));
        assert_eq!(state.phase(NodeId(0)), Phase::Frontier);
        state.set_cost(NodeId(0), 1, None);
        assert_eq!(state.cost(NodeId(0)), Some(1));
    }

    #[test]
    fn test_reverse_path() {
        let mut state = SearchState::new(4);
        state.set_cost(NodeId(0), 0, None);
        state.set_cost(NodeId(2), 3, Some(NodeId(0)));
        state.set_cost(NodeId(3), 4, Some(NodeId(2)));
        assert_eq!(state.reverse_path(NodeId(0), NodeId(3)), Some(vec![NodeId(3), NodeId(2), NodeId(0)]));
        assert_eq!(state.reverse_path(NodeId(0), NodeId(0)), Some(vec![NodeId(0)]));
        assert_eq!(state.reverse_path(NodeId(0), NodeId(1)), None);

        state.set_cost(NodeId(1), 5, Some(NodeId(3)));
        state.set_cost(NodeId(3), 6, Some(NodeId(1)));
        assert_eq!(state.reverse_path(NodeId(0), NodeId(3)), None);
    }
}
