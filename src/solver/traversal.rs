//! Graph traversals over the adjacency map.

use std::collections::{HashSet, VecDeque};

use crate::circuit::{Adjacency, ComponentId};

use super::MIN_LOOP_NODES;

/// Whether `target` can be reached from `start` by walking wires.
///
/// Existence-only breadth-first search with a global visited set. A node
/// trivially reaches itself.
pub fn is_reachable(adjacency: &Adjacency, start: &ComponentId, target: &ComponentId) -> bool {
    if start == target {
        return true;
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(node) = queue.pop_front() {
        for next in adjacency.neighbors(&node) {
            if *next == *target {
                return true;
            }
            if visited.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }
    false
}

/// Whether a genuine loop through both `component` and `source` exists.
///
/// Breadth-first search where each queued entry carries the set of nodes
/// visited along that particular path, so divergent branches explore
/// independently instead of sharing one visited set. A path that arrives at
/// the source is accepted only when it spans at least [`MIN_LOOP_NODES`]
/// distinct components; anything shorter is just walking back out over the
/// wire pair you came in on, which plain reachability would wrongly accept
/// for dead-end branches.
pub fn closes_loop(adjacency: &Adjacency, component: &ComponentId, source: &ComponentId) -> bool {
    let mut queue: VecDeque<(ComponentId, HashSet<ComponentId>)> = VecDeque::new();

    let mut initial = HashSet::new();
    initial.insert(component.clone());
    queue.push_back((component.clone(), initial));

    while let Some((node, path)) = queue.pop_front() {
        if node == *source && path.len() >= MIN_LOOP_NODES {
            return true;
        }
        for next in adjacency.neighbors(&node) {
            if path.contains(next) {
                continue;
            }
            let mut extended = path.clone();
            extended.insert(next.clone());
            queue.push_back((next.clone(), extended));
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Circuit, CurrentKind, PinIndex, Terminal, Wire};
    use crate::components::{Component, ComponentKind};

    /// Chain the named components together with wires, one per consecutive
    /// pair, then close the chain if asked.
    fn ring(names: &[&str], close: bool) -> Circuit {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        for name in names {
            let kind = if name.starts_with("BAT") {
                ComponentKind::Battery
            } else {
                ComponentKind::Bulb
            };
            circuit.add_component(Component::new(*name, kind));
        }
        let mut pairs: Vec<(&str, &str)> =
            names.windows(2).map(|pair| (pair[0], pair[1])).collect();
        if close {
            pairs.push((names[names.len() - 1], names[0]));
        }
        for (i, (a, b)) in pairs.iter().enumerate() {
            circuit.add_wire(Wire::new(
                format!("W{}", i).as_str(),
                Terminal::new(*a, PinIndex::B),
                Terminal::new(*b, PinIndex::A),
            ));
        }
        circuit
    }

    #[test]
    fn test_reachable_along_chain() {
        let circuit = ring(&["BAT1", "X", "Y", "Z"], false);
        let adjacency = Adjacency::build(&circuit);
        assert!(is_reachable(&adjacency, &"BAT1".into(), &"Z".into()));
        assert!(is_reachable(&adjacency, &"Z".into(), &"BAT1".into()));
    }

    #[test]
    fn test_reach_self_is_trivial() {
        let circuit = ring(&["BAT1", "X"], false);
        let adjacency = Adjacency::build(&circuit);
        assert!(is_reachable(&adjacency, &"BAT1".into(), &"BAT1".into()));
    }

    #[test]
    fn test_unreachable_across_islands() {
        let mut circuit = ring(&["BAT1", "X"], false);
        circuit.add_component(Component::new("LONER", ComponentKind::Fan));
        let adjacency = Adjacency::build(&circuit);
        assert!(!is_reachable(&adjacency, &"BAT1".into(), &"LONER".into()));
    }

    #[test]
    fn test_triangle_closes_loop() {
        let circuit = ring(&["BAT1", "X", "Y"], true);
        let adjacency = Adjacency::build(&circuit);
        assert!(closes_loop(&adjacency, &"X".into(), &"BAT1".into()));
        assert!(closes_loop(&adjacency, &"Y".into(), &"BAT1".into()));
    }

    #[test]
    fn test_direct_pair_is_trivial_backtrack() {
        // Two components joined by two parallel wires collapse to a single
        // edge; the two-node round trip is rejected as a loop.
        let mut circuit = ring(&["BAT1", "X"], false);
        circuit.add_wire(Wire::new(
            "W9",
            Terminal::new("X", PinIndex::B),
            Terminal::new("BAT1", PinIndex::A),
        ));
        let adjacency = Adjacency::build(&circuit);
        assert!(is_reachable(&adjacency, &"X".into(), &"BAT1".into()));
        assert!(!closes_loop(&adjacency, &"X".into(), &"BAT1".into()));
    }

    #[test]
    fn test_dead_end_next_to_source_does_not_close() {
        // X sits one wire from the battery with its second wire going to a
        // stub; every walk back to the battery is the two-node backtrack.
        let mut circuit = ring(&["BAT1", "A", "B"], true);
        circuit.add_component(Component::new("X", ComponentKind::Fan));
        circuit.add_component(Component::new("STUB", ComponentKind::Fan));
        circuit.add_wire(Wire::new(
            "W8",
            Terminal::new("BAT1", PinIndex::B),
            Terminal::new("X", PinIndex::A),
        ));
        circuit.add_wire(Wire::new(
            "W9",
            Terminal::new("X", PinIndex::B),
            Terminal::new("STUB", PinIndex::A),
        ));
        let adjacency = Adjacency::build(&circuit);
        assert!(is_reachable(&adjacency, &"X".into(), &"BAT1".into()));
        assert!(!closes_loop(&adjacency, &"X".into(), &"BAT1".into()));
    }

    #[test]
    fn test_branch_one_hop_off_a_ring_is_accepted() {
        // Known limit of the node-count rule: a branch hanging off a live
        // ring reaches the source over three distinct nodes and passes,
        // even though the branch itself cannot carry current.
        let mut circuit = ring(&["BAT1", "Y", "Z"], true);
        circuit.add_component(Component::new("X", ComponentKind::Fan));
        circuit.add_wire(Wire::new(
            "W8",
            Terminal::new("Y", PinIndex::B),
            Terminal::new("X", PinIndex::A),
        ));
        let adjacency = Adjacency::build(&circuit);
        assert!(closes_loop(&adjacency, &"X".into(), &"BAT1".into()));
    }

    #[test]
    fn test_long_ring_closes_loop() {
        let circuit = ring(&["BAT1", "A", "B", "C", "D", "E"], true);
        let adjacency = Adjacency::build(&circuit);
        for name in ["A", "B", "C", "D", "E"] {
            assert!(closes_loop(&adjacency, &name.into(), &"BAT1".into()));
        }
    }
}
