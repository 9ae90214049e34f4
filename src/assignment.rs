use std::ops::Range;

use crate::state::{FanCategory, Gate};

/// Gate indices a fan may join. With priority lanes enabled, season ticket
/// holders keep to the priority pool and everyone else to the general pool;
/// a category whose pool is empty falls back to the full range.
pub fn eligible_range(
    category: FanCategory,
    num_gates: usize,
    num_priority_gates: usize,
    season_ticket_priority: bool,
) -> Range<usize> {
    if !season_ticket_priority || num_priority_gates == 0 {
        return 0..num_gates;
    }
    if category == FanCategory::Season {
        0..num_priority_gates
    } else if num_priority_gates >= num_gates {
        0..num_gates
    } else {
        num_priority_gates..num_gates
    }
}

/// Shortest queue in the range wins; ties go to the lowest index.
pub fn pick_gate(gates: &[Gate], range: Range<usize>) -> usize {
    let mut best = range.start;
    let mut min_len = usize::MAX;
    for idx in range {
        let len = gates[idx].queue.len();
        if len < min_len {
            best = idx;
            min_len = len;
        }
    }
    best
}

/// Globally shortest queue, ignoring the priority partition. The impatience
/// switch is allowed to cross lane boundaries.
pub fn shortest_queue(gates: &[Gate]) -> usize {
    pick_gate(gates, 0..gates.len())
}
