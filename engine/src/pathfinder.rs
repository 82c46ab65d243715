//! Shortest safe route search
//!
//! Breadth-first search from any room to the nearest exit that can be reached
//! without stepping into a known hazard. Hidden hazards are invisible to the
//! map and are searched through like ordinary rooms.
//!
//! The queue only carries node IDs. Because every room records its parent,
//! the route is rebuilt once from the winning exit instead of cloning a
//! partial path per enqueued child.

use crate::node::{Direction, DungeonTree, NodeId};
use crate::route::Route;
use std::collections::VecDeque;
use tracing::trace;

/// Find the shortest route from `from` to the nearest exit that never passes
/// through a known hazard.
///
/// Children are enqueued LEFT, MIDDLE, RIGHT, so among equally short routes
/// the lexicographically first one (L < M < R) wins. Returns an empty route
/// when no exit is reachable, when `from` is itself a known hazard, or when
/// `from` is already an exit.
pub fn find_shortest_safe_path(tree: &DungeonTree, from: NodeId) -> Route {
    let mut queue: VecDeque<NodeId> = VecDeque::from([from]);
    let mut expanded = 0usize;

    while let Some(id) = queue.pop_front() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        if node.is_known_hazard {
            continue;
        }
        if node.is_exit {
            let directions = tree.directions_between(from, id).unwrap_or_default();
            trace!(
                from = from,
                exit = id,
                expanded = expanded,
                length = directions.len(),
                "route found"
            );
            return Route::new(directions);
        }
        expanded += 1;
        queue.extend(Direction::ALL.iter().filter_map(|&d| node.child(d)));
    }

    trace!(from = from, expanded = expanded, "no reachable exit");
    Route::default()
}
