//! Generation and session metrics

use std::ops::AddAssign;

/// Counters produced while a tree is built.
///
/// `rooms` keeps the historical counting rules: an exit room counts twice and
/// a hidden-hazard overlay adds one more room on top of its subtree. Use
/// [`crate::DungeonTree::len`] for the exact node count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationMetrics {
    pub rooms: u64,
    pub known_hazards: u64,
    pub hidden_hazards: u64,
}

impl AddAssign for GenerationMetrics {
    fn add_assign(&mut self, other: Self) {
        self.rooms += other.rooms;
        self.known_hazards += other.known_hazards;
        self.hidden_hazards += other.hidden_hazards;
    }
}

/// End-of-session summary handed to whatever reports on play.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub rooms: u64,
    pub known_hazards: u64,
    pub hidden_hazards: u64,
    /// Length of the best route from the root at session start
    pub shortest_path_length: usize,
    pub steps_taken: usize,
    /// Fraction of moves that matched the map's recommendation, in [0, 1]
    pub follow_percentage: f64,
    pub success: bool,
    pub died_by_hidden_hazard: bool,
}
