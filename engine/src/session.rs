//! A single play-through of a generated dungeon
//!
//! The session owns the tree, the player's position and steps so far, and
//! the best route from the current room. The route is recomputed from
//! scratch after every move.

use crate::error::{DungeonError, Result};
use crate::metrics::{GenerationMetrics, SessionReport};
use crate::node::{Direction, DungeonTree, Node, NodeId, Warning};
use crate::pathfinder::find_shortest_safe_path;
use crate::route::Route;
use tracing::debug;

/// Where the session stands after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    /// Reached an exit
    Escaped,
    /// Entered a hazard; `hidden` is true when the map could not see it
    Died { hidden: bool },
}

impl SessionStatus {
    pub fn is_over(self) -> bool {
        self != SessionStatus::InProgress
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    tree: DungeonTree,
    position: NodeId,
    steps: Vec<Direction>,
    initial_route: Route,
    best_route: Route,
    followed: usize,
    status: SessionStatus,
}

impl Session {
    /// Start at the root of `tree`.
    ///
    /// # Panics
    ///
    /// Panics if `tree` is empty.
    pub fn new(tree: DungeonTree) -> Self {
        assert!(!tree.is_empty(), "session needs a non-empty tree");
        let best_route = find_shortest_safe_path(&tree, DungeonTree::ROOT);
        Session {
            tree,
            position: DungeonTree::ROOT,
            steps: Vec::new(),
            initial_route: best_route.clone(),
            best_route,
            followed: 0,
            status: SessionStatus::InProgress,
        }
    }

    /// Step into the child in `direction`.
    pub fn move_player(&mut self, direction: Direction) -> Result<SessionStatus> {
        if self.status.is_over() {
            return Err(DungeonError::SessionOver);
        }
        let next = self
            .current_node()
            .child(direction)
            .ok_or(DungeonError::NoPassage { direction })?;

        if self.best_route.first() == Some(direction) {
            self.followed += 1;
        }
        self.steps.push(direction);
        self.position = next;
        self.best_route = find_shortest_safe_path(&self.tree, next);

        let node = self.current_node();
        // Hazard first: an exit carrying a hidden hazard still kills.
        self.status = if node.is_hazard() {
            SessionStatus::Died {
                hidden: node.is_hidden_hazard,
            }
        } else if node.is_exit {
            SessionStatus::Escaped
        } else {
            SessionStatus::InProgress
        };

        debug!(
            direction = %direction,
            node = next,
            steps = self.steps.len(),
            status = ?self.status,
            best_route = %self.best_route,
            "player moved"
        );
        Ok(self.status)
    }

    pub fn tree(&self) -> &DungeonTree {
        &self.tree
    }

    pub fn position(&self) -> NodeId {
        self.position
    }

    pub fn current_node(&self) -> &Node {
        &self.tree.nodes[self.position as usize]
    }

    /// Traveler's hint for the current room
    pub fn warning(&self) -> Option<Warning> {
        self.current_node().warning
    }

    /// Best route from the current room
    pub fn best_route(&self) -> &Route {
        &self.best_route
    }

    /// Best route from the root, as computed at session start
    pub fn initial_route(&self) -> &Route {
        &self.initial_route
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Summarize the session so far.
    pub fn report(&self, metrics: &GenerationMetrics) -> SessionReport {
        let follow_percentage = if self.steps.is_empty() {
            0.0
        } else {
            self.followed as f64 / self.steps.len() as f64
        };
        SessionReport {
            rooms: metrics.rooms,
            known_hazards: metrics.known_hazards,
            hidden_hazards: metrics.hidden_hazards,
            shortest_path_length: self.initial_route.len(),
            steps_taken: self.steps.len(),
            follow_percentage,
            success: self.status == SessionStatus::Escaped,
            died_by_hidden_hazard: self.status == SessionStatus::Died { hidden: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Direction::{Left, Middle, Right};
    use crate::test_tree::{build_hidden_hazard_tree, build_scenario_tree, build_tie_tree};

    #[test]
    fn test_new_session_starts_at_root() {
        let session = Session::new(build_scenario_tree());
        assert_eq!(session.position(), DungeonTree::ROOT);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.best_route().directions(), &[Left]);
        assert!(session.steps().is_empty());
        assert!(session.warning().is_some());
    }

    #[test]
    fn test_following_the_map_escapes() {
        let mut session = Session::new(build_tie_tree());
        assert_eq!(session.move_player(Middle).unwrap(), SessionStatus::InProgress);
        assert_eq!(session.best_route().directions(), &[Left]);
        assert_eq!(session.move_player(Left).unwrap(), SessionStatus::Escaped);

        let report = session.report(&GenerationMetrics::default());
        assert!(report.success);
        assert_eq!(report.steps_taken, 2);
        assert_eq!(report.shortest_path_length, 2);
        assert!((report.follow_percentage - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_is_recomputed_after_deviation() {
        let mut session = Session::new(build_tie_tree());
        session.move_player(Right).unwrap();
        assert_eq!(session.best_route().directions(), &[Right]);
        assert_eq!(session.initial_route().directions(), &[Middle, Left]);
        session.move_player(Right).unwrap();

        let report = session.report(&GenerationMetrics::default());
        assert!(report.success);
        assert!((report.follow_percentage - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_known_hazard_kills() {
        let mut session = Session::new(build_scenario_tree());
        let status = session.move_player(Middle).unwrap();
        assert_eq!(status, SessionStatus::Died { hidden: false });
        assert!(session.best_route().is_empty());

        let report = session.report(&GenerationMetrics::default());
        assert!(!report.success);
        assert!(!report.died_by_hidden_hazard);
        assert_eq!(report.follow_percentage, 0.0);
    }

    #[test]
    fn test_hidden_hazard_kills_even_on_the_route() {
        let mut session = Session::new(build_hidden_hazard_tree());
        assert_eq!(session.best_route().first(), Some(Left));
        let status = session.move_player(Left).unwrap();
        assert_eq!(status, SessionStatus::Died { hidden: true });
        assert!(session.report(&GenerationMetrics::default()).died_by_hidden_hazard);
    }

    #[test]
    fn test_hazard_wins_over_exit() {
        let mut tree = build_scenario_tree();
        let exit = tree.walk(DungeonTree::ROOT, &[Left]).unwrap();
        tree.get_mut(exit).unwrap().is_hidden_hazard = true;

        let mut session = Session::new(tree);
        assert_eq!(
            session.move_player(Left).unwrap(),
            SessionStatus::Died { hidden: true }
        );
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut session = Session::new(build_scenario_tree());
        session.move_player(Left).unwrap();
        assert_eq!(session.move_player(Left), Err(DungeonError::SessionOver));
        assert_eq!(session.steps().len(), 1);
    }

    #[test]
    fn test_wall_is_rejected() {
        let mut session = Session::new(build_tie_tree());
        session.move_player(Right).unwrap();
        session.move_player(Middle).unwrap();
        assert_eq!(
            session.move_player(Left),
            Err(DungeonError::NoPassage { direction: Left })
        );
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn test_report_carries_generation_metrics() {
        let session = Session::new(build_scenario_tree());
        let metrics = GenerationMetrics {
            rooms: 9,
            known_hazards: 4,
            hidden_hazards: 0,
        };
        let report = session.report(&metrics);
        assert_eq!(report.rooms, 9);
        assert_eq!(report.known_hazards, 4);
        assert_eq!(report.steps_taken, 0);
        assert_eq!(report.shortest_path_length, 1);
    }
}
