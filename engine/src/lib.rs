//! dungeon Engine - Core dungeon types and logic
//!
//! This crate contains the dungeon tree types, the shortest-safe-route search
//! and the play session that tracks a player against the map's advice.
//!
//! The engine has no randomness and zero UI dependencies; trees are built by
//! the `dungeon-tree` crate.

pub mod error;
pub mod metrics;
pub mod node;
pub mod pathfinder;
pub mod route;
pub mod session;
pub mod test_tree;

pub use error::{DungeonError, Result};
pub use metrics::{GenerationMetrics, SessionReport};
pub use node::{Direction, DungeonTree, Node, NodeId, Warning};
pub use pathfinder::find_shortest_safe_path;
pub use route::Route;
pub use session::{Session, SessionStatus};
