//! Hand-built fixture trees for path-finding and session tests
//!
//! Each builder documents its layout with `L`/`M`/`R` paths from the root.
//! Rooms listed without a flag are plain rooms; a plain room with no listed
//! children is a dead end (all walls).

use crate::node::Direction::{Left, Middle, Right};
use crate::node::{Direction, DungeonTree, NodeId, Warning};

fn exit(tree: &mut DungeonTree, parent: NodeId, direction: Direction) -> NodeId {
    let id = tree.attach(parent, direction);
    tree.nodes[id as usize].is_exit = true;
    id
}

fn known_hazard(tree: &mut DungeonTree, parent: NodeId, direction: Direction) -> NodeId {
    let id = tree.attach(parent, direction);
    tree.nodes[id as usize].is_known_hazard = true;
    id
}

fn warn(tree: &mut DungeonTree, id: NodeId, first: Direction, second: Direction) {
    tree.nodes[id as usize].warning = Some(Warning { first, second });
}

/// Fill every child slot of `parent` with a known hazard.
fn hazards_all_round(tree: &mut DungeonTree, parent: NodeId) {
    for direction in Direction::ALL {
        known_hazard(tree, parent, direction);
    }
    warn(tree, parent, Left, Right);
}

/// One level deep:
///   L   exit
///   M   known hazard
///   R   room, all three children known hazards
pub fn build_scenario_tree() -> DungeonTree {
    let mut tree = DungeonTree::with_root();
    let root = DungeonTree::ROOT;
    exit(&mut tree, root, Left);
    known_hazard(&mut tree, root, Middle);
    let right = tree.attach(root, Right);
    hazards_all_round(&mut tree, right);
    warn(&mut tree, root, Middle, Right);
    tree
}

/// The only exit sits behind a known hazard:
///   L   known hazard
///   LL  exit
///   M   room, all children known hazards
///   R   room, all children known hazards
pub fn build_blocked_exit_tree() -> DungeonTree {
    let mut tree = DungeonTree::with_root();
    let root = DungeonTree::ROOT;
    let left = known_hazard(&mut tree, root, Left);
    exit(&mut tree, left, Left);
    let middle = tree.attach(root, Middle);
    hazards_all_round(&mut tree, middle);
    let right = tree.attach(root, Right);
    hazards_all_round(&mut tree, right);
    warn(&mut tree, root, Left, Middle);
    tree
}

/// Three exits at depth 2; `ML` is the lexicographically first:
///   L   room, all children known hazards
///   M   room
///   ML  exit
///   MM  known hazard
///   MR  exit
///   R   room
///   RL  known hazard
///   RM  room (dead end)
///   RR  exit
pub fn build_tie_tree() -> DungeonTree {
    let mut tree = DungeonTree::with_root();
    let root = DungeonTree::ROOT;

    let left = tree.attach(root, Left);
    hazards_all_round(&mut tree, left);

    let middle = tree.attach(root, Middle);
    exit(&mut tree, middle, Left);
    known_hazard(&mut tree, middle, Middle);
    exit(&mut tree, middle, Right);
    warn(&mut tree, middle, Middle, Left);

    let right = tree.attach(root, Right);
    known_hazard(&mut tree, right, Left);
    tree.attach(right, Middle);
    exit(&mut tree, right, Right);
    warn(&mut tree, right, Right, Left);

    tree
}

/// The nearest exit lies beneath a hidden hazard:
///   L   hidden hazard (room with its own subtree)
///   LL  known hazard
///   LM  room (dead end)
///   LR  exit
///   M   known hazard
///   R   room
///   RL  room (dead end)
///   RM  room
///   RML exit
pub fn build_hidden_hazard_tree() -> DungeonTree {
    let mut tree = DungeonTree::with_root();
    let root = DungeonTree::ROOT;

    let left = tree.attach(root, Left);
    tree.nodes[left as usize].is_hidden_hazard = true;
    known_hazard(&mut tree, left, Left);
    tree.attach(left, Middle);
    exit(&mut tree, left, Right);
    warn(&mut tree, left, Left, Right);

    known_hazard(&mut tree, root, Middle);

    let right = tree.attach(root, Right);
    tree.attach(right, Left);
    let right_middle = tree.attach(right, Middle);
    exit(&mut tree, right_middle, Left);

    warn(&mut tree, root, Middle, Left);
    tree
}
