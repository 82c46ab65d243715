//! Node definitions for the dungeon tree
//!
//! The dungeon is a ternary decision tree stored as a flat arena. Every room
//! owns up to three child slots (left, middle, right); a slot holding `None`
//! is a wall the player cannot walk through. Rooms are written once while the
//! tree is generated and are read-only afterwards.

use std::fmt;

/// One of the three ternary choices available in every room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Left,
    Middle,
    Right,
}

impl Direction {
    /// All directions in slot order. Breadth-first search enqueues children
    /// in this order, which makes LEFT < MIDDLE < RIGHT the tie-break.
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Middle, Direction::Right];

    /// Child slot index (0, 1, 2)
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Middle => 1,
            Direction::Right => 2,
        }
    }

    /// Inverse of [`Direction::index`]
    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::ALL.get(index).copied()
    }

    /// Single-letter symbol used in route strings
    pub fn symbol(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Middle => 'M',
            Direction::Right => 'R',
        }
    }

    /// Parse a route symbol (case-insensitive)
    pub fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'M' => Some(Direction::Middle),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Lower-case name, as spoken in warnings
    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Middle => "middle",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A deliberately ambiguous hint: two candidate directions, at least one of
/// which leads into a hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warning {
    /// Direction named first in the text
    pub first: Direction,
    /// Direction named second in the text
    pub second: Direction,
}

impl Warning {
    /// Both named directions, in text order
    pub fn directions(&self) -> [Direction; 2] {
        [self.first, self.second]
    }

    /// Whether the warning names `direction`
    pub fn mentions(&self, direction: Direction) -> bool {
        self.first == direction || self.second == direction
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Traveler: I heard something dangerous near the {} and {}",
            self.first, self.second
        )
    }
}

/// Node ID type (index into flat array storage)
pub type NodeId = u32;

/// A room in the dungeon tree
///
/// The three flags are independent: a hidden hazard is an overlay and may sit
/// on top of an exit or an ordinary room with its own subtree. Consumers check
/// hazards before the exit flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique identifier for this node (index in flat array)
    pub id: NodeId,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Distance from the root
    pub depth: usize,
    /// Child slots indexed by [`Direction::index`]
    pub children: [Option<NodeId>; 3],
    /// Stepping in wins
    pub is_exit: bool,
    /// Lethal, and visible to the dungeon map
    pub is_known_hazard: bool,
    /// Lethal, and invisible to the dungeon map
    pub is_hidden_hazard: bool,
    /// Present iff at least one child is a known or hidden hazard
    pub warning: Option<Warning>,
}

impl Node {
    /// A plain room with no children and no flags
    pub fn room(id: NodeId, parent: Option<NodeId>, depth: usize) -> Self {
        Node {
            id,
            parent,
            depth,
            children: [None; 3],
            is_exit: false,
            is_known_hazard: false,
            is_hidden_hazard: false,
            warning: None,
        }
    }

    /// Child in the given direction, `None` for a wall
    pub fn child(&self, direction: Direction) -> Option<NodeId> {
        self.children[direction.index()]
    }

    /// Known or hidden hazard
    pub fn is_hazard(&self) -> bool {
        self.is_known_hazard || self.is_hidden_hazard
    }

    /// Entering this room ends the session
    pub fn is_terminal(&self) -> bool {
        self.is_exit || self.is_hazard()
    }

    /// No traversable children
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Warning text, empty when no child is hazardous
    pub fn warning_text(&self) -> String {
        self.warning.map(|w| w.to_string()).unwrap_or_default()
    }
}

/// Dungeon tree wrapper
///
/// Contains a flat array of nodes; node 0 is the root. Every child id is held
/// by exactly one parent slot, so the structure is a strict tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DungeonTree {
    /// Flat array of nodes indexed by NodeId
    pub nodes: Vec<Node>,
}

impl DungeonTree {
    /// Root ID of every non-empty tree
    pub const ROOT: NodeId = 0;

    /// Create a new empty tree
    pub fn new() -> Self {
        DungeonTree { nodes: Vec::new() }
    }

    /// Create a tree holding only a plain root room
    pub fn with_root() -> Self {
        DungeonTree {
            nodes: vec![Node::room(Self::ROOT, None, 0)],
        }
    }

    /// Append a detached room and return its ID
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `NodeId::MAX + 1` rooms.
    pub fn push_room(&mut self, parent: Option<NodeId>, depth: usize) -> NodeId {
        let Ok(id) = NodeId::try_from(self.nodes.len()) else {
            panic!("dungeon tree exceeds {} rooms", u64::from(NodeId::MAX) + 1);
        };
        self.nodes.push(Node::room(id, parent, depth));
        id
    }

    /// Create a plain room in `direction` beneath `parent` and return its ID.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the tree.
    pub fn attach(&mut self, parent: NodeId, direction: Direction) -> NodeId {
        let depth = self.nodes[parent as usize].depth + 1;
        let id = self.push_room(Some(parent), depth);
        self.nodes[parent as usize].children[direction.index()] = Some(id);
        id
    }

    /// The root node, if any
    pub fn root(&self) -> Option<&Node> {
        self.get(Self::ROOT)
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Get a mutable reference to a node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id as usize)
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest depth present in the tree
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Follow `directions` from `from`, returning every node visited
    /// (excluding `from`). Stops early at a wall.
    pub fn trail(&self, from: NodeId, directions: &[Direction]) -> Vec<NodeId> {
        let mut visited = Vec::with_capacity(directions.len());
        let mut current = from;
        for &direction in directions {
            match self.get(current).and_then(|n| n.child(direction)) {
                Some(next) => {
                    visited.push(next);
                    current = next;
                }
                None => break,
            }
        }
        visited
    }

    /// Node reached by following `directions` from `from`, `None` if a wall
    /// is hit on the way.
    pub fn walk(&self, from: NodeId, directions: &[Direction]) -> Option<NodeId> {
        directions.iter().try_fold(from, |current, &direction| {
            self.get(current)?.child(direction)
        })
    }

    /// Directions leading from `ancestor` down to `descendant`, reconstructed
    /// through parent links. `None` if `descendant` is not beneath `ancestor`.
    pub fn directions_between(
        &self,
        ancestor: NodeId,
        descendant: NodeId,
    ) -> Option<Vec<Direction>> {
        let mut directions = Vec::new();
        let mut current = descendant;
        while current != ancestor {
            let parent_id = self.get(current)?.parent?;
            let parent = self.get(parent_id)?;
            let slot = parent.children.iter().position(|&c| c == Some(current))?;
            directions.push(Direction::from_index(slot)?);
            current = parent_id;
        }
        directions.reverse();
        Some(directions)
    }
}
