//! Routes: ordered direction sequences from one room to a descendant

use crate::error::DungeonError;
use crate::node::Direction;
use std::fmt;
use std::str::FromStr;

/// Result of a path search.
///
/// An empty route means no exit is reachable without crossing a known hazard
/// (or that the search started on an exit).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route(Vec<Direction>);

impl Route {
    pub fn new(directions: Vec<Direction>) -> Self {
        Route(directions)
    }

    pub fn directions(&self) -> &[Direction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recommended next move
    pub fn first(&self) -> Option<Direction> {
        self.0.first().copied()
    }

    pub fn into_inner(self) -> Vec<Direction> {
        self.0
    }
}

impl From<Vec<Direction>> for Route {
    fn from(directions: Vec<Direction>) -> Self {
        Route(directions)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.0 {
            write!(f, "{}", direction.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Route {
    type Err = DungeonError;

    /// Parse `L`/`M`/`R` symbols; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| {
                Direction::from_symbol(symbol).ok_or(DungeonError::InvalidDirection { symbol })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Route)
    }
}
