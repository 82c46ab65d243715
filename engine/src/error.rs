//! Error types shared by the dungeon crates

use crate::node::Direction;
use thiserror::Error;

/// Main error type for dungeon generation and play
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DungeonError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("no playable dungeon after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    #[error("session already over")]
    SessionOver,

    #[error("no passage to the {direction}")]
    NoPassage { direction: Direction },

    #[error("invalid direction symbol '{symbol}' (expected L, M or R)")]
    InvalidDirection { symbol: char },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, DungeonError>;
