use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a node in the original source text.
///
/// Offsets are byte offsets, half-open (`start..end`). Nodes the converter
/// could not locate stay [`Position::Unplaced`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Unplaced,
    Placed { start: u32, end: u32 },
}

impl Position {
    /// Builds a placed position, clamping `end` so that `start <= end` holds.
    pub fn new(start: u32, end: u32) -> Self {
        Position::Placed {
            start,
            end: end.max(start),
        }
    }

    /// `Some` only when both offsets are known.
    pub fn from_offsets(start: Option<u32>, end: Option<u32>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Position::new(start, end),
            _ => Position::Unplaced,
        }
    }

    pub fn is_unplaced(self) -> bool {
        matches!(self, Position::Unplaced)
    }

    pub fn start(self) -> Option<u32> {
        match self {
            Position::Placed { start, .. } => Some(start),
            Position::Unplaced => None,
        }
    }

    pub fn end(self) -> Option<u32> {
        match self {
            Position::Placed { end, .. } => Some(end),
            Position::Unplaced => None,
        }
    }

    pub fn len(self) -> u32 {
        match self {
            Position::Placed { start, end } => end - start,
            Position::Unplaced => 0,
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `other` lies within `self`. Unplaced positions never contain
    /// and are never contained.
    pub fn contains(self, other: Position) -> bool {
        match (self, other) {
            (
                Position::Placed { start, end },
                Position::Placed {
                    start: inner_start,
                    end: inner_end,
                },
            ) => start <= inner_start && inner_end <= end,
            _ => false,
        }
    }

    /// Smallest position covering both; an unplaced side is ignored.
    pub fn cover(self, other: Position) -> Position {
        match (self, other) {
            (Position::Placed { start, end }, Position::Placed { start: s2, end: e2 }) => {
                Position::new(start.min(s2), end.max(e2))
            }
            (Position::Unplaced, other) => other,
            (this, Position::Unplaced) => this,
        }
    }

    pub fn with_start(self, start: u32) -> Position {
        match self {
            Position::Placed { end, .. } => Position::new(start, end),
            Position::Unplaced => Position::Unplaced,
        }
    }

    pub fn with_end(self, end: u32) -> Position {
        match self {
            Position::Placed { start, .. } => Position::new(start, end),
            Position::Unplaced => Position::Unplaced,
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Unplaced => f.write_str("Unplaced"),
            Position::Placed { start, end } => write!(f, "{start}..{end}"),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
