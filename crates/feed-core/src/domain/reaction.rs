use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reaction a viewer can attach to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Love,
    Like,
    Laugh,
    Wow,
    Sad,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::Love,
        ReactionKind::Like,
        ReactionKind::Laugh,
        ReactionKind::Wow,
        ReactionKind::Sad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Love => "love",
            ReactionKind::Like => "like",
            ReactionKind::Laugh => "laugh",
            ReactionKind::Wow => "wow",
            ReactionKind::Sad => "sad",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ReactionKind::Love => "\u{2764}\u{fe0f}",
            ReactionKind::Like => "\u{1f44d}",
            ReactionKind::Laugh => "\u{1f602}",
            ReactionKind::Wow => "\u{1f62e}",
            ReactionKind::Sad => "\u{1f622}",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown reaction: {0}")]
pub struct UnknownReaction(pub String);

impl FromStr for ReactionKind {
    type Err = UnknownReaction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReactionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownReaction(s.to_string()))
    }
}
