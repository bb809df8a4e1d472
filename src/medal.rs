//! End-of-run medals
//!
//! Awarded on the game-over screen from the final score of the run.

use serde::{Deserialize, Serialize};

/// Score needed for each medal tier
pub const BRONZE_SCORE: u32 = 10;
pub const SILVER_SCORE: u32 = 20;
pub const GOLD_SCORE: u32 = 30;

/// Medal tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
}

impl Medal {
    /// Medal earned by a run that ended on `score`, if any
    pub fn for_score(score: u32) -> Option<Self> {
        match score {
            s if s >= GOLD_SCORE => Some(Medal::Gold),
            s if s >= SILVER_SCORE => Some(Medal::Silver),
            s if s >= BRONZE_SCORE => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
        }
    }
}
