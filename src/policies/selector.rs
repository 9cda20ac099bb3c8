//! Mapping from difficulty labels to move-selection strategies

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{HeuristicPolicy, OptimalPolicy, RandomPolicy};
use crate::{
    Error, Result,
    tictactoe::{Board, Coordinate},
};

/// Who picks the moves for a seat.
///
/// Adding a tier means adding a variant here, a label in [`PolicyKind::label`]
/// and a matching arm in [`Policy::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Moves typed at the console
    Human,
    /// `easy`
    Random,
    /// `medium`
    Heuristic,
    /// `hard`
    Optimal,
}

impl PolicyKind {
    pub const LABELS: [&'static str; 4] = ["user", "easy", "medium", "hard"];

    /// Lenient mapping: anything that is not a known label plays randomly
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(PolicyKind::Random)
    }

    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Human => "user",
            PolicyKind::Random => "easy",
            PolicyKind::Heuristic => "medium",
            PolicyKind::Optimal => "hard",
        }
    }

    pub fn is_human(self) -> bool {
        self == PolicyKind::Human
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(PolicyKind::Human),
            "easy" => Ok(PolicyKind::Random),
            "medium" => Ok(PolicyKind::Heuristic),
            "hard" => Ok(PolicyKind::Optimal),
            other => Err(Error::UnknownPolicy {
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computer opponent
#[derive(Debug, Clone)]
pub enum Policy {
    Random(RandomPolicy),
    Heuristic(HeuristicPolicy),
    Optimal(OptimalPolicy),
}

impl Policy {
    /// Build the strategy for `kind`, or `None` for a human seat.
    ///
    /// With a seed the random parts of the strategy are reproducible.
    pub fn new(kind: PolicyKind, seed: Option<u64>) -> Option<Self> {
        let random = || seed.map_or_else(RandomPolicy::new, RandomPolicy::with_seed);
        match kind {
            PolicyKind::Human => None,
            PolicyKind::Random => Some(Policy::Random(random())),
            PolicyKind::Heuristic => {
                Some(Policy::Heuristic(HeuristicPolicy::from_fallback(random())))
            }
            PolicyKind::Optimal => Some(Policy::Optimal(OptimalPolicy::new())),
        }
    }

    /// Build the strategy for a difficulty label, defaulting to random play
    pub fn from_label(label: &str, seed: Option<u64>) -> Option<Self> {
        Self::new(PolicyKind::from_label(label), seed)
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Random(_) => PolicyKind::Random,
            Policy::Heuristic(_) => PolicyKind::Heuristic,
            Policy::Optimal(_) => PolicyKind::Optimal,
        }
    }

    pub fn set_seed(&mut self, seed: u64) {
        match self {
            Policy::Random(policy) => policy.set_seed(seed),
            Policy::Heuristic(policy) => policy.set_seed(seed),
            Policy::Optimal(_) => {}
        }
    }

    /// Pick an empty cell for the side to move
    pub fn select_move(&mut self, board: &Board) -> Result<Coordinate> {
        match self {
            Policy::Random(policy) => policy.select_move(board),
            Policy::Heuristic(policy) => policy.select_move(board),
            Policy::Optimal(policy) => policy.select_move(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_kind() {
        for label in PolicyKind::LABELS {
            let kind: PolicyKind = label.parse().unwrap();
            assert_eq!(kind.label(), label);
        }
    }

    #[test]
    fn test_unknown_label_defaults_to_random() {
        assert_eq!(PolicyKind::from_label("impossible"), PolicyKind::Random);
        assert!("impossible".parse::<PolicyKind>().is_err());
        let policy = Policy::from_label("impossible", Some(1)).unwrap();
        assert_eq!(policy.kind(), PolicyKind::Random);
    }

    #[test]
    fn test_human_has_no_policy() {
        assert!(Policy::new(PolicyKind::Human, None).is_none());
        assert!(PolicyKind::Human.is_human());
    }

    #[test]
    fn test_each_tier_builds() {
        assert_eq!(
            Policy::new(PolicyKind::Heuristic, Some(2)).unwrap().kind(),
            PolicyKind::Heuristic
        );
        assert_eq!(
            Policy::new(PolicyKind::Optimal, None).unwrap().kind(),
            PolicyKind::Optimal
        );
    }
}
