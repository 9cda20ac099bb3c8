//! Computer opponents
//!
//! Three tiers share the same contract: given a board with the game still
//! running, return an empty cell for the side to move.
//! - [`RandomPolicy`] (easy) picks uniformly
//! - [`HeuristicPolicy`] (medium) wins or blocks when it can, else random
//! - [`OptimalPolicy`] (hard) runs a full minimax search

pub mod heuristic;
pub mod optimal;
pub mod random;
pub mod selector;

pub use heuristic::HeuristicPolicy;
pub use optimal::{DRAW_SCORE, LOSS_SCORE, OptimalPolicy, SearchResult, WIN_SCORE};
pub use random::RandomPolicy;
pub use selector::{Policy, PolicyKind};
