//! Computer opponents: the `Agent` interface, the tiered pattern player used
//! in games, and a uniform random player.

mod agent;
mod heuristic;
mod random;

pub use agent::{Agent, Decision, Tier};
pub use heuristic::HeuristicAgent;
pub use random::{seeded_rng, RandomAgent};
