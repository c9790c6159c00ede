use crate::game::{Board, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::{Agent, Decision, Tier};

/// Build the process-lifetime generator: fixed when a seed is given,
/// OS-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Pick a non-full column uniformly at random.
pub(crate) fn random_column(rng: &mut StdRng, board: &Board) -> Option<usize> {
    let columns = board.legal_columns();
    if columns.is_empty() {
        return None;
    }
    Some(columns[rng.random_range(0..columns.len())])
}

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board, _own: Player) -> Option<Decision> {
        random_column(&mut self.rng, board).map(|column| Decision {
            column,
            tier: Tier::Random,
        })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
