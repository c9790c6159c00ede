use rand::rngs::StdRng;
use tracing::debug;

use crate::game::{scan, Board, Player, RunLength, ScanScope};

use super::agent::{Agent, Decision, Tier};
use super::random::{random_column, seeded_rng};

/// Which side a tier asks the line detector about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Own,
    Opponent,
}

/// The pattern tiers in priority order. Random play is the final fallback.
const TIERS: [(Tier, RunLength, Side); 4] = [
    (Tier::Win, RunLength::Three, Side::Own),
    (Tier::BlockWin, RunLength::Three, Side::Opponent),
    (Tier::Build, RunLength::Two, Side::Own),
    (Tier::BlockBuild, RunLength::Two, Side::Opponent),
];

/// One-ply pattern player: win if possible, otherwise block a win, otherwise
/// build a run of three, otherwise block one, otherwise play at random.
///
/// Within a tier the leftmost matching column is taken.
pub struct HeuristicAgent {
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new(seed: Option<u64>) -> Self {
        HeuristicAgent {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Agent for HeuristicAgent {
    fn select_column(&mut self, board: &Board, own: Player) -> Option<Decision> {
        for (tier, run, side) in TIERS {
            let colour = match side {
                Side::Own => own,
                Side::Opponent => own.other(),
            };
            if let Some(found) = scan(board, run, colour, ScanScope::All) {
                debug!(?tier, column = found.column, pattern = ?found.pattern, "pattern move");
                return Some(Decision {
                    column: found.column,
                    tier,
                });
            }
        }

        let column = random_column(&mut self.rng, board)?;
        debug!(column, "no pattern found, playing at random");
        Some(Decision {
            column,
            tier: Tier::Random,
        })
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
