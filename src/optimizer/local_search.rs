use tracing::debug;

use crate::optimizer::allocation::Allocation;
use crate::optimizer::objective::objective;
use crate::optimizer::problem::Problem;

/// Outcome of a local-search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub allocation: Allocation,
    pub objective: f64,
    pub moves: usize,
    pub capped: bool,
}

/// First-improvement hill climb over single-serving transfers.
///
/// For every ordered pair of distinct recipes where the first has servings, moves
/// one serving to the second. The first feasible candidate with a strictly lower
/// objective replaces the current solution and the pair scan restarts. Stops when
/// a full scan finds nothing better, or after `max_moves` accepted moves.
pub fn improve(problem: &Problem, initial: Allocation, max_moves: Option<usize>) -> SearchOutcome {
    let n = problem.recipe_count();
    let mut current = initial;
    let mut current_score = objective(problem, &current);
    let mut moves = 0usize;

    'scan: loop {
        if max_moves.is_some_and(|cap| moves >= cap) {
            debug!(moves, "local search stopped at move cap");
            return SearchOutcome {
                allocation: current,
                objective: current_score,
                moves,
                capped: true,
            };
        }

        for from in 0..n {
            if current.servings_of(from) == 0 {
                continue;
            }
            for to in 0..n {
                if from == to {
                    continue;
                }
                let Some(candidate) = current.transfer(problem, from, to) else {
                    continue;
                };
                if !candidate.is_feasible(problem) {
                    continue;
                }
                let score = objective(problem, &candidate);
                if score < current_score {
                    debug!(
                        from = %problem.recipes()[from].name,
                        to = %problem.recipes()[to].name,
                        before = current_score,
                        after = score,
                        "accepted transfer"
                    );
                    current = candidate;
                    current_score = score;
                    moves += 1;
                    continue 'scan;
                }
            }
        }

        break;
    }

    SearchOutcome {
        allocation: current,
        objective: current_score,
        moves,
        capped: false,
    }
}
