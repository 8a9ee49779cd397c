use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::error::SearchError;
use crate::evaluation::Evaluate;
use crate::rules::{Applied, Rules};
use crate::types::{EngineConfig, Score, Scoring, SearchResult, SCORE_MAX, SCORE_MIN};

/// What one node of the search hands back to its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<M> {
    /// Depth exhausted. There is nothing to play; the parent scores its own board.
    Frontier,
    /// Checkmate, draw, or no candidate survived re-validation.
    NoMove,
    Found { best: M, score: Score },
}

impl<M> SearchOutcome<M> {
    pub fn best_move(&self) -> Option<&M> {
        match self {
            SearchOutcome::Found { best, .. } => Some(best),
            _ => None,
        }
    }
}

/// Per-call search state. Nothing here survives into the next turn except the RNG stream.
pub struct SearchState<R = StdRng> {
    pub nodes: u64,
    pub cutoffs: u64,
    pub pruning: bool,
    pub scoring: Scoring,
    rng: R,
}

impl SearchState<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::configured(rng, config)
    }
}

impl<R: Rng> SearchState<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            nodes: 0,
            cutoffs: 0,
            pruning: true,
            scoring: Scoring::default(),
            rng,
        }
    }

    pub fn configured(rng: R, config: &EngineConfig) -> Self {
        Self {
            pruning: config.pruning,
            scoring: config.scoring,
            ..Self::with_rng(rng)
        }
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }
}

/// Top-level search: full window, maximizing, fixed depth. The chosen move is
/// re-validated before it is returned, so callers can apply it directly.
pub fn search<P, E, R>(
    position: &mut P,
    state: &mut SearchState<R>,
    evaluator: &E,
    depth: u8,
) -> Result<SearchResult<P::Move>, SearchError>
where
    P: Rules,
    E: Evaluate<P>,
    R: Rng,
{
    if depth == 0 {
        return Err(SearchError::ZeroDepth);
    }
    state.reset();

    match minimax(position, state, evaluator, depth, SCORE_MIN, SCORE_MAX, true) {
        SearchOutcome::Found { best, score } => {
            if !position.is_move_legal(&best) {
                warn!(mv = ?best, "search result failed re-validation");
                return Err(SearchError::IllegalMove(format!("{best:?}")));
            }
            debug!(
                depth,
                score,
                nodes = state.nodes,
                cutoffs = state.cutoffs,
                mv = ?best,
                "search complete"
            );
            Ok(SearchResult {
                best_move: best,
                score,
                depth,
                nodes: state.nodes,
                cutoffs: state.cutoffs,
            })
        }
        SearchOutcome::NoMove => Err(SearchError::NoMove),
        SearchOutcome::Frontier => Err(SearchError::ZeroDepth),
    }
}

/// Minimax with alpha-beta pruning.
///
/// Depth is checked before terminal detection, so a finished game at depth zero
/// still reports `Frontier`. Moves are shuffled with the state's RNG before the
/// scan; ties keep whichever move came first.
pub fn minimax<P, E, R>(
    position: &mut P,
    state: &mut SearchState<R>,
    evaluator: &E,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> SearchOutcome<P::Move>
where
    P: Rules,
    E: Evaluate<P>,
    R: Rng,
{
    state.nodes += 1;

    if depth == 0 {
        return SearchOutcome::Frontier;
    }
    if position.is_checkmate() || position.is_draw() {
        return SearchOutcome::NoMove;
    }

    let mut moves = position.legal_moves();
    moves.shuffle(&mut state.rng);

    let mut best_move: Option<P::Move> = None;
    let mut best_score = if maximizing { SCORE_MIN } else { SCORE_MAX };

    for mv in moves {
        if !position.is_move_legal(&mv) {
            debug!(?mv, depth, "skipping move that failed re-validation");
            continue;
        }

        let score = score_move(position, state, evaluator, &mv, depth, alpha, beta, maximizing);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if state.pruning && beta <= alpha {
            state.cutoffs += 1;
            trace!(depth, alpha, beta, maximizing, "cutoff");
            break;
        }
    }

    match best_move {
        Some(best) => SearchOutcome::Found { best, score: best_score },
        None => SearchOutcome::NoMove,
    }
}

/// Applies `mv`, searches the reply one ply shallower with roles flipped, and folds
/// the result into a score for `mv`. The move is undone when the guard drops.
#[allow(clippy::too_many_arguments)]
fn score_move<P, E, R>(
    position: &mut P,
    state: &mut SearchState<R>,
    evaluator: &E,
    mv: &P::Move,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> Score
where
    P: Rules,
    E: Evaluate<P>,
    R: Rng,
{
    let mut child = Applied::new(position, mv);
    let reply = minimax(&mut *child, state, evaluator, depth - 1, alpha, beta, !maximizing);

    match (state.scoring, reply) {
        // The reply is judged against the board it was chosen on.
        (Scoring::ChildReply, reply) => evaluator.evaluate(&*child, reply.best_move()),
        (Scoring::Conventional, SearchOutcome::Found { score, .. }) => score,
        (Scoring::Conventional, _) => {
            drop(child);
            evaluator.evaluate(position, Some(mv))
        }
    }
}


// Scores are absolute rather than side-relative, so this is textbook minimax (max and min
// alternate) rather than negamax.

// Child-reply scoring: the score of a move is the evaluation of the *reply* the child picked,
// measured on the board after the move, not the child's own best score. Pruning can therefore
// change which reply a child settles on and with it the root value. Only when a move's score
// equals the position it leads to (as with `NodeValue`) is this plain minimax.
// `Scoring::Conventional` is the textbook fold.
