use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;
use tracing::{error, info};

use crate::board::{to_uci, Color, Game, GameStatus, Move};
use crate::error::SearchError;
use crate::evaluation::{Evaluate, Evaluator};
use crate::rules::Rules;
use crate::search::{search, SearchState};
use crate::types::{EngineConfig, Score, SearchResult};

/// One AI move as it was played on the live board.
#[derive(Clone, Debug)]
pub struct Turn {
    pub side: Color,
    pub mv: Move,
    pub uci: String,
    /// Evaluator score of the move, taken on the board it was played from.
    pub evaluation: Score,
    pub nodes: u64,
}

#[derive(Clone, Debug)]
pub struct GameSummary {
    pub turns: Vec<Turn>,
    pub status: GameStatus,
}

/// A turn failed part-way through a game. The moves already played stay on the
/// board and in `summary`.
#[derive(Debug, Error)]
#[error("turn {} failed: {source}", .summary.turns.len() + 1)]
pub struct PlayError {
    pub summary: GameSummary,
    pub source: SearchError,
}

/// The adversary: configuration, search state and evaluator for a sequence of turns.
pub struct Engine<R = StdRng> {
    config: EngineConfig,
    state: SearchState<R>,
    evaluator: Evaluator,
}

impl Engine<StdRng> {
    pub fn new(config: EngineConfig) -> Self {
        let state = SearchState::from_config(&config);
        Self {
            config,
            state,
            evaluator: Evaluator::default(),
        }
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        let state = SearchState::configured(rng, &config);
        Self {
            config,
            state,
            evaluator: Evaluator::default(),
        }
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Searches the live position at the configured depth. The position is
    /// left exactly as it was.
    pub fn choose_move(&mut self, game: &mut Game) -> Result<SearchResult<Move>, SearchError> {
        search(game, &mut self.state, &self.evaluator, self.config.depth)
    }

    /// Chooses and plays one move. Any search failure is fatal for the turn and
    /// nothing is applied.
    pub fn take_turn(&mut self, game: &mut Game) -> Result<Turn, SearchError> {
        let side = game.side_to_move();
        let result = self.choose_move(game).inspect_err(|e| {
            error!(?side, "unable to move: {e}");
        })?;

        let mv = result.best_move;
        let evaluation = self.evaluator.evaluate(game, Some(&mv));
        let uci = to_uci(&mv);
        game.apply_move(&mv);

        info!(
            ?side,
            mv = %uci,
            evaluation,
            nodes = result.nodes,
            cutoffs = result.cutoffs,
            "AI move"
        );

        Ok(Turn {
            side,
            mv,
            uci,
            evaluation,
            nodes: result.nodes,
        })
    }

    /// Plays AI turns until the game ends or `max_turns` moves have been made.
    /// Stops at the first turn that cannot produce a valid move.
    pub fn play(&mut self, game: &mut Game, max_turns: usize) -> Result<GameSummary, PlayError> {
        let mut turns = Vec::new();
        while turns.len() < max_turns && game.status() == GameStatus::Ongoing {
            match self.take_turn(game) {
                Ok(turn) => turns.push(turn),
                Err(source) => {
                    let summary = GameSummary {
                        turns,
                        status: game.status(),
                    };
                    return Err(PlayError { summary, source });
                }
            }
        }

        let status = game.status();
        match status {
            GameStatus::Checkmate => {
                let winner = !game.side_to_move();
                info!(?winner, "checkmate");
            }
            GameStatus::Draw => info!("draw"),
            GameStatus::Ongoing => {}
        }
        Ok(GameSummary { turns, status })
    }
}
