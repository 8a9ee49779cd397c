pub type Score = i32;

pub const SCORE_MIN: Score = Score::MIN;
pub const SCORE_MAX: Score = Score::MAX;
pub const DEFAULT_DEPTH: u8 = 4;

pub const CENTER_BONUS: Score = 250;
pub const RING_BONUS: Score = 100;

/// How a child's result is folded into its parent's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scoring {
    /// Score the move the child chose against the board the child searched.
    #[default]
    ChildReply,
    /// Plain minimax: propagate child scores, evaluate the applied move at the frontier.
    Conventional,
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub depth: u8,
    pub seed: Option<u64>,
    pub pruning: bool,
    pub scoring: Scoring,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            pruning: true,
            scoring: Scoring::ChildReply,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchResult<M> {
    pub best_move: M,
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
    pub cutoffs: u64,
}
