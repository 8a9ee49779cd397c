use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use adversary::board::{Game, GameStatus};
use adversary::engine::{Engine, GameSummary};
use adversary::types::{EngineConfig, Scoring, DEFAULT_DEPTH};

#[derive(Parser)]
#[command(name = "adversary")]
#[command(about = "Fixed-depth minimax chess adversary", long_about = None)]
struct Args {
    /// Position to start from (defaults to the standard start position)
    #[arg(short, long)]
    fen: Option<String>,

    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Seed for move-order shuffling; omit for a fresh seed each run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of AI moves to play (both sides)
    #[arg(short, long, default_value_t = 1)]
    plies: usize,

    /// Search full width without alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,

    /// Plain minimax scoring instead of child-reply scoring
    #[arg(long)]
    conventional: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("loading position {fen:?}"))?,
        None => Game::default(),
    };

    let config = EngineConfig {
        depth: args.depth,
        seed: args.seed,
        pruning: !args.no_pruning,
        scoring: if args.conventional { Scoring::Conventional } else { Scoring::ChildReply },
    };
    let mut engine = Engine::new(config);

    let summary = match engine.play(&mut game, args.plies) {
        Ok(summary) => summary,
        Err(e) => {
            print_turns(&e.summary);
            return Err(e).context("AI could not produce a valid move");
        }
    };

    print_turns(&summary);
    match summary.status {
        GameStatus::Checkmate => println!("checkmate"),
        GameStatus::Draw => println!("draw"),
        GameStatus::Ongoing => {}
    }

    Ok(())
}

fn print_turns(summary: &GameSummary) {
    for turn in &summary.turns {
        println!("{} eval {} nodes {}", turn.uci, turn.evaluation, turn.nodes);
    }
}
