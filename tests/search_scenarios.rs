use adversary::board::{destination, origin, Game, GameStatus, Role, Square};
use adversary::engine::Engine;
use adversary::error::SearchError;
use adversary::evaluation::Evaluator;
use adversary::rules::Rules;
use adversary::search::{search, SearchState};
use adversary::types::{EngineConfig, Scoring};

const ITALIAN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

#[test]
fn opening_move_at_default_depth() {
    let mut game = Game::default();
    let hash = game.hash();
    let mut state = SearchState::seeded(1);

    let result = search(&mut game, &mut state, &Evaluator::default(), 4).unwrap();

    let from = origin(&result.best_move).unwrap();
    let role = game.piece_at(from).map(|p| p.role);
    assert!(matches!(role, Some(Role::Pawn) | Some(Role::Knight)));
    // Full width from the start position is 20 + 400 + 8902 + 197281 nodes.
    assert!(result.nodes < 206_604, "{} nodes", result.nodes);
    assert!(result.cutoffs > 0);
    assert_eq!(game.hash(), hash);
    assert_eq!(game.plies(), 0);
}

#[test]
fn mated_side_has_no_move() {
    let mut game = Game::from_fen(FOOLS_MATE).unwrap();
    for depth in 1..=4 {
        let result = search(&mut game, &mut SearchState::seeded(7), &Evaluator::default(), depth);
        assert!(matches!(result, Err(SearchError::NoMove)), "depth {depth}");
    }
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn stalemated_side_has_no_move() {
    let mut game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let result = search(&mut game, &mut SearchState::seeded(7), &Evaluator::default(), 3);
    assert!(matches!(result, Err(SearchError::NoMove)));
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn middlegame_search_restores_position() {
    for scoring in [Scoring::ChildReply, Scoring::Conventional] {
        let mut game = Game::from_fen(ITALIAN).unwrap();
        let board = game.board().clone();
        let hash = game.hash();
        let legal = game.legal_moves();

        let mut state = SearchState::seeded(31);
        state.scoring = scoring;
        let result = search(&mut game, &mut state, &Evaluator::default(), 3).unwrap();

        assert!(legal.contains(&result.best_move));
        assert_eq!(game.board(), &board);
        assert_eq!(game.hash(), hash);
    }
}

#[test]
fn unpruned_search_visits_every_node() {
    // Depth two from the start: root + 20 + 400.
    let mut game = Game::default();
    let mut state = SearchState::seeded(3);
    state.pruning = false;
    let result = search(&mut game, &mut state, &Evaluator::default(), 2).unwrap();
    assert_eq!(result.nodes, 421);
    assert_eq!(result.cutoffs, 0);
}

#[test]
fn engine_plays_both_sides() {
    let config = EngineConfig {
        depth: 2,
        seed: Some(12),
        ..EngineConfig::default()
    };
    let mut engine = Engine::new(config);
    let mut game = Game::default();

    let summary = engine.play(&mut game, 4).unwrap();

    assert_eq!(summary.turns.len(), 4);
    assert_eq!(game.plies(), 4);
    for pair in summary.turns.windows(2) {
        assert_ne!(pair[0].side, pair[1].side);
    }
}

#[test]
fn engine_refuses_to_move_when_mated() {
    let mut engine = Engine::new(EngineConfig {
        seed: Some(1),
        ..EngineConfig::default()
    });
    let mut game = Game::from_fen(FOOLS_MATE).unwrap();

    assert!(matches!(engine.take_turn(&mut game), Err(SearchError::NoMove)));

    let summary = engine.play(&mut game, 3).unwrap();
    assert!(summary.turns.is_empty());
    assert_eq!(summary.status, GameStatus::Checkmate);
}

#[test]
fn castling_reported_on_king_square() {
    let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castles: Vec<_> = game.legal_moves().into_iter().filter(|m| m.is_castle()).collect();
    let mut targets: Vec<Square> = castles.iter().map(destination).collect();
    targets.sort();
    assert_eq!(targets, vec![Square::C1, Square::G1]);
}
