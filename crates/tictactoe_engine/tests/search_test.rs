//! Tests for minimax move selection.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{Board, Heuristic, Mark, Minimax, NUM_SPACES, SearchError, Turn, pick_move};

fn setup(human: &[usize], computer: &[usize]) -> Board {
    let mut board = Board::new();
    for &i in human {
        board.mark_space(i, Mark::HUMAN).unwrap();
    }
    for &i in computer {
        board.mark_space(i, Mark::COMPUTER).unwrap();
    }
    board
}

fn computer_turn() -> Turn {
    Turn::new(Mark::COMPUTER, Mark::HUMAN).unwrap()
}

fn pick(board: &mut Board, depth: u8, heuristic: Heuristic) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    Minimax::new(depth, heuristic)
        .make_pick(board, computer_turn(), &mut rng)
        .unwrap()
}

#[test]
fn test_blocks_human() {
    // |H|H|2|
    // |3|C|5|
    // |6|7|C|
    for heuristic in [Heuristic::Corrected, Heuristic::Faithful] {
        let mut board = setup(&[0, 1], &[4, 8]);
        assert_eq!(pick(&mut board, 2, heuristic), 2);
    }
    assert_eq!(pick_move(&setup(&[0, 1], &[4, 8]), Mark::COMPUTER, Mark::HUMAN, 2), Ok(2));
}

#[test]
fn test_one_ply_search_on_split_threat() {
    // |H|1|H|
    // |3|C|5|
    // |6|7|8|
    for heuristic in [Heuristic::Corrected, Heuristic::Faithful] {
        let mut board = setup(&[0, 2], &[4]);
        assert_eq!(pick(&mut board, 1, heuristic), 1);
    }
}

#[test]
fn test_one_ply_misses_block_that_two_plies_find() {
    // |H|1|H|
    // |C|4|5|
    // |6|7|8|
    for heuristic in [Heuristic::Corrected, Heuristic::Faithful] {
        let mut board = setup(&[0, 2], &[3]);
        assert_eq!(pick(&mut board, 1, heuristic), 4, "{heuristic}");
        assert_eq!(pick(&mut board, 2, heuristic), 1, "{heuristic}");
    }
}

#[test]
fn test_takes_winning_move() {
    // |H|H|2|
    // |C|C|5|
    // |6|7|8|
    for depth in [1, 2] {
        let mut board = setup(&[0, 1], &[3, 4]);
        assert_eq!(pick(&mut board, depth, Heuristic::Corrected), 5);
    }
}

#[test]
fn test_three_plies_prefer_block_then_win() {
    // A completed line ends the game, so the win at 5 scores 92 at its leaf
    // while blocking at 2 and winning on the next ply reaches 101.
    for heuristic in [Heuristic::Corrected, Heuristic::Faithful] {
        let engine = Minimax::new(3, heuristic);
        let mut board = setup(&[0, 1], &[3, 4]);
        assert_eq!(
            engine.search(&mut board, 3, Mark::COMPUTER, computer_turn()),
            (101, Some(2))
        );
    }
}

#[test]
fn test_heuristics_diverge_after_center_opening() {
    let mut board = setup(&[4], &[]);
    assert_eq!(pick(&mut board, 2, Heuristic::Faithful), 8);
    assert_eq!(pick(&mut board, 2, Heuristic::Corrected), 0);
}

#[test]
fn test_takes_center_after_corner_opening() {
    for depth in [1, 2] {
        let mut board = setup(&[0], &[]);
        assert_eq!(pick(&mut board, depth, Heuristic::Corrected), 4);
    }
}

#[test]
fn test_search_score_and_index() {
    let engine = Minimax::new(2, Heuristic::Corrected);
    let mut board = setup(&[0, 1], &[4, 8]);
    assert_eq!(
        engine.search(&mut board, 2, Mark::COMPUTER, computer_turn()),
        (1, Some(2))
    );
}

#[test]
fn test_leaf_returns_no_move() {
    let engine = Minimax::default();
    let mut board = setup(&[0, 1, 2], &[3, 4]);
    assert_eq!(
        engine.search(&mut board, 2, Mark::COMPUTER, computer_turn()),
        (-91, None)
    );
}

#[test]
fn test_board_restored_after_search() {
    let mut board = setup(&[0, 2], &[3]);
    let before = board.clone();
    for depth in 1..=7 {
        pick(&mut board, depth, Heuristic::Faithful);
        assert_eq!(board, before, "depth {depth}");
    }
}

#[test]
fn test_opening_move_is_random_but_seeded() {
    let engine = Minimax::default();
    let mut board = Board::new();

    let mut first = ChaCha8Rng::seed_from_u64(42);
    let mut second = ChaCha8Rng::seed_from_u64(42);
    let a = engine.make_pick(&mut board, computer_turn(), &mut first).unwrap();
    let b = engine.make_pick(&mut board, computer_turn(), &mut second).unwrap();
    assert_eq!(a, b);
    assert!(a < NUM_SPACES);
    assert_eq!(board, Board::new());
}

#[test]
fn test_opening_covers_every_space() {
    let engine = Minimax::default();
    let mut board = Board::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen = [false; NUM_SPACES];
    for _ in 0..500 {
        let index = engine.make_pick(&mut board, computer_turn(), &mut rng).unwrap();
        seen[index] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_full_board_is_an_error() {
    let board = setup(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
    assert_eq!(
        pick_move(&board, Mark::COMPUTER, Mark::HUMAN, 2),
        Err(SearchError::NoLegalMoves)
    );
}

#[test]
fn test_shared_mark_is_an_error() {
    let board = setup(&[0], &[]);
    assert_eq!(
        pick_move(&board, Mark::COMPUTER, Mark::COMPUTER, 2),
        Err(SearchError::SamePlayer(Mark::COMPUTER))
    );
}
