//! Properties that hold for every reachable position.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};
use tictactoe_engine::{
    Board, Difficulty, GameOutcome, HeuristicStrategy, Mark, MinimaxStrategy, Strategy, classify,
};

/// Every non-terminal board reachable from the empty board, with the
/// mark to move.
fn reachable_positions() -> Vec<(Board, Mark)> {
    fn walk(board: &mut Board, mover: Mark, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Mark)>) {
        if classify(board).is_terminal() || !seen.insert(board.clone()) {
            return;
        }
        out.push((board.clone(), mover));
        for index in board.empty_cells() {
            let mut next = board.clone();
            next.place(index, mover).unwrap();
            walk(&mut next, mover.opponent(), seen, out);
        }
    }

    let mut out = Vec::new();
    walk(&mut Board::new(), Mark::X, &mut HashSet::new(), &mut out);
    out
}

#[test]
fn test_reachable_position_count() {
    // 5478 legal positions, 958 of them terminal.
    assert_eq!(reachable_positions().len(), 4520);
}

#[test]
fn test_cheap_strategies_return_empty_cells() {
    let mut rng = StdRng::seed_from_u64(99);
    for (board, mover) in reachable_positions() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let index = difficulty
                .strategy()
                .select(&board, mover, &mut rng)
                .expect("Non-terminal board has an empty cell");
            assert!(board.is_empty(index), "{difficulty} chose {index} on\n{}", board.display());
        }
    }
}

#[test]
fn test_heuristic_wins_whenever_it_can() {
    let mut rng = StdRng::seed_from_u64(5);
    for (board, mover) in reachable_positions() {
        if HeuristicStrategy::completing_cell(&board, mover).is_none() {
            continue;
        }
        let index = HeuristicStrategy.select(&board, mover, &mut rng).unwrap();
        let mut after = board.clone();
        after.place(index, mover).unwrap();
        assert_eq!(classify(&after), GameOutcome::Win(mover), "\n{}", board.display());
    }
}

/// Plays `computer` with minimax against every opponent line from `board`.
fn assert_minimax_never_loses(
    board: &Board,
    mover: Mark,
    computer: Mark,
    memo: &mut HashMap<Board, usize>,
) {
    match classify(board) {
        GameOutcome::Win(winner) => {
            assert_eq!(winner, computer, "Minimax lost:\n{}", board.display());
            return;
        }
        GameOutcome::Draw => return,
        GameOutcome::InProgress => {}
    }

    let moves = if mover == computer {
        let index = *memo.entry(board.clone()).or_insert_with(|| {
            let mut work = board.clone();
            let index = MinimaxStrategy
                .best_move_in_place(&mut work, computer)
                .expect("Non-terminal board has an empty cell");
            assert_eq!(&work, board, "Search left the board modified");
            index
        });
        assert!(board.is_empty(index));
        vec![index]
    } else {
        board.empty_cells()
    };

    for index in moves {
        let mut next = board.clone();
        next.place(index, mover).unwrap();
        assert_minimax_never_loses(&next, mover.opponent(), computer, memo);
    }
}

#[test]
fn test_minimax_never_loses_as_o() {
    assert_minimax_never_loses(&Board::new(), Mark::X, Mark::O, &mut HashMap::new());
}

#[test]
fn test_minimax_never_loses_as_x() {
    assert_minimax_never_loses(&Board::new(), Mark::X, Mark::X, &mut HashMap::new());
}

#[test]
fn test_minimax_is_deterministic() {
    let board = Board::from_pattern("X...O...X");
    let mut first = StdRng::seed_from_u64(1);
    let mut second = StdRng::seed_from_u64(2);
    assert_eq!(
        MinimaxStrategy.select(&board, Mark::O, &mut first),
        MinimaxStrategy.select(&board, Mark::O, &mut second)
    );
}
