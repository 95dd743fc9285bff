//! End-to-end scenarios driven through the public command surface.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Difficulty, EventLog, Game, GameEvent, GameOutcome, InvalidMove, Mark, MoveError, Session,
    SessionConfig, SessionState,
};

fn two_player_game() -> Game<EventLog> {
    Game::with_seed(EventLog::new(), SessionConfig::new(false, Difficulty::Easy), 0)
}

#[test]
fn test_top_row_win_for_x() {
    let mut game = two_player_game();
    game.observer_mut().drain();

    for index in [0, 3, 1, 4] {
        assert!(matches!(
            game.submit_move(index),
            Ok(SessionState::AwaitingMove(_))
        ));
    }
    let state = game.submit_move(2).expect("Winning move is legal");

    assert_eq!(state, SessionState::Terminal(GameOutcome::Win(Mark::X)));
    let events = game.observer().events();
    assert_eq!(
        &events[events.len() - 2..],
        &[
            GameEvent::MarkPlaced { index: 2, mark: Mark::X },
            GameEvent::GameOver { outcome: GameOutcome::Win(Mark::X) },
        ]
    );
    assert_eq!(game.session().board().cells_matching(Mark::X), vec![0, 1, 2]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = two_player_game();
    for index in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        game.submit_move(index).expect("Valid move");
    }

    assert_eq!(game.session().state(), SessionState::Terminal(GameOutcome::Draw));
    assert_eq!(game.observer().final_outcome(), Some(GameOutcome::Draw));
    assert!(game.session().board().is_full());
}

#[test]
fn test_events_alternate_turns() {
    let mut game = two_player_game();
    game.submit_move(4).unwrap();
    game.submit_move(0).unwrap();

    assert_eq!(
        game.observer().events(),
        &[
            GameEvent::TurnChanged { next: Mark::X },
            GameEvent::MarkPlaced { index: 4, mark: Mark::X },
            GameEvent::TurnChanged { next: Mark::O },
            GameEvent::MarkPlaced { index: 0, mark: Mark::O },
            GameEvent::TurnChanged { next: Mark::X },
        ]
    );
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut game = two_player_game();
    game.submit_move(4).unwrap();
    game.observer_mut().drain();
    let board = game.session().board().clone();

    let result = game.submit_move(4);

    assert_eq!(
        result,
        Err(MoveError::InvalidMove(InvalidMove::Occupied { index: 4 }))
    );
    assert_eq!(game.session().board(), &board);
    assert_eq!(game.session().turn(), Mark::O);
    assert!(game.observer().is_empty());
}

#[test]
fn test_single_player_reply_is_part_of_the_submission() {
    let mut game = Game::with_seed(EventLog::new(), SessionConfig::new(true, Difficulty::Hard), 0);
    game.observer_mut().drain();

    let state = game.submit_move(0).unwrap();

    assert_eq!(state, SessionState::AwaitingMove(Mark::X));
    assert_eq!(
        game.observer().events(),
        &[
            GameEvent::MarkPlaced { index: 0, mark: Mark::X },
            GameEvent::TurnChanged { next: Mark::O },
            GameEvent::MarkPlaced { index: 4, mark: Mark::O },
            GameEvent::TurnChanged { next: Mark::X },
        ]
    );
}

#[test]
fn test_split_submission_for_delayed_reply() {
    let mut game = Game::with_seed(EventLog::new(), SessionConfig::new(true, Difficulty::Medium), 3);

    assert_eq!(game.submit_human_move(4), Ok(SessionState::AwaitingComputerMove));
    assert_eq!(game.submit_human_move(0), Err(MoveError::IllegalTurn));
    assert_eq!(game.play_computer_move(), Ok(SessionState::AwaitingMove(Mark::X)));
    assert_eq!(game.session().board().count(Mark::O), 1);
}

/// Plays every possible human line against Hard after the center opening.
fn assert_hard_never_loses(session: Session, rng: &mut StdRng, games: &mut usize) {
    if session.is_terminal() {
        assert_ne!(
            session.outcome(),
            GameOutcome::Win(Mark::X),
            "Hard lost: {:?}",
            session.history()
        );
        *games += 1;
        return;
    }

    for index in session.board().empty_cells() {
        let mut next = session.clone();
        next.submit_move(index, rng, &mut ())
            .expect("Empty cell is a legal human move");
        assert_hard_never_loses(next, rng, games);
    }
}

#[test]
fn test_hard_never_loses_after_center_opening() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut session = Session::new(SessionConfig::new(true, Difficulty::Hard));
    session
        .submit_move(4, &mut rng, &mut ())
        .expect("Center is open");

    let mut games = 0;
    assert_hard_never_loses(session, &mut rng, &mut games);
    assert!(games > 0);
}
