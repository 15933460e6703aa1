//! Session integration tests: full games through the public API.

use kalah_solver::core::{Board, Side, SolverConfig};
use kalah_solver::session::{MoveOutcome, Session, SessionState, STATE_BYTES};

fn one_seed_session() -> Session {
    Session::with_start(&SolverConfig::compact(), Board::with_seeds(1))
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_perfect_game_keeps_its_value() {
    let mut session = one_seed_session();
    let mut plies = 0;

    while !session.board().is_game_over() {
        let pit = session.solve().expect("game is still running");
        assert_eq!(session.score(), 2, "value drifted after {plies} plies");
        assert_ne!(session.play(pit), MoveOutcome::Invalid);
        plies += 1;
    }

    assert!(plies > 0);
    assert_eq!(session.board().final_score(), 2);
    assert_eq!(session.board().total_seeds(), 12);
    assert_eq!(session.solve(), None);
}

#[test]
fn test_scripted_game_alternates_turns() {
    let mut session = one_seed_session();
    let mut expected = Side::First;

    for pit in [0, 2, 1, 3, 4, 0, 5, 2, 1, 3, 4, 5] {
        if session.board().is_game_over() {
            break;
        }
        let mover = session.turn();
        assert_eq!(mover, expected);
        match session.play(pit) {
            MoveOutcome::Invalid => assert_eq!(session.turn(), mover),
            MoveOutcome::MoveAgain => assert_eq!(session.turn(), mover),
            MoveOutcome::TurnEnded => {
                assert_eq!(session.turn(), mover.opponent());
                expected = mover.opponent();
            }
        }
        assert_eq!(session.board().total_seeds(), 12);
    }
}

// =============================================================================
// Restart and Snapshot
// =============================================================================

#[test]
fn test_init_keeps_tables_unless_asked() {
    let mut session = one_seed_session();
    session.solve();
    let filled = session.solver().tt().occupied();
    assert!(filled > 0);

    session.play(0);
    session.init(false);
    assert_eq!(session.turn(), Side::First);
    assert_eq!(session.board(), Board::with_seeds(1));
    assert_eq!(session.solver().tt().occupied(), filled);

    // A warm table answers the start position without expanding nodes.
    session.solve();
    assert_eq!(session.solver().nodes_searched(), 0);

    session.init(true);
    assert_eq!(session.solver().tt().occupied(), 0);
}

#[test]
fn test_canonical_session_starts_at_start() {
    let mut session = Session::new(&SolverConfig::compact());
    let state = *session.init(false);
    assert_eq!(state.board, *Board::new().ring());
    assert_eq!(state.turn, 0);
    assert_eq!(state.score, 0);
}

#[test]
fn test_snapshot_round_trip() {
    let mut session = one_seed_session();
    session.play(5);
    session.play(4);
    session.solve();

    let bytes = session.to_bytes().unwrap();
    assert_eq!(bytes.len(), STATE_BYTES);
    assert_eq!(bytes[STATE_BYTES - 2], session.turn().index());
    assert_eq!(bytes[STATE_BYTES - 1] as i8, session.score());

    let restored = SessionState::from_bytes(&bytes).unwrap();
    assert_eq!(restored, *session.state());
}

#[test]
fn test_truncated_snapshot_is_rejected() {
    let session = one_seed_session();
    let bytes = session.to_bytes().unwrap();
    assert!(SessionState::from_bytes(&bytes[..STATE_BYTES - 1]).is_err());
}
