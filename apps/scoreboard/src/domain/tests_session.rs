use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::session::{ActiveGame, CardGame, GameMode, GameSession};
use crate::domain::test_state_helpers::{A, B, C};
use crate::errors::domain::{ConflictKind, DomainError};

#[test]
fn fresh_session_has_no_active_game() {
    let session = GameSession::default();
    assert_eq!(session.mode(), None);
    assert_eq!(
        session.has_active_game(),
        ActiveGame {
            active: false,
            mode: None
        }
    );
}

#[test]
fn started_game_without_entries_is_not_active() {
    let mut session = GameSession::default();
    session.start_boerenbridge(vec![A, B, C], 0);
    assert_eq!(session.mode(), Some(GameMode::BoerenBridge));
    assert!(!session.has_active_game().active);

    session.record_bid(A, 2);
    assert_eq!(
        session.has_active_game(),
        ActiveGame {
            active: true,
            mode: Some(GameMode::BoerenBridge)
        }
    );
}

#[test]
fn generic_mode_is_active_from_selector_alone() {
    let mut session = GameSession::default();
    session.select_mode(GameMode::Generic).unwrap();
    assert_eq!(
        session.has_active_game(),
        ActiveGame {
            active: true,
            mode: Some(GameMode::Generic)
        }
    );
}

#[test]
fn reset_clears_session_and_mode() {
    let mut session = GameSession::default();
    session.start_schoppenvrouwen(vec![A, B, C], 1);
    session.record_score(B, 100);
    assert!(session.has_active_game().active);

    session.reset();
    assert_eq!(session, GameSession::Uninitialized);
    assert_eq!(session.mode(), None);
    assert!(!session.has_active_game().active);
}

#[test]
fn selecting_same_mode_keeps_game() {
    let mut session = GameSession::default();
    session.start_boerenbridge(vec![A, B], 0);
    session.record_bid(A, 1);
    session.select_mode(GameMode::BoerenBridge).unwrap();
    assert_eq!(session.boerenbridge().unwrap().total_bids(), 1);
}

#[test]
fn switching_away_from_progress_requires_reset() {
    let mut session = GameSession::default();
    session.start_boerenbridge(vec![A, B], 0);
    session.record_bid(A, 1);

    let err = session.select_mode(GameMode::Schoppenvrouwen).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::ActiveGame, _)
    ));
    // untouched
    assert_eq!(session.mode(), Some(GameMode::BoerenBridge));

    session.reset();
    session.select_mode(GameMode::Schoppenvrouwen).unwrap();
    assert_eq!(
        session,
        GameSession::AwaitingSetup(CardGame::Schoppenvrouwen)
    );
}

#[test]
fn switching_from_untouched_game_is_allowed() {
    let mut session = GameSession::default();
    session.start_boerenbridge(vec![A, B], 0);
    session.select_mode(GameMode::Generic).unwrap();
    assert_eq!(session, GameSession::Generic);
}

#[test]
fn generic_blocks_switch_until_reset() {
    let mut session = GameSession::default();
    session.select_mode(GameMode::Generic).unwrap();
    assert!(session.select_mode(GameMode::BoerenBridge).is_err());
}

#[test]
fn starting_overwrites_other_mode() {
    let mut session = GameSession::default();
    session.start_boerenbridge(vec![A, B], 0);
    session.record_bid(A, 3);
    session.start_schoppenvrouwen(vec![A, B, C], 2);
    assert!(session.boerenbridge().is_none());
    assert_eq!(session.schoppenvrouwen().unwrap().dealer(), Some(C));
}

#[test]
fn commands_for_other_shapes_are_noops() {
    let mut session = GameSession::default();
    assert!(!session.record_bid(A, 1));
    assert!(!session.record_score(A, 1));
    assert!(!session.advance_round());
    session.set_bid_for_round(0, A, 1);
    assert_eq!(session, GameSession::Uninitialized);

    session.start_schoppenvrouwen(vec![A, B], 0);
    assert!(!session.record_tricks(A, 2));
    session.set_tricks_for_round(7, A, 2);
    assert!(!session.schoppenvrouwen().unwrap().has_progress());
}

#[test]
fn awaiting_setup_reports_mode_but_no_game() {
    let mut session = GameSession::default();
    session.select_mode(GameMode::BoerenBridge).unwrap();
    assert_eq!(session.mode(), Some(GameMode::BoerenBridge));
    assert!(session.boerenbridge().is_none());
    assert!(!session.has_active_game().active);
    assert!(!session.is_finished());
}

#[test]
fn mode_serializes_as_lowercase_selector() {
    assert_eq!(
        serde_json::to_value(GameMode::BoerenBridge).unwrap(),
        serde_json::json!("boerenbridge")
    );
    let mode: GameMode = serde_json::from_str("\"schoppenvrouwen\"").unwrap();
    assert_eq!(mode, GameMode::Schoppenvrouwen);
    assert_eq!(GameMode::Generic.as_str(), "generic");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

#[test]
fn finishing_a_game_is_logged_once() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut session = GameSession::default();
        session.start_schoppenvrouwen(vec![A, B], 0);
        session.record_score(A, 600);
        session.record_score(B, 0);
        assert!(session.advance_round());
        assert!(!session.is_finished());

        session.record_score(A, 450);
        assert!(session.is_finished());
        // edits after the finish do not log it again
        session.set_score_for_round(0, B, 10);
        assert!(session.is_finished());
    });

    let text = logs.text();
    assert_eq!(text.matches("game finished").count(), 1);
    assert!(text.contains("op=\"record_score\""));
}
