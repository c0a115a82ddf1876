//! Game engine integration tests.
//!
//! These drive whole games through `tap`/`advance` and check the events,
//! score and board the presenter would observe.

use std::time::Duration;

use rust_onet::board::Board;
use rust_onet::core::{GameConfig, Point};
use rust_onet::game::{GameEngine, GameEvent};
use rust_onet::outcome::GameStatus;
use rust_onet::path::PathFinder;

fn engine(text: &str) -> GameEngine {
    GameEngine::with_board(Board::parse(text).unwrap(), GameConfig::default())
}

fn p(row: usize, col: usize) -> Point {
    Point::new(row, col)
}

fn settle() -> Duration {
    GameConfig::default().timing.settle_delay()
}

/// Find any connectable pair on the board, scanning row-major.
fn any_move(board: &Board) -> Option<(Point, Point)> {
    let mut finder = PathFinder::new();
    let tiles: Vec<Point> = board.points().filter(|&q| !board.is_empty_at(q)).collect();
    for (i, &a) in tiles.iter().enumerate() {
        for &b in &tiles[i + 1..] {
            if finder.find(board, a, b).is_some() {
                return Some((a, b));
            }
        }
    }
    None
}

// =============================================================================
// Documented scenarios
// =============================================================================

/// 2×2 of one icon: two straight matches clear the board for 10 + 10 + 50.
#[test]
fn test_two_by_two_single_icon_wins_with_70() {
    let mut engine = engine("0 0\n0 0");

    assert_eq!(engine.tap(0, 0).unwrap(), vec![GameEvent::Selected(p(0, 0))]);
    let events = engine.tap(0, 1).unwrap();
    assert!(matches!(events[0], GameEvent::Matched { .. }));
    assert_eq!(engine.board().to_string(), ". .\n0 0\n");
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.status(), GameStatus::InProgress);

    engine.tap(1, 0).unwrap();
    let events = engine.tap(1, 1).unwrap();
    // The score label is final by the time the win is announced.
    assert_eq!(events[1..3], [GameEvent::ScoreChanged(20), GameEvent::ScoreChanged(70)]);
    assert_eq!(events.last(), Some(&GameEvent::Won { score: 70, elapsed: Duration::ZERO }));
    assert!(engine.board().is_complete());
    assert_eq!(engine.score(), 70);
    assert_eq!(engine.status(), GameStatus::Won);
}

/// 1×2 with different icons: mismatch costs one point and leaves the board alone.
#[test]
fn test_adjacent_different_icons_mismatch() {
    let mut engine = engine("0 1");
    let before = engine.board().clone();

    engine.tap(0, 0).unwrap();
    let events = engine.tap(0, 1).unwrap();

    assert_eq!(
        events,
        vec![GameEvent::Mismatched(p(0, 0), p(0, 1)), GameEvent::ScoreChanged(-1)]
    );
    assert_eq!(engine.score(), -1);
    assert_eq!(engine.board(), &before);
}

/// 2×3 with the only route walled off: blocked, one point lost.
#[test]
fn test_walled_pair_is_blocked() {
    let mut engine = engine("0 1 0\n1 1 1");
    let before = engine.board().clone();

    engine.tap(0, 0).unwrap();
    let events = engine.tap(0, 2).unwrap();

    assert_eq!(
        events,
        vec![GameEvent::Blocked(p(0, 0), p(0, 2)), GameEvent::ScoreChanged(-1)]
    );
    assert_eq!(engine.board(), &before);
}

// =============================================================================
// Selection flow
// =============================================================================

#[test]
fn test_reclick_cancels_without_penalty() {
    let mut engine = engine("0 0");
    engine.tap(0, 1).unwrap();
    assert_eq!(engine.tap(0, 1).unwrap(), vec![GameEvent::Cancelled(p(0, 1))]);
    assert!(engine.selection().is_empty());
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_empty_taps_never_change_state() {
    let mut engine = engine("0 . 0");
    assert!(engine.tap(0, 1).unwrap().is_empty());

    engine.tap(0, 0).unwrap();
    assert!(engine.tap(0, 1).unwrap().is_empty());
    assert_eq!(engine.selection().as_slice(), &[p(0, 0)]);
}

#[test]
fn test_settle_delay_releases_failed_pair() {
    let mut engine = engine("0 1\n1 0");
    engine.tap(0, 0).unwrap();
    engine.tap(0, 1).unwrap();
    assert_eq!(engine.selection().as_slice(), &[p(0, 0), p(0, 1)]);

    assert!(engine.advance(settle() - Duration::from_millis(1)).is_empty());
    assert!(engine.has_pending());

    let events = engine.advance(Duration::from_millis(1));
    assert_eq!(events, vec![GameEvent::SelectionReset(p(0, 0), p(0, 1))]);
    assert!(engine.selection().is_empty());
    assert!(!engine.has_pending());

    // Nothing else fires later.
    assert!(engine.advance(Duration::from_secs(10)).is_empty());
}

#[test]
fn test_tap_during_settle_starts_fresh_selection() {
    let mut engine = engine("0 1\n. 1");
    engine.tap(0, 0).unwrap();
    engine.tap(0, 1).unwrap();

    let events = engine.tap(1, 1).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::SelectionReset(p(0, 0), p(0, 1)), GameEvent::Selected(p(1, 1))]
    );

    // The superseded reset must not clear the new pick.
    assert!(engine.advance(settle() * 2).is_empty());
    assert_eq!(engine.selection().as_slice(), &[p(1, 1)]);

    let events = engine.tap(0, 1).unwrap();
    assert!(matches!(events[0], GameEvent::Matched { .. }));
    assert_eq!(engine.score(), -1 + 10);
}

#[test]
fn test_each_failure_costs_exactly_one_point() {
    let mut engine = engine("0 1 0\n1 1 1");
    for round in 1..=3 {
        engine.tap(0, 0).unwrap();
        engine.tap(0, 2).unwrap();
        engine.advance(settle());
        assert_eq!(engine.score(), -round);
    }
}

// =============================================================================
// Matching and winning
// =============================================================================

#[test]
fn test_match_clears_both_cells_and_reports_path() {
    let mut engine = engine(
        "
        0 1 0
        . . .
        ",
    );
    engine.tap(0, 0).unwrap();
    let events = engine.tap(0, 2).unwrap();

    match &events[0] {
        GameEvent::Matched { first, second, path } => {
            assert_eq!((*first, *second), (p(0, 0), p(0, 2)));
            assert_eq!(path.points(), &[p(0, 0), p(1, 0), p(1, 2), p(0, 2)]);
            assert_eq!(path.turns(), 2);
        }
        other => panic!("expected a match, got {:?}", other),
    }
    assert_eq!(events[1], GameEvent::ScoreChanged(10));
    assert!(engine.board().is_empty_at(p(0, 0)));
    assert!(engine.board().is_empty_at(p(0, 2)));
}

#[test]
fn test_taps_after_win_are_ignored() {
    let mut engine = engine("3 3");
    engine.tap(0, 0).unwrap();
    engine.tap(0, 1).unwrap();
    assert_eq!(engine.status(), GameStatus::Won);

    assert!(engine.tap(0, 0).unwrap().is_empty());
    assert!(engine.advance(Duration::from_secs(1)).is_empty());
    assert_eq!(engine.score(), 60);
}

#[test]
fn test_won_fires_once_on_last_pair() {
    let mut engine = engine("0 0 1 1");
    let mut won = 0;

    for (a, b) in [((0, 0), (0, 1)), ((0, 2), (0, 3))] {
        engine.tap(a.0, a.1).unwrap();
        let events = engine.tap(b.0, b.1).unwrap();
        won += events.iter().filter(|e| matches!(e, GameEvent::Won { .. })).count();
        if engine.board().remaining() > 0 {
            assert_eq!(won, 0);
        }
    }
    assert_eq!(won, 1);
}

#[test]
fn test_won_reports_play_time() {
    let mut engine = engine("0 0");
    engine.advance(Duration::from_secs(12));
    engine.tap(0, 0).unwrap();
    let events = engine.tap(0, 1).unwrap();
    assert!(events.contains(&GameEvent::Won {
        score: 60,
        elapsed: Duration::from_secs(12),
    }));
}

// =============================================================================
// Generated games
// =============================================================================

/// Play seeded games greedily; score and board bookkeeping stay consistent.
#[test]
fn test_greedy_playthrough_keeps_bookkeeping_consistent() {
    for seed in 0..20 {
        let config = GameConfig::new(6, 6, 6).with_seed(seed);
        let mut engine = GameEngine::new(config).unwrap();
        let mut matches = 0i64;
        let mut wins = 0;

        while let Some((a, b)) = any_move(engine.board()) {
            engine.tap(a.row, a.col).unwrap();
            let events = engine.tap(b.row, b.col).unwrap();
            assert!(matches!(events[0], GameEvent::Matched { .. }));
            wins += events.iter().filter(|e| matches!(e, GameEvent::Won { .. })).count();
            matches += 1;

            for (_, count) in engine.board().icon_counts() {
                assert_eq!(count % 2, 0);
            }
        }

        assert_eq!(engine.board().remaining() as i64, 36 - 2 * matches);
        if engine.board().is_complete() {
            assert_eq!(wins, 1);
            assert_eq!(engine.status(), GameStatus::Won);
            assert_eq!(engine.score(), 10 * matches + 50);
        } else {
            assert_eq!(wins, 0);
            assert_eq!(engine.status(), GameStatus::InProgress);
            assert_eq!(engine.score(), 10 * matches);
        }
    }
}

#[test]
fn test_out_of_range_tap_is_an_error() {
    let mut engine = GameEngine::new(GameConfig::new(2, 2, 1).with_seed(1)).unwrap();
    assert!(engine.tap(2, 0).is_err());
    assert!(engine.tap(0, 2).is_err());
    assert!(engine.selection().is_empty());
}
