//! Computer-vs-computer matches and their JSON export.

use tictactoe_ai::{
    Error,
    arena::{Arena, MatchConfig, MatchSummary},
    policies::PolicyKind,
};

#[test]
fn hard_vs_hard_always_draws() {
    let config = MatchConfig {
        games: 3,
        seed: Some(1),
    };
    let summary = Arena::new(PolicyKind::Optimal, PolicyKind::Optimal, config)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(summary.draws, 3);
    assert_eq!(summary.draw_rate, 1.0);
}

#[test]
fn hard_never_loses_a_match() {
    let config = MatchConfig {
        games: 25,
        seed: Some(99),
    };
    let summary = Arena::new(PolicyKind::Random, PolicyKind::Optimal, config)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(summary.x_wins, 0);
}

#[test]
fn summary_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");

    let config = MatchConfig {
        games: 8,
        seed: Some(5),
    };
    let summary = Arena::new(PolicyKind::Heuristic, PolicyKind::Random, config)
        .unwrap()
        .run()
        .unwrap();
    summary.save(&path).unwrap();

    let loaded = MatchSummary::load(&path).unwrap();
    assert_eq!(loaded.x, PolicyKind::Heuristic);
    assert_eq!(loaded.o, PolicyKind::Random);
    assert_eq!(loaded.games, 8);
    assert_eq!(
        (loaded.x_wins, loaded.o_wins, loaded.draws),
        (summary.x_wins, summary.o_wins, summary.draws)
    );
}

#[test]
fn load_missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchSummary::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
