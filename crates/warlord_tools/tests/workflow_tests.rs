//! End-to-end tool workflows over files on disk.

use warlord_core::error::WarlordError;
use warlord_core::prelude::*;
use warlord_tools::commands;
use warlord_tools::io::{load_config, load_snapshot, render, OutputFormat};
use warlord_tools::validate::validate_snapshot_file;
use warlord_test_utils::fixtures::{crowded_world, kid, skirmish};

#[test]
fn test_snapshot_to_plan_via_files() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("world.ron");
    let config = dir.path().join("ai.ron");
    std::fs::write(&snapshot, render(&crowded_world(3, 5), OutputFormat::Ron).unwrap()).unwrap();
    std::fs::write(&config, "(conquer_limit: 1, reconquer_limit: 0)").unwrap();

    validate_snapshot_file(&snapshot).unwrap();
    let world = load_snapshot(&snapshot).unwrap();
    let engine = DecisionEngine::new(load_config(Some(&config)).unwrap());

    let plan = commands::plan(&world, &engine, true);
    assert_eq!(plan.turns().len(), 3);
    for turn in plan.turns() {
        let combat = turn.orders.iter().filter(|o| o.is_combat()).count();
        // capture (up to 3) plus one conquest plus defence (up to 3)
        assert!(combat <= 7, "{} issued {combat} combat orders", turn.kingdom);
        assert!(turn.orders.iter().all(|o| o.priority != 3));
    }
}

#[test]
fn test_decide_renders_camel_case_json() {
    let orders = commands::decide(&skirmish(), &kid("f"), &DecisionEngine::default()).unwrap();
    let json = render(&orders, OutputFormat::Json).unwrap();
    assert!(json.contains("\"unitId\": \"a\""));
    assert!(json.contains("\"actionType\": \"defend\""));
    assert!(json.contains("\"targetId\": \"f_keep\""));
}

#[test]
fn test_tampered_record_fails_verification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f.turn");
    commands::record(&skirmish(), &kid("f"), &DecisionEngine::default(), &path).unwrap();

    let mut record = TurnRecord::load(&path).unwrap();
    record.config.capture_limit = 0;
    record.save(&path).unwrap();

    let err = commands::verify(&path).unwrap_err();
    assert!(matches!(err, WarlordError::RecordDiverged { .. }));
}

#[test]
fn test_missing_snapshot_is_io_error() {
    let err = load_snapshot(std::path::Path::new("/no/such/world.ron")).unwrap_err();
    assert!(matches!(err, WarlordError::Io { .. }));
}
