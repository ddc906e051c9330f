//! Tests for the CLI command handlers against the fixture snapshot.

use lostfound_matcher::cli::{run_match, run_match_all};
use lostfound_matcher::config::{load_config_file, AppConfig};
use lostfound_matcher::pipeline::exit_codes;
use lostfound_matcher::{ItemId, ItemKind, ReportFormat};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/items.json";

fn config_with_output(format: ReportFormat, out: &Path) -> AppConfig {
    AppConfig::builder()
        .output_format(format)
        .output_file(Some(out.to_path_buf()))
        .quiet(true)
        .build()
}

#[test]
fn test_match_writes_json_report() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("matches.json");

    let code = run_match(
        Path::new(FIXTURE),
        ItemKind::Lost,
        ItemId(2),
        &config_with_output(ReportFormat::Json, &out),
    )
    .unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let report = &value["reports"][0];
    assert_eq!(report["query_id"], 2);
    assert_eq!(report["query_kind"], "lost");
    assert_eq!(report["matches"][0]["candidate_id"], 11);
    assert_eq!(report["matches"][0]["rank"], 1);
    assert!(report["matches"][0]["explanation"]["reasons"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("exact category match")));
}

#[test]
fn test_match_summary_has_no_ansi_in_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("matches.txt");

    run_match(
        Path::new(FIXTURE),
        ItemKind::Lost,
        ItemId(1),
        &config_with_output(ReportFormat::Summary, &out),
    )
    .unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Matches for lost #1 Wallet"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_match_all_table() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("all.txt");

    let code = run_match_all(
        Path::new(FIXTURE),
        ItemKind::Found,
        &config_with_output(ReportFormat::Table, &out),
    )
    .unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.lines().next().unwrap().starts_with("QUERY"));
    assert!(text.contains("#10"));
}

#[test]
fn test_missing_snapshot_is_error() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.json");
    let err = run_match(
        &PathBuf::from("tests/fixtures/does-not-exist.json"),
        ItemKind::Lost,
        ItemId(1),
        &config_with_output(ReportFormat::Json, &out),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.json"));
}

#[test]
fn test_config_file_drives_matching() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".lostfound-matcher.yaml");
    std::fs::write(
        &config_path,
        "matching:\n  preset: strict\n  top_n: 1\noutput:\n  format: json\n",
    )
    .unwrap();

    let out = dir.path().join("out.json");
    let (mut config, loaded_from) = AppConfig::from_file_with_overrides(
        Some(&config_path),
        &AppConfig::builder().output_file(Some(out.clone())).quiet(true).build(),
    );
    assert_eq!(loaded_from, Some(config_path.clone()));
    assert_eq!(config, {
        let mut expected = load_config_file(&config_path).unwrap();
        expected.output.file = Some(out.clone());
        expected.behavior.quiet = true;
        expected
    });

    config.behavior.allow_empty = true;
    run_match(Path::new(FIXTURE), ItemKind::Lost, ItemId(1), &config).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["reports"][0]["config"]["top_n"], 1);
    assert_eq!(value["reports"][0]["config"]["threshold"], 60.0);
    assert!(value["reports"][0]["matches"].as_array().unwrap().len() <= 1);
}
