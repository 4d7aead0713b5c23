//! CLI integration tests
//!
//! `CARGO_BIN_EXE_tiri`로 빌드된 바이너리를 직접 실행한다.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

fn tiri() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tiri"))
}

const EVENTS: &str = r#"# allenamento del martedì
{"type": "SetDate", "date": "2024-01-10"}
{"type": "SelectPlayers", "players": ["A", "B"]}
{"type": "CanvasClick", "x": 300, "y": 350}
{"type": "Submit", "player": "A", "2pt": 3, "3pt": 1}
{"type": "Submit", "player": "A", "2pt": 1}

{"type": "PickZone", "zone": "Angolo destro"}
{"type": "Submit", "player": "B", "3pt": 2, "pat": 1, "attempts": 5}
"#;

#[test]
fn test_cli_help() {
    tiri().arg("--help").assert().success().stdout(contains("replay"));
}

#[test]
fn test_zones_lists_all_seven() {
    tiri()
        .arg("zones")
        .assert()
        .success()
        .stdout(contains("Angolo sinistro").and(contains("7. Angolo destro")));
}

#[test]
fn test_hit() {
    tiri().args(["hit", "300", "350"]).assert().success().stdout(contains("Centro (4)"));
    tiri()
        .args(["hit", "300", "50"])
        .assert()
        .success()
        .stdout(contains("al di fuori delle zone"));
}

#[test]
fn test_replay_accumulates_and_writes_report() {
    let dir = tempdir().unwrap();
    let events = dir.path().join("events.jsonl");
    fs::write(&events, EVENTS).unwrap();
    let out = dir.path().join("out");

    tiri()
        .args(["replay", "--events"])
        .arg(&events)
        .arg("--report-dir")
        .arg(&out)
        .arg("--keep-images")
        .assert()
        .success()
        .stdout(
            contains("- Centro → 2PT: 4 | 3PT: 1 | PAT: 0")
                .and(contains("- Angolo destro → 2PT: 0 | 3PT: 2 | PAT: 1 | Tentativi: 5"))
                .and(contains("Pagine:   3")),
        );

    let pdf = fs::read(out.join("sessione_tiri_report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    // font_path 없이 --keep-images: 라벨이 들어간 한 장짜리 PDF
    for player in ["A", "B"] {
        let diagram = fs::read(out.join(format!("2024-01-10_{}.pdf", player))).unwrap();
        assert!(diagram.starts_with(b"%PDF"));
    }
    assert!(!out.join("2024-01-10_A.png").exists());
}

#[test]
fn test_replay_without_data_skips_report() {
    let dir = tempdir().unwrap();
    let events = dir.path().join("events.jsonl");
    fs::write(&events, "{\"type\": \"CanvasClick\", \"x\": 5, \"y\": 5}\n").unwrap();

    tiri()
        .args(["replay", "--date", "2024-01-10", "--events"])
        .arg(&events)
        .arg("--report-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Nessun dato ancora per questa sessione.").and(contains("nessun report generato")));
    assert!(!dir.path().join("sessione_tiri_report.pdf").exists());
}

#[test]
fn test_replay_rejects_malformed_event() {
    let dir = tempdir().unwrap();
    let events = dir.path().join("events.jsonl");
    fs::write(&events, "{\"type\": \"Submit\", \"player\": \"A\", \"2pt\": -3}\n").unwrap();

    tiri().args(["replay", "--events"]).arg(&events).assert().failure().stderr(contains("line 1"));
}

#[test]
fn test_court_pdf_without_font() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("campo.pdf");
    tiri().args(["court", "--out"]).arg(&out).assert().success().stdout(contains("Campo salvato"));
    assert!(fs::read(&out).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_court_png_without_font_is_refused() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("campo.png");
    tiri()
        .args(["court", "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("font_path").and(contains("campo.pdf")));
    assert!(!out.exists());
}

#[test]
fn test_canvas_requires_court_image() {
    let dir = tempdir().unwrap();
    tiri()
        .args(["canvas", "--out"])
        .arg(dir.path().join("canvas.png"))
        .assert()
        .failure()
        .stderr(contains("court_image"));
}

#[test]
fn test_session_from_stdin_with_config_roster() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("tiri.yaml");
    fs::write(&config, "roster: [Rossi, Bianchi]\noutput_dir: report\n").unwrap();

    tiri()
        .arg("--config")
        .arg(&config)
        .args(["session", "--date", "2024-03-01"])
        .write_stdin("players Rossi,A\nzone 2\nshots Rossi 2 0 1\nshow\nreport\nquit\n")
        .assert()
        .success()
        .stdout(
            contains("Giocatori non presenti nel roster: A")
                .and(contains("- Ala sinistra → 2PT: 2 | 3PT: 0 | PAT: 1"))
                .and(contains("Report salvato")),
        );
    assert!(dir.path().join("report").join("sessione_tiri_report.pdf").exists());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("tiri.yaml");
    fs::write(&config, "render_scale: 100\n").unwrap();
    tiri().arg("--config").arg(&config).arg("zones").assert().failure();
}
