use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DRAWING: &str = r#"[{"strokeOrder":0,"pixels":[{"startX":10,"startY":10,"endX":20,"endY":20}]},{"strokeOrder":1,"pixels":[{"startX":30,"startY":30,"endX":40,"endY":40}]}]"#;

fn scribble_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scribble").expect("binary exists");
    cmd.arg("--config")
        .arg(temp.path().join("config.toml"))
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .arg("--no-delay");
    cmd
}

fn write_drawing(temp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join("drawing_000123.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn scribble_help_prints_usage() {
    Command::cargo_bin("scribble")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand sketch recorder with JSON export and PNG rasterization",
        ));
}

#[test]
fn no_arguments_prints_overview() {
    Command::cargo_bin("scribble")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("scribble --import drawing.json"));
}

#[test]
fn import_and_rasterize_writes_png() {
    let temp = TempDir::new().unwrap();
    let drawing = write_drawing(&temp, DRAWING);

    scribble_cmd(&temp)
        .arg("--import")
        .arg(&drawing)
        .arg("--image")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 strokes"));

    let png = fs::read(temp.path().join("out").join("scribble.png")).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn import_and_export_round_trips_drawing() {
    let temp = TempDir::new().unwrap();
    let drawing = write_drawing(&temp, DRAWING);

    scribble_cmd(&temp)
        .arg("--import")
        .arg(&drawing)
        .args(["--export", "--nickname", "ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported drawing to"));

    let exported: Vec<_> = fs::read_dir(temp.path().join("out"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(exported.len(), 1);

    let name = exported[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("ana_"));
    assert!(name.ends_with(".json"));
    assert_eq!(name.len(), "ana_".len() + 6 + ".json".len());

    let original: serde_json::Value = serde_json::from_str(DRAWING).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&exported[0]).unwrap()).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 2);
    for (a, b) in original
        .as_array()
        .unwrap()
        .iter()
        .zip(written.as_array().unwrap())
    {
        assert_eq!(a["strokeOrder"], b["strokeOrder"]);
        assert_eq!(
            a["pixels"][0]["endX"].as_f64(),
            b["pixels"][0]["endX"].as_f64()
        );
    }
}

#[test]
fn invalid_drawing_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let drawing = write_drawing(&temp, "{ not json");

    scribble_cmd(&temp)
        .arg("--import")
        .arg(&drawing)
        .arg("--image")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid drawing data"));

    assert!(!temp.path().join("out").join("scribble.png").exists());
}
