use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn pixdex(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pixdex").unwrap();
    cmd.env("PIXDEX_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn add_list_fav_delete_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    pixdex(temp_dir.path())
        .args([
            "add",
            "--url",
            "https://cdn.example/cat.png",
            "--kind",
            "generated",
            "a",
            "cat",
            "in",
            "the",
            "rain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added generated image"));

    pixdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a cat in the rain"))
        .stdout(predicate::str::contains("[generated]"));

    // Search is matched against the prompt; a miss lists nothing.
    pixdex(temp_dir.path())
        .args(["list", "--search", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No images found."));

    pixdex(temp_dir.path())
        .args(["fav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("favorited"));

    // The favorite now also appears in the f-block.
    pixdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("f1."));

    pixdex(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image deleted"));

    pixdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No images found."));
}

#[test]
fn unknown_kind_is_rejected_at_the_boundary() {
    let temp_dir = tempfile::tempdir().unwrap();

    pixdex(temp_dir.path())
        .args([
            "add",
            "--url",
            "https://cdn.example/x.png",
            "--kind",
            "colorized",
            "a",
            "prompt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown image kind"));
}

#[test]
fn init_creates_config_and_empty_collection() {
    let temp_dir = tempfile::tempdir().unwrap();

    pixdex(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty gallery"));

    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("images.json").exists());

    pixdex(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn config_set_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();

    pixdex(temp_dir.path())
        .args(["config", "default-sort", "favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-sort = favorites"));

    pixdex(temp_dir.path())
        .args(["config", "default-sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-sort = favorites"));

    pixdex(temp_dir.path())
        .args(["config", "default-sort", "sideways"])
        .assert()
        .failure();
}

#[test]
fn corrupt_collection_degrades_and_doctor_reports_it() {
    let temp_dir = tempfile::tempdir().unwrap();

    // One good record and one with an unknown kind, hand-written into the
    // store file the way a newer client might have left it.
    let blob = r#"[
        {"id":"keep","url":"https://cdn.example/keep.png","prompt":"a harbor",
         "kind":"generated","created_at":"2026-08-01T12:00:00Z","is_favorite":false},
        {"id":"drop","url":"https://cdn.example/drop.png","prompt":"a pier",
         "kind":"colorized","created_at":"2026-08-01T12:00:00Z","is_favorite":false}
    ]"#;
    std::fs::create_dir_all(temp_dir.path()).unwrap();
    std::fs::write(temp_dir.path().join("images.json"), blob).unwrap();

    pixdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a harbor"))
        .stdout(predicate::str::contains("Skipped 1 invalid stored record"));

    pixdex(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped 1 invalid record(s)"));

    // After compaction the load warning is gone.
    pixdex(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped").not());
}

#[test]
fn export_writes_an_archive() {
    let temp_dir = tempfile::tempdir().unwrap();

    pixdex(temp_dir.path())
        .args([
            "add",
            "--url",
            "https://cdn.example/fox.png",
            "--filename",
            "fox.png",
            "a",
            "fox",
        ])
        .assert()
        .success();

    let out = temp_dir.path().join("backup.tar.gz");
    pixdex(temp_dir.path())
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 image(s)"));
    assert!(out.exists());
}
