//! CLI integration tests for `spritegen generate`, `list` and `show`.
//!
//! Every test runs the built binary inside its own temporary directory so
//! config discovery and the default output directory stay isolated.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary in `dir` with the given arguments.
fn spritegen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spritegen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to execute spritegen")
}

fn dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).expect("failed to open output image");
    (img.width(), img.height())
}

#[test]
fn test_generate_all_writes_every_sheet() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["generate", "--quiet"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));

    let out = temp.path().join("sprites");
    for name in ["assassin", "plaguedoctor", "spaceman", "wizard", "wraith"] {
        assert_eq!(dimensions(&out.join(format!("{}.png", name))), (256, 256), "{}", name);
    }
    assert_eq!(dimensions(&out.join("tiles.png")), (800, 224));
    assert_eq!(dimensions(&out.join("transition_masks.png")), (320, 112));
    assert!(!out.join("wizard.json").exists());
}

#[test]
fn test_generate_selected_targets_with_scale_and_metadata() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["generate", "wizard", "masks", "-o", "art", "--scale", "2", "--metadata", "-q"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));

    let out = temp.path().join("art");
    assert_eq!(dimensions(&out.join("wizard.png")), (512, 512));
    assert_eq!(dimensions(&out.join("transition_masks.png")), (640, 224));
    assert!(!out.join("tiles.png").exists());

    let meta: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(out.join("wizard.json")).unwrap()).unwrap();
    assert_eq!(meta["size"], serde_json::json!([512, 512]));
    assert_eq!(meta["frames"]["left_1"]["y"], 256);
    assert_eq!(meta["animations"]["walk_down"]["frames"].as_array().unwrap().len(), 4);
}

#[test]
fn test_unknown_target_exits_2() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["generate", "dragon"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: unknown target 'dragon'"), "{}", stderr);
    assert!(!temp.path().join("sprites").exists());
}

#[test]
fn test_invalid_scale_exits_2() {
    let temp = TempDir::new().unwrap();
    assert_eq!(spritegen(temp.path(), &["generate", "--scale", "0"]).status.code(), Some(2));
    assert_eq!(spritegen(temp.path(), &["generate", "--scale", "99"]).status.code(), Some(2));
}

#[test]
fn test_invalid_config_exits_2() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("spritegen.toml"), "[characters.wizard]\nhat = \"wizard\"\n").unwrap();
    let output = spritegen(temp.path(), &["list"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("characters.wizard"));
}

#[test]
fn test_config_adds_template_character() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("spritegen.toml"),
        "[project]\nout = \"gen\"\n\n[characters.knight]\nhat = \"helm\"\ncape = true\n[characters.knight.palette]\nbody = \"#4060a0\"\n",
    )
    .unwrap();

    let output = spritegen(temp.path(), &["generate", "knight", "--quiet"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    let knight = image::open(temp.path().join("gen/knight.png")).unwrap().to_rgba8();
    assert_eq!(knight.dimensions(), (256, 256));
    assert!(knight.pixels().any(|p| p.0 == [0x40, 0x60, 0xa0, 255]));
}

#[test]
fn test_list_names_every_target() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["list"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 14);
    assert!(stdout.contains("character:wizard"));
    assert!(stdout.contains("tiles:tiles"));
    assert!(stdout.contains("transition_masks.png"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["list", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let targets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let targets = targets.as_array().unwrap();
    assert_eq!(targets.len(), 14);
    assert_eq!(targets[0]["id"], "character:assassin");
    assert_eq!(targets[13]["kind"], "masks");
}

#[test]
fn test_generate_json_progress() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["generate", "tiles", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let events: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.first().unwrap()["event"], "build_started");
    assert!(events.iter().any(|e| e["event"] == "target_completed" && e["target_id"] == "tiles:tiles"));
    assert_eq!(events.last().unwrap()["success"], true);
}

#[test]
fn test_show_writes_single_frame() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["show", "raptor", "--direction", "left", "--frame", "3", "--scale", "3"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(dimensions(&temp.path().join("raptor_left_3.png")), (192, 192));

    let output = spritegen(temp.path(), &["show", "wizard", "-o", "preview/w.png"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(dimensions(&temp.path().join("preview/w.png")), (64, 64));
}

#[test]
fn test_show_unknown_character_exits_2() {
    let temp = TempDir::new().unwrap();
    let output = spritegen(temp.path(), &["show", "dragon"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown character 'dragon'"));
}
