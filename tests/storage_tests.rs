//! Preset files and the preferences cache.

use std::fs;

use crossgen::model::{Color, FillStyle, ReticleSettings, ResolutionMode, ShapeName};
use crossgen::storage::{Preferences, PresetStore};
use crossgen::Error;

mod common;
use common::scratch_dir;

fn customised() -> ReticleSettings {
    ReticleSettings {
        shape: ShapeName::XShape,
        size: 42,
        thickness: 3,
        gap: 5,
        color: Color::rgb(0x12, 0x34, 0x56),
        outline_enabled: true,
        outline_color: Color::rgb(0xFF, 0xFF, 0xFF),
        outline_thickness: 4,
        opacity: 70,
        outline_opacity: 35,
        fill_style: FillStyle::Ring,
        dot_enabled: true,
        dot_size: Some(3),
        angle: Some(37.25),
        monitor_index: 1,
        resolution: ResolutionMode::Custom,
        custom_resolution: Some((1280, 720)),
        position: Some((100, -20)),
    }
}

// === Presets ===

#[test]
fn save_then_load_round_trips() {
    let store = PresetStore::new(scratch_dir("roundtrip"));
    let settings = customised();
    store.save("sniper", &settings).unwrap();
    assert_eq!(store.load("sniper").unwrap(), settings);
}

#[test]
fn unknown_shape_survives_round_trip() {
    let store = PresetStore::new(scratch_dir("unknown-shape"));
    let settings = ReticleSettings {
        shape: ShapeName::Other("Dot Matrix".into()),
        ..Default::default()
    };
    store.save("legacy", &settings).unwrap();
    assert_eq!(store.load("legacy").unwrap(), settings);
}

#[test]
fn save_creates_directory_and_indents_with_four_spaces() {
    let root = scratch_dir("indent");
    let store = PresetStore::new(root.join("nested").join("presets"));
    let path = store.save(" spaced ", &ReticleSettings::default()).unwrap();
    assert_eq!(path.file_name().unwrap(), "spaced.json");

    let text = fs::read_to_string(path).unwrap();
    assert!(text.starts_with("{\n    \"shape\": \"Crosshair\""));
}

#[test]
fn list_is_sorted_and_only_json() {
    let dir = scratch_dir("list");
    let store = PresetStore::new(&dir);
    store.save("zeta", &ReticleSettings::default()).unwrap();
    store.save("alpha", &ReticleSettings::default()).unwrap();
    fs::write(dir.join("notes.txt"), "ignore me").unwrap();
    fs::create_dir(dir.join("folder.json")).unwrap();

    assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
}

#[test]
fn list_of_missing_directory_is_empty() {
    let store = PresetStore::new(scratch_dir("missing").join("nope"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn delete_removes_file() {
    let store = PresetStore::new(scratch_dir("delete"));
    store.save("gone", &ReticleSettings::default()).unwrap();
    assert!(store.contains("gone"));
    store.delete("gone").unwrap();
    assert!(!store.contains("gone"));
    assert!(matches!(store.delete("gone"), Err(Error::PresetNotFound(_))));
}

#[test]
fn load_missing_preset_is_not_found() {
    let store = PresetStore::new(scratch_dir("not-found"));
    assert!(matches!(
        store.load("ghost"),
        Err(Error::PresetNotFound(name)) if name == "ghost"
    ));
}

#[test]
fn load_malformed_preset_is_reported() {
    let dir = scratch_dir("malformed");
    fs::write(dir.join("broken.json"), "{ not json").unwrap();
    let store = PresetStore::new(&dir);
    assert!(matches!(
        store.load("broken"),
        Err(Error::MalformedPreset { name, .. }) if name == "broken"
    ));
}

#[test]
fn older_preset_defaults_missing_keys() {
    let dir = scratch_dir("older");
    fs::write(
        dir.join("old.json"),
        r##"{"color": "#00FF00", "size": 12, "shape": "Circle", "thickness": 2, "gap": 0}"##,
    )
    .unwrap();
    let loaded = PresetStore::new(&dir).load("old").unwrap();
    assert_eq!(loaded.shape, ShapeName::Circle);
    assert_eq!(loaded.size, 12);
    assert_eq!(loaded.outline_thickness, ReticleSettings::default().outline_thickness);
    assert_eq!(loaded.fill_style, FillStyle::Full);
}

#[test]
fn preset_with_picker_labels_and_extra_keys_loads() {
    let dir = scratch_dir("picker-labels");
    fs::write(
        dir.join("legacy.json"),
        r##"{"color": "#ff0000", "size": 8, "shape": "Crosshair", "thickness": 1,
            "fill_style": "Full", "opacity": 100, "outline_enabled": false,
            "outline_color": "#000000", "gap": 0, "draggable": true,
            "monitor_index": 0, "resolution": "1920x1080 (Native)",
            "custom_resolution": null}"##,
    )
    .unwrap();
    fs::write(
        dir.join("custom.json"),
        r##"{"resolution": "Custom...", "custom_resolution": [1280, 720]}"##,
    )
    .unwrap();
    let store = PresetStore::new(&dir);

    let legacy = store.load("legacy").unwrap();
    assert_eq!(legacy.resolution, ResolutionMode::Native);
    assert_eq!(legacy.color, Color::rgb(255, 0, 0));
    assert_eq!(legacy.shape, ShapeName::Crosshair);

    let custom = store.load("custom").unwrap();
    assert_eq!(custom.resolution, ResolutionMode::Custom);
    assert_eq!(custom.custom_resolution, Some((1280, 720)));
}

#[test]
fn invalid_names_are_rejected() {
    let store = PresetStore::new(scratch_dir("names"));
    assert!(matches!(
        store.save("  ", &ReticleSettings::default()),
        Err(Error::EmptyPresetName)
    ));
    assert!(matches!(
        store.save("../up", &ReticleSettings::default()),
        Err(Error::InvalidPresetName(_))
    ));
}

// === Preferences ===

#[test]
fn preferences_default_when_file_missing() {
    let mut prefs = Preferences::new(scratch_dir("prefs-missing").join("preferences.json"));
    assert_eq!(prefs.get(), ReticleSettings::default());
    assert!(!prefs.is_dirty());
}

#[test]
fn preferences_default_when_file_malformed() {
    let dir = scratch_dir("prefs-malformed");
    let path = dir.join("preferences.json");
    fs::write(&path, "[1, 2").unwrap();
    assert_eq!(Preferences::new(&path).get(), ReticleSettings::default());
}

#[test]
fn preferences_write_only_on_flush() {
    let path = scratch_dir("prefs-flush").join("sub").join("preferences.json");
    let mut prefs = Preferences::new(&path);
    prefs.set(customised());
    assert!(prefs.is_dirty());
    assert!(!path.exists());

    prefs.flush().unwrap();
    assert!(!prefs.is_dirty());
    assert!(path.exists());

    let mut reread = Preferences::new(&path);
    assert_eq!(reread.get(), customised());
}

#[test]
fn clean_flush_is_a_no_op() {
    let path = scratch_dir("prefs-clean").join("preferences.json");
    let mut prefs = Preferences::new(&path);
    prefs.get();
    prefs.flush().unwrap();
    assert!(!path.exists());
}
