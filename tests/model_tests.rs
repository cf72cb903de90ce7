//! Tests for the model layer (ReticleSettings).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use crossgen::model::constants::*;
use crossgen::model::{Color, FillStyle, ReticleSettings, ResolutionMode, ShapeName};

mod common;
use common::approx_eq;

// === Default Values Tests ===

#[test]
fn default_shape_is_crosshair() {
    assert_eq!(ReticleSettings::default().shape, ShapeName::Crosshair);
}

#[test]
fn default_colors() {
    let s = ReticleSettings::default();
    assert_eq!(s.color, Color::from_tuple(DEFAULT_COLOR));
    assert_eq!(s.outline_color, Color::from_tuple(DEFAULT_OUTLINE_COLOR));
}

#[test]
fn default_geometry() {
    let s = ReticleSettings::default();
    assert_eq!(s.size, DEFAULT_SIZE);
    assert_eq!(s.thickness, DEFAULT_THICKNESS);
    assert_eq!(s.gap, DEFAULT_GAP);
    assert_eq!(s.fill_style, FillStyle::Full);
    assert!(!s.outline_enabled);
    assert!(!s.dot_enabled);
    assert_eq!(s.dot_size, None);
}

#[test]
fn default_placement_is_native_primary() {
    let s = ReticleSettings::default();
    assert_eq!(s.monitor_index, 0);
    assert_eq!(s.resolution, ResolutionMode::Native);
    assert_eq!(s.custom_resolution, None);
    assert_eq!(s.position, None);
}

// === Validation Tests ===

#[test]
fn validate_raises_zero_thickness() {
    let mut s = ReticleSettings::default();
    s.thickness = 0;
    s.outline_thickness = 0;
    s.validate();
    assert_eq!(s.thickness, MIN_THICKNESS);
    assert_eq!(s.outline_thickness, MIN_OUTLINE_THICKNESS);
}

#[test]
fn validate_clamps_opacity() {
    let mut s = ReticleSettings::default();
    s.opacity = 150;
    s.outline_opacity = 101;
    s.validate();
    assert_eq!(s.opacity, MAX_OPACITY);
    assert_eq!(s.outline_opacity, MAX_OPACITY);
}

#[test]
fn validate_leaves_size_and_gap_to_the_resolver() {
    let mut s = ReticleSettings::default();
    s.size = 3;
    s.gap = 99;
    s.validate();
    assert_eq!(s.size, 3);
    assert_eq!(s.gap, 99);
}

#[test]
fn validate_raises_zero_dot() {
    let mut s = ReticleSettings::default();
    s.dot_size = Some(0);
    s.validate();
    assert_eq!(s.dot_size, Some(1));
}

#[test]
fn validate_drops_non_finite_angle() {
    let mut s = ReticleSettings::default();
    s.angle = Some(f64::NAN);
    s.validate();
    assert_eq!(s.angle, None);
}

// === Angle Tests ===

#[test]
fn x_shape_defaults_to_forty_five_degrees() {
    let mut s = ReticleSettings::default();
    s.shape = ShapeName::XShape;
    assert!(approx_eq(s.effective_angle(), DEFAULT_X_ANGLE));
}

#[test]
fn x_shape_angle_is_clamped() {
    let mut s = ReticleSettings::default();
    s.shape = ShapeName::XShape;
    s.angle = Some(120.0);
    assert!(approx_eq(s.effective_angle(), MAX_X_ANGLE));
}

#[test]
fn rotation_defaults_to_zero_and_is_not_clamped() {
    let mut s = ReticleSettings::default();
    assert!(approx_eq(s.effective_angle(), 0.0));
    s.shape = ShapeName::Diamond;
    s.angle = Some(135.0);
    assert!(approx_eq(s.effective_angle(), 135.0));
}

// === Shape Name Tests ===

#[test]
fn shape_names_round_trip_through_strings() {
    for name in SHAPE_NAMES {
        let shape = ShapeName::from(name);
        assert!(!matches!(shape, ShapeName::Other(_)), "{name}");
        assert_eq!(String::from(shape), name);
    }
}

#[test]
fn unknown_shape_name_is_preserved() {
    let shape = ShapeName::from("Dot Matrix");
    assert_eq!(shape, ShapeName::Other("Dot Matrix".into()));
    assert_eq!(shape.to_string(), "Dot Matrix");
}

#[test]
fn shape_capabilities() {
    assert!(ShapeName::Circle.uses_fill_style());
    assert!(!ShapeName::Circle.uses_gap());
    assert!(ShapeName::TShape.uses_gap());
    assert!(!ShapeName::TShape.uses_angle());
    assert!(ShapeName::XShape.uses_angle());
}

// === Serialization Tests ===

#[test]
fn json_uses_documented_keys() {
    let mut s = ReticleSettings::default();
    s.dot_size = Some(3);
    s.angle = Some(10.0);
    let value = serde_json::to_value(&s).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "shape",
        "size",
        "thickness",
        "gap",
        "color",
        "outline_enabled",
        "outline_color",
        "outline_thickness",
        "opacity",
        "outline_opacity",
        "fill_style",
        "dot_enabled",
        "dot_size",
        "angle",
        "monitor_index",
        "resolution",
        "custom_resolution",
        "position",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj["shape"], "Crosshair");
    assert_eq!(obj["color"], "#FF0000");
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let s: ReticleSettings =
        serde_json::from_str(r##"{"shape": "X-Shape", "size": 30, "color": "#00ff00"}"##).unwrap();
    assert_eq!(s.shape, ShapeName::XShape);
    assert_eq!(s.size, 30);
    assert_eq!(s.color, Color::rgb(0, 255, 0));
    assert_eq!(s.thickness, DEFAULT_THICKNESS);
    assert_eq!(s.opacity, DEFAULT_OPACITY_PCT);
}

#[test]
fn resolution_round_trips_and_reads_picker_labels() {
    let s = ReticleSettings {
        resolution: ResolutionMode::Custom,
        ..Default::default()
    };
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains(r#""resolution":"Custom""#));
    let back: ReticleSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back.resolution, ResolutionMode::Custom);

    let native: ResolutionMode = serde_json::from_str(r#""2560x1440 (Native)""#).unwrap();
    assert_eq!(native, ResolutionMode::Native);
}

#[test]
fn nested_pairs_serialize_as_arrays() {
    let mut s = ReticleSettings::default();
    s.custom_resolution = Some((1280, 720));
    s.position = Some((-10, 20));
    let value = serde_json::to_value(&s).unwrap();
    assert_eq!(value["custom_resolution"], serde_json::json!([1280, 720]));
    assert_eq!(value["position"], serde_json::json!([-10, 20]));
}

// === Clone and PartialEq Tests ===

#[test]
fn settings_equality() {
    let a = ReticleSettings::default();
    let mut b = a.clone();
    assert_eq!(a, b);

    b.size = 40;
    assert_ne!(a, b);
}
