use crossgen::{clamp, color_to_hex, parse_hex_color, percent_to_alpha};

mod common;
use common::approx_eq;

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn color_to_hex_is_uppercase() {
    assert_eq!(color_to_hex(255, 0, 128), "#FF0080");
}

#[test]
fn parse_hex_rgb_defaults_alpha() {
    assert_eq!(parse_hex_color("#FF0080"), Some((255, 0, 128, 255)));
}

#[test]
fn parse_hex_rgba() {
    assert_eq!(parse_hex_color("#33669980"), Some((0x33, 0x66, 0x99, 0x80)));
}

#[test]
fn parse_hex_trims_and_ignores_whitespace() {
    assert_eq!(parse_hex_color("  ff00FF80  "), Some((255, 0, 255, 0x80)));
}

#[test]
fn parse_hex_invalid_lengths_return_none() {
    assert!(parse_hex_color("#FFF").is_none());
    assert!(parse_hex_color("#FF00").is_none());
    assert!(parse_hex_color("#FF00FF0000").is_none());
}

#[test]
fn parse_hex_invalid_chars_return_none() {
    assert!(parse_hex_color("#GG0000").is_none());
    assert!(parse_hex_color("ZZZZZZZZ").is_none());
    assert!(parse_hex_color("#ÄÄÄ").is_none());
    assert!(parse_hex_color("#+F+F+F").is_none());
    assert!(parse_hex_color("-1-1-1").is_none());
}

#[test]
fn hex_roundtrip() {
    let hex = color_to_hex(0x11, 0x22, 0x33);
    assert_eq!(parse_hex_color(&hex), Some((0x11, 0x22, 0x33, 0xFF)));
}

#[test]
fn percent_to_alpha_scales_and_clamps() {
    assert!(approx_eq(percent_to_alpha(0), 0.0));
    assert!(approx_eq(percent_to_alpha(50), 0.5));
    assert!(approx_eq(percent_to_alpha(100), 1.0));
    assert!(approx_eq(percent_to_alpha(250), 1.0));
}
