//! Tests for reading layout options from TOML configuration.
//!
//! Needs the `serde` feature: `cargo test --all-features`.

use textloft::{HorizontalAlign, LayoutOptions, VerticalAlign};

#[test]
fn test_full_config() {
    let options: LayoutOptions = toml::from_str(
        r#"
        size = 12.5
        curve_segments = 0
        halign = "center"
        valign = "top"
        kerning = false
        spacing = 1.25
        "#,
    )
    .unwrap();

    assert_eq!(options.size, 12.5);
    assert_eq!(options.halign, HorizontalAlign::Center);
    assert_eq!(options.valign, VerticalAlign::Top);
    assert!(!options.kerning);

    let resolved = options.resolve().unwrap();
    assert_eq!(resolved.curve_segments(), 8);
    assert_eq!(resolved.spacing(), 1.25);
}

#[test]
fn test_partial_config_uses_defaults() {
    let options: LayoutOptions = toml::from_str(r#"halign = "right""#).unwrap();
    assert_eq!(
        options,
        LayoutOptions::default().with_halign(HorizontalAlign::Right)
    );
}

#[test]
fn test_unknown_alignment_name_rejected() {
    let result: Result<LayoutOptions, _> = toml::from_str(r#"valign = "middle""#);
    assert!(result.is_err());
}

#[test]
fn test_round_trip() {
    let options = LayoutOptions::default()
        .with_size(3.0)
        .with_halign(HorizontalAlign::Right)
        .with_valign(VerticalAlign::Bottom)
        .with_spacing(0.75);
    let text = toml::to_string(&options).unwrap();
    assert!(text.contains("halign = \"right\""));
    let back: LayoutOptions = toml::from_str(&text).unwrap();
    assert_eq!(back, options);
}
