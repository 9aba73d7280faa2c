// JSON configuration surface: defaults, partial overrides and validation.

use scrollview_core::*;

#[test]
fn empty_object_is_the_reference_composition() {
    let config = EngineConfig::from_json("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.nodes.len(), 8);
    assert_eq!(config.connectors.len(), 2);
    assert_eq!(config.strategy, Strategy::Exploded);
    assert!(config.track_window_scroll);
    config.validate().unwrap();
}

#[test]
fn reference_nodes_match_product_layout() {
    let config = EngineConfig::default();
    let ids: Vec<&str> = config.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "processor",
            "driver",
            "chamber",
            "headband",
            "mic_left",
            "mic_right",
            "array_left",
            "array_right"
        ]
    );
    let driver = &config.nodes[1];
    assert_eq!(driver.offset, [-280.0, 0.0]);
    assert_eq!(driver.radius, 90.0);
    assert_eq!(driver.color, Rgba::from_hex("#00D6FF").unwrap());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = EngineConfig::from_json(
        r#"{ "phases": { "label_threshold": 0.5 }, "smoother": { "stiffness": 120 } }"#,
    )
    .unwrap();
    assert_eq!(config.phases.label_threshold, 0.5);
    assert_eq!(config.phases.explode, PhaseConfig::default().explode);
    assert_eq!(config.smoother.stiffness, 120.0);
    assert_eq!(config.smoother.damping, SmootherConfig::default().damping);
}

#[test]
fn custom_nodes_parse_hex_colors() {
    let config = EngineConfig::from_json(
        r##"{
            "nodes": [
                { "id": "core", "offset": [0, 0], "label": "Core", "color": "#ff8800", "radius": 30 },
                { "id": "arm", "offset": [200, -50], "label": "Arm", "color": "00d6ff", "radius": 12.5 }
            ],
            "connectors": []
        }"##,
    )
    .unwrap();
    assert_eq!(config.nodes.len(), 2);
    assert_eq!(config.nodes[0].color, Rgba::opaque(0xff, 0x88, 0x00));
    assert_eq!(config.nodes[1].radius, 12.5);
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(EngineConfig::from_json("{"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        EngineConfig::from_json(r#"{ "connector_color": "blue" }"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        EngineConfig::from_json(r#"{ "strategy": "carousel" }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn inverted_window_is_rejected() {
    let err = EngineConfig::from_json(r#"{ "phases": { "explode": { "start": 0.7, "end": 0.1 } } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Window { name: "explode", .. }));
    assert!(err.to_string().contains("explode"));
}

#[test]
fn hero_fade_must_fit_in_intro() {
    let err = EngineConfig::from_json(r#"{ "phases": { "hero_fade": 0.3 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::HeroFade { .. }));
}

#[test]
fn thresholds_must_be_in_unit_range() {
    let err = EngineConfig::from_json(r#"{ "phases": { "label_threshold": 1.5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfUnitRange { name: "label_threshold", .. }));
}

#[test]
fn spring_parameters_must_be_positive() {
    let err = EngineConfig::from_json(r#"{ "smoother": { "mass": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositive { name: "mass", .. }));
}

#[test]
fn scale_bounds_must_be_ordered() {
    let err = EngineConfig::from_json(r#"{ "responsive": { "min_scale": 2.0, "max_scale": 1.0 } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::ScaleBounds { .. }));
}

#[test]
fn node_table_must_be_non_empty_and_unique() {
    assert!(matches!(
        EngineConfig::from_json(r#"{ "nodes": [] }"#),
        Err(ConfigError::NoNodes)
    ));
    let dup = r##"{ "nodes": [
        { "id": "a", "offset": [0, 0], "label": "A", "color": "#FFFFFF", "radius": 10 },
        { "id": "a", "offset": [5, 0], "label": "B", "color": "#FFFFFF", "radius": 10 }
    ] }"##;
    assert!(matches!(
        EngineConfig::from_json(dup),
        Err(ConfigError::DuplicateNode(id)) if id == "a"
    ));
}

#[test]
fn sequence_settings_are_checked_only_when_selected() {
    // ignored while the exploded view is active
    EngineConfig::from_json(r#"{ "sequence": { "frame_count": 0 } }"#).unwrap();

    assert!(matches!(
        EngineConfig::from_json(r#"{ "strategy": "sequence", "sequence": { "frame_count": 0 } }"#),
        Err(ConfigError::NoFrames)
    ));
    assert!(matches!(
        EngineConfig::from_json(r#"{ "strategy": "sequence", "sequence": { "url_template": "f.webp" } }"#),
        Err(ConfigError::UrlTemplate(_))
    ));
}

#[test]
fn hero_can_be_disabled() {
    let config = EngineConfig::from_json(r#"{ "hero_url": null }"#).unwrap();
    assert_eq!(config.hero_url, None);
}

#[test]
fn hex_colors() {
    assert_eq!(Rgba::from_hex("#0050FF").unwrap(), Rgba::opaque(0, 80, 255));
    assert_eq!(Rgba::from_hex("00d6ff").unwrap(), Rgba::opaque(0, 214, 255));
    assert!(matches!(Rgba::from_hex("#12345"), Err(ConfigError::Color(_))));
    assert!(Rgba::from_hex("#GGGGGG").is_err());
    assert!(Rgba::from_hex("").is_err());
}

#[test]
fn alpha_is_always_clamped() {
    let blue = Rgba::opaque(0, 80, 255);
    assert_eq!(blue.with_alpha(0.25).to_css(), "rgba(0, 80, 255, 0.2500)");
    assert_eq!(blue.with_alpha(2.0).a, 1.0);
    assert_eq!(blue.with_alpha(f32::NAN).a, 0.0);
    assert!(!blue.with_alpha(-1.0).is_visible());
}

#[test]
fn spring_damping_ratio() {
    let s = SmootherConfig::default();
    assert!((s.damping_ratio() - 30.0 / (2.0 * 60f32.sqrt())).abs() < 1e-5);
    assert_eq!(s.overshoot_bound(), 0.0);
}
