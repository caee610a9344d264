// Host-side tests for panel layout, control parsing and JSON config.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod flycore {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod controls {
        include!("../src/core/controls.rs");
    }
}

use flycore::color::*;
use flycore::config::*;
use flycore::controls::*;

#[test]
fn default_layout_has_four_groups_in_order() {
    let layout = ControlLayout::for_config(&SceneConfig::default(), Vec::new());
    assert_eq!(layout.titles(), vec!["Camera", "Options", "Film", "Bloom"]);
}

#[test]
fn caller_group_replaces_default_with_same_title() {
    let custom = ControlGroup {
        title: "Film".into(),
        controls: vec![Control {
            key: ControlKey::GrainIntensity,
            label: "noise",
            kind: ControlKind::Slider {
                min: 0.0,
                max: 0.5,
                step: 0.05,
            },
        }],
    };
    let layout = ControlLayout::for_config(&SceneConfig::default(), vec![custom]);
    assert_eq!(layout.titles(), vec!["Film", "Camera", "Options", "Bloom"]);
    assert_eq!(layout.control(ControlKey::GrainIntensity).unwrap().label, "noise");
    assert!(layout.control(ControlKey::ScanlineDensity).is_none());
}

#[test]
fn fov_slider_uses_configured_range() {
    let mut config = SceneConfig::default();
    config.camera.fov.range = [45.0, 120.0];
    let layout = ControlLayout::for_config(&config, Vec::new());
    let fov = layout.control(ControlKey::Fov).unwrap();
    assert_eq!(
        fov.kind,
        ControlKind::Slider {
            min: 45.0,
            max: 120.0,
            step: 1.0
        }
    );
}

#[test]
fn slider_parse_clamps_and_rejects_garbage() {
    let kind = ControlKind::Slider {
        min: 0.0,
        max: 1.0,
        step: 0.01,
    };
    assert_eq!(kind.parse("0.25"), Some(ControlValue::Number(0.25)));
    assert_eq!(kind.parse("7"), Some(ControlValue::Number(1.0)));
    assert_eq!(kind.parse("-3"), Some(ControlValue::Number(0.0)));
    assert_eq!(kind.parse("abc"), None);
    assert_eq!(kind.parse("NaN"), None);
}

#[test]
fn select_parse_checks_bounds() {
    let kind = ControlKind::Select {
        options: vec!["a", "b", "c"],
    };
    assert_eq!(kind.parse("2"), Some(ControlValue::Choice(2)));
    assert_eq!(kind.parse("3"), None);
    assert_eq!(kind.parse("-1"), None);
}

#[test]
fn color_control_reads_picker_values() {
    assert_eq!(
        ControlKind::Color.parse("#ff0000"),
        Some(ControlValue::Color([1.0, 0.0, 0.0]))
    );
    assert_eq!(ControlKind::Color.parse("red"), None);
    assert_eq!(
        ControlKind::Color.format(ControlValue::Color([0.0, 1.0, 0.0])),
        "#00ff00"
    );
}

#[test]
fn hex_helpers() {
    assert_eq!(parse_hex_color("00ff88"), Some(rgb_from_u32(0x00ff88)));
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#gg0000"), None);
    assert_eq!(to_hex_color(rgb_from_u32(0x111111)), "#111111");
    assert_eq!(to_hex_color([2.0, -1.0, 0.5]), "#ff0080");
}

#[test]
fn live_params_route_changes() {
    let config = SceneConfig::default();
    let mut params = LiveParams::from_config(&config);

    assert_eq!(
        params.apply(ControlKey::Fov, ControlValue::Number(70.0)),
        Applied::Fov(70.0)
    );
    assert_eq!(params.fov, 70.0);

    assert_eq!(
        params.apply(ControlKey::BloomKernel, ControlValue::Choice(5)),
        Applied::Effects
    );
    assert_eq!(params.bloom.kernel_size, KernelSize::Huge);

    assert_eq!(
        params.apply(ControlKey::GrainIntensity, ControlValue::Number(0.9)),
        Applied::Effects
    );
    assert_eq!(params.film.grain_intensity, 0.9);

    let blue = [0.0, 0.0, 1.0];
    assert_eq!(
        params.apply(ControlKey::Color, ControlValue::Color(blue)),
        Applied::Color(blue)
    );
    assert_eq!(params.color, blue);
}

#[test]
fn mismatched_value_is_ignored() {
    let mut params = LiveParams::from_config(&SceneConfig::default());
    let before = params.clone();
    assert_eq!(
        params.apply(ControlKey::Fov, ControlValue::Choice(1)),
        Applied::Ignored
    );
    assert_eq!(params, before);
}

#[test]
fn every_default_control_formats_a_parseable_value() {
    let config = SceneConfig::default();
    let layout = ControlLayout::for_config(&config, Vec::new());
    let params = LiveParams::from_config(&config);
    for group in &layout.groups {
        for control in &group.controls {
            let raw = control.kind.format(params.value_of(control.key));
            assert!(
                control.kind.parse(&raw).is_some(),
                "{} formatted as {raw:?}",
                control.key.id()
            );
        }
    }
}

#[test]
fn config_defaults() {
    let c = SceneConfig::default();
    assert_eq!(c.camera.fov.value, 100.0);
    assert_eq!(c.camera.fov.range, [30.0, 150.0]);
    assert_eq!(c.playback_speed, 1.0);
    assert_eq!(c.bloom.kernel_size, KernelSize::Large);
    assert_eq!(c.seed, None);
}

#[test]
fn partial_json_keeps_defaults() {
    let c = SceneConfig::from_json(
        r#"{"camera":{"fov":{"value":70}},"bloom":{"kernel_size":"very_large"},"seed":7}"#,
    )
    .unwrap();
    assert_eq!(c.camera.fov.value, 70.0);
    assert_eq!(c.camera.fov.range, [30.0, 150.0]);
    assert_eq!(c.bloom.kernel_size, KernelSize::VeryLarge);
    assert_eq!(c.bloom.intensity, 1.0);
    assert_eq!(c.seed, Some(7));
    assert_eq!(c.film, FilmParams::default());
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = SceneConfig::from_json("{\"bloom\":{\"kernel_size\":\"tiny\"}}").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid scene config"));
}

#[test]
fn kernel_index_round_trips_through_select() {
    for k in KernelSize::ALL {
        assert_eq!(KernelSize::from_index(k.index()), Some(k));
    }
    assert_eq!(KernelSize::from_index(KernelSize::ALL.len()), None);
}

#[test]
fn hex_parse_rejects_signs_and_repeated_hashes() {
    assert_eq!(parse_hex_color("#+f+f+f"), None);
    assert_eq!(parse_hex_color("-fffff"), None);
    assert_eq!(parse_hex_color("##00ff88"), None);
    assert_eq!(parse_hex_color(" #00FF88 "), Some(rgb_from_u32(0x00ff88)));
}
