// Host-side tests for easing curves and the tween clock.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use tween::*;

const ALL_EASES: [Ease; 4] = [Ease::Linear, Ease::InCubic, Ease::OutCubic, Ease::OutElastic];

#[test]
fn eases_hit_their_endpoints() {
    for ease in ALL_EASES {
        assert_eq!(ease.sample(0.0), 0.0, "{:?} at 0", ease);
        assert!((ease.sample(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", ease);
    }
}

#[test]
fn eases_clamp_out_of_range_progress() {
    for ease in ALL_EASES {
        assert_eq!(ease.sample(-0.5), ease.sample(0.0));
        assert_eq!(ease.sample(1.5), ease.sample(1.0));
    }
}

#[test]
fn in_cubic_starts_slow_and_out_cubic_starts_fast() {
    assert!(Ease::InCubic.sample(0.25) < 0.25);
    assert!(Ease::OutCubic.sample(0.25) > 0.25);
}

#[test]
fn out_elastic_overshoots_before_settling() {
    let peak = (1..100)
        .map(|i| Ease::OutElastic.sample(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.1, "expected overshoot, peak={peak}");
}

#[test]
fn idle_tween_reports_nothing() {
    let mut t = Tween::new(0.0, 10.0, 100.0, Ease::Linear);
    assert_eq!(t.current(50.0), None);
    assert_eq!(t.update(50.0), None);
    assert!(!t.is_playing());
}

#[test]
fn update_interpolates_and_finishes_once() {
    let mut t = Tween::new(0.0, 10.0, 100.0, Ease::Linear);
    t.start(1000.0);
    let mid = t.update(1050.0).unwrap();
    assert!((mid.value - 5.0).abs() < 1e-4);
    assert!(!mid.finished);

    let end = t.update(1200.0).unwrap();
    assert_eq!(end.value, 10.0);
    assert!(end.finished);
    assert!(t.is_complete());
    assert_eq!(t.update(1300.0), None);
    assert_eq!(t.current(1300.0), Some(10.0));
}

#[test]
fn pause_freezes_progress() {
    let mut t = Tween::new(0.0, 100.0, 100.0, Ease::Linear);
    t.start(0.0);
    t.pause(40.0);
    assert!(t.is_paused());
    assert_eq!(t.update(90.0), None);
    let frozen = t.current(500.0).unwrap();
    assert!((frozen - 40.0).abs() < 1e-3);
}

#[test]
fn pause_is_ignored_unless_playing() {
    let mut t = Tween::new(0.0, 1.0, 100.0, Ease::Linear);
    t.pause(10.0);
    assert!(!t.is_paused());
    t.start(0.0);
    t.complete();
    t.pause(10.0);
    assert!(t.is_complete());
}

#[test]
fn complete_jumps_to_end_value() {
    let mut t = Tween::new(80.0, 100.0, 100.0, Ease::OutCubic);
    t.start(0.0);
    t.pause(30.0);
    assert_eq!(t.complete(), 100.0);
    assert!(t.is_complete());
}

#[test]
fn start_restarts_from_the_beginning() {
    let mut t = Tween::new(0.0, 1.0, 100.0, Ease::Linear);
    t.start(0.0);
    t.update(200.0);
    assert!(t.is_complete());
    t.start(300.0);
    let step = t.update(310.0).unwrap();
    assert!((step.value - 0.1).abs() < 1e-4);
}

#[test]
fn zero_duration_finishes_on_first_update() {
    let mut t = Tween::new(3.0, 7.0, 0.0, Ease::InCubic);
    t.start(5.0);
    let step = t.update(5.0).unwrap();
    assert_eq!(step.value, 7.0);
    assert!(step.finished);
}

#[test]
fn set_from_changes_the_start_value() {
    let mut t = Tween::new(1.0, 0.0, 100.0, Ease::Linear);
    t.set_from(0.5);
    t.start(0.0);
    let step = t.update(50.0).unwrap();
    assert!((step.value - 0.25).abs() < 1e-4);
}
