// Host-side tests for the press/release playback controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod flycore {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod playback {
        include!("../src/core/playback.rs");
    }
}

use flycore::constants::*;
use flycore::geometry::Mesh;
use flycore::playback::*;
use flycore::scene::{Material, Primitive, Scene, SceneObject};
use flycore::tween::Ease;

fn controller() -> PlaybackController {
    PlaybackController::new(100.0, 1.0)
}

#[test]
fn starts_idle_and_active() {
    let c = controller();
    assert_eq!(c.gesture(), Gesture::Idle);
    assert_eq!(c.playback(), Playback::Active);
    assert_eq!(c.fov(), 100.0);
    assert_eq!(c.speed(), 1.0);
}

#[test]
fn held_press_ramps_fov_then_toggles_to_paused() {
    let mut c = controller();
    let events = c.pointer_down(0.0);
    assert_eq!(events.as_slice(), &[PlaybackEvent::PressStarted]);
    assert_eq!(c.gesture(), Gesture::Pressing);

    c.update(50.0);
    assert!(c.fov() > FOV_REST && c.fov() < FOV_PUNCH);
    assert!(!c.is_paused());

    let events = c.update(120.0);
    assert!(events.contains(&PlaybackEvent::PressCompleted {
        playback: Playback::Paused
    }));
    assert!(events.contains(&PlaybackEvent::SpeedDownStarted));
    assert_eq!(c.fov(), FOV_PUNCH);
    assert!(c.is_paused());
    assert!(c.speed_down_playing());
}

#[test]
fn early_release_forces_press_completion() {
    let mut c = controller();
    c.pointer_down(0.0);
    let events = c.pointer_up(30.0);
    assert_eq!(c.fov(), FOV_PUNCH);
    assert!(c.is_paused());
    assert!(events.contains(&PlaybackEvent::ReleaseStarted {
        duration_ms: RELEASE_PAUSED_MS,
        ease: Ease::OutElastic,
    }));
    assert!(!events.contains(&PlaybackEvent::SpeedUpStarted));
    assert_eq!(c.gesture(), Gesture::Releasing);
}

#[test]
fn release_timing_follows_paused_state_at_pointer_up() {
    let mut c = controller();
    // first click pauses
    c.pointer_down(0.0);
    c.pointer_up(20.0);
    assert_eq!(c.release_tween().duration_ms(), RELEASE_PAUSED_MS);
    assert_eq!(c.release_tween().ease(), Ease::OutElastic);

    // second click resumes
    c.pointer_down(2000.0);
    c.pointer_up(2020.0);
    assert!(!c.is_paused());
    assert_eq!(c.release_tween().duration_ms(), RELEASE_ACTIVE_MS);
    assert_eq!(c.release_tween().ease(), Ease::InCubic);
    assert!(c.speed_up_playing());
    assert!(!c.speed_down_playing());
}

#[test]
fn pause_then_resume_drives_speed_to_zero_and_back() {
    let mut c = controller();
    c.pointer_down(0.0);
    c.pointer_up(20.0);
    c.update(20.0 + SPEED_DOWN_MS + 10.0);
    assert_eq!(c.speed(), 0.0);

    c.pointer_down(1000.0);
    c.pointer_up(1010.0);
    c.update(1010.0 + SPEED_UP_MS * 0.5);
    assert!(c.speed() > 0.0 && c.speed() < 1.0);
    c.update(1010.0 + SPEED_UP_MS + 1.0);
    assert_eq!(c.speed(), 1.0);
}

#[test]
fn release_settles_fov_at_rest_and_returns_to_idle() {
    let mut c = controller();
    c.pointer_down(0.0);
    c.pointer_up(20.0);
    let events = c.update(20.0 + RELEASE_PAUSED_MS + 1.0);
    assert!(events.contains(&PlaybackEvent::ReleaseCompleted));
    assert_eq!(c.fov(), FOV_REST);
    assert_eq!(c.gesture(), Gesture::Idle);
}

#[test]
fn pressing_during_release_pauses_it() {
    let mut c = controller();
    c.pointer_down(0.0);
    c.pointer_up(10.0);
    c.update(200.0);
    assert!(c.release_tween().is_playing());
    c.pointer_down(210.0);
    assert!(c.release_tween().is_paused());
    assert_eq!(c.gesture(), Gesture::Pressing);
}

#[test]
fn rapid_clicks_keep_speed_in_range_and_never_speed_up_while_paused() {
    let mut c = controller();
    let mut now = 0.0;
    for _ in 0..40 {
        c.pointer_down(now);
        now += 5.0;
        c.pointer_up(now);
        if c.is_paused() {
            assert!(!c.speed_up_playing());
        }
        for _ in 0..3 {
            now += 7.0;
            c.update(now);
            assert!((0.0..=1.0).contains(&c.speed()), "speed={}", c.speed());
        }
    }
}

#[test]
fn speed_tweens_start_from_current_speed() {
    let mut c = controller();
    c.pointer_down(0.0);
    c.pointer_up(10.0);
    // halfway down, then resume
    c.update(10.0 + SPEED_DOWN_MS * 0.5);
    let mid = c.speed();
    assert!(mid > 0.0 && mid < 1.0);
    c.pointer_down(300.0);
    c.pointer_up(305.0);
    assert!(!c.speed_down_playing());
    c.update(305.0);
    assert!((c.speed() - mid).abs() < 1e-4);
}

#[test]
fn slider_fov_is_overridden_by_running_tween() {
    let mut c = controller();
    c.set_fov(60.0);
    assert_eq!(c.fov(), 60.0);
    c.pointer_down(0.0);
    c.update(50.0);
    assert!(c.fov() >= FOV_REST);
}

#[test]
fn repeated_presses_without_release_only_slow_down() {
    let mut c = controller();
    let mut now = 0.0;
    let mut last_speed = c.speed();
    for _ in 0..4 {
        c.pointer_down(now);
        for _ in 0..5 {
            now += 40.0;
            c.update(now);
            let speed = c.speed();
            assert!((0.0..=1.0).contains(&speed), "speed={speed}");
            assert!(speed <= last_speed + 1e-6, "{speed} after {last_speed}");
            assert!(!c.speed_up_playing());
            last_speed = speed;
        }
    }
    c.update(now + SPEED_DOWN_MS * 2.0);
    assert_eq!(c.speed(), 0.0);
    assert!(!c.speed_up_playing());
}

fn moving_plane(z: f32, speed: i32) -> SceneObject {
    let mut obj = SceneObject::mesh(
        Primitive::Plane {
            width: 1.0,
            height: 1.0,
        },
        Mesh::plane(1.0, 1.0, 1, 1),
        Material {
            color: [1.0; 3],
            wireframe: false,
        },
    );
    obj.position.z = z;
    obj.speed_z = speed;
    obj
}

#[test]
fn frame_moves_objects_at_the_speed_sampled_this_frame() {
    let mut c = controller();
    let mut scene = Scene::new([0.0; 3]);
    scene.add(moving_plane(-100.0, 5));

    c.pointer_down(0.0);
    c.pointer_up(10.0);
    assert_eq!(c.speed(), 1.0);

    // speed-down has finished by now, so this frame must not move anything
    advance_frame(&mut scene, &mut c, 10.0 + SPEED_DOWN_MS + 1.0);
    assert_eq!(c.speed(), 0.0);
    assert_eq!(scene.children()[0].position.z, -100.0);
}

#[test]
fn frame_at_full_speed_moves_by_object_speed() {
    let mut c = controller();
    let mut scene = Scene::new([0.0; 3]);
    scene.add(moving_plane(-100.0, 5));
    advance_frame(&mut scene, &mut c, 16.0);
    assert_eq!(scene.children()[0].position.z, -95.0);
}
