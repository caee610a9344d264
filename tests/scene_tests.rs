// Host-side tests for the scene graph, depth motion and camera.
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
    pub mod generator {
        include!("../src/core/generator.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod playback {
        include!("../src/core/playback.rs");
    }
}

use flycore::camera::Camera;
use flycore::constants::*;
use flycore::generator::*;
use flycore::playback::PlaybackController;
use flycore::scene::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn solid_ring(wireframe: bool) -> SceneObject {
    create_ring(
        &mut StdRng::seed_from_u64(1),
        RingOptions {
            theta_start: Some(0.0),
            theta_length: Some(std::f32::consts::TAU),
            color: Some([0.2, 0.4, 0.6]),
            wireframe: Some(wireframe),
            ..Default::default()
        },
    )
}

fn moving(z: f32, speed: i32) -> SceneObject {
    let mut obj = solid_ring(false);
    obj.position.z = z;
    obj.speed_z = speed;
    obj
}

#[test]
fn depth_steps_by_speed_then_wraps_to_far() {
    let mut obj = moving(-5.0, 10);
    obj.advance_depth(1.0);
    assert_eq!(obj.position.z, 5.0);
    obj.advance_depth(1.0);
    assert_eq!(obj.position.z, DEPTH_FAR);
    obj.advance_depth(1.0);
    assert_eq!(obj.position.z, DEPTH_FAR + 10.0);
}

#[test]
fn depth_at_exactly_near_still_moves() {
    let mut obj = moving(DEPTH_NEAR, 3);
    obj.advance_depth(1.0);
    assert_eq!(obj.position.z, 3.0);
}

#[test]
fn playback_speed_scales_motion() {
    let mut obj = moving(-100.0, 4);
    obj.advance_depth(0.5);
    assert_eq!(obj.position.z, -98.0);
    obj.advance_depth(0.0);
    assert_eq!(obj.position.z, -98.0);
}

#[test]
fn paused_object_past_near_still_wraps() {
    let mut obj = moving(1.0, 4);
    obj.advance_depth(0.0);
    assert_eq!(obj.position.z, DEPTH_FAR);
}

#[test]
fn scene_moves_every_top_level_object_by_its_own_speed() {
    let mut scene = Scene::new([0.0; 3]);
    let mut rng = StdRng::seed_from_u64(11);
    for obj in populate(&mut rng, 4, 4) {
        scene.add(obj);
    }
    let before: Vec<(f32, i32)> = scene
        .children()
        .iter()
        .map(|c| (c.position.z, c.speed_z))
        .collect();
    let child_rot_before: Vec<f32> = scene.children()[0]
        .children()
        .iter()
        .map(|c| c.rotation.z)
        .collect();

    scene.advance_depths(1.0);

    for (obj, (z, speed)) in scene.children().iter().zip(before) {
        assert_eq!(obj.position.z, z + speed as f32);
    }
    let child_rot_after: Vec<f32> = scene.children()[0]
        .children()
        .iter()
        .map(|c| c.rotation.z)
        .collect();
    assert_eq!(child_rot_before, child_rot_after);
}

#[test]
fn burst_frame_moves_by_speed_and_keeps_fov() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut scene = Scene::new([0.0; 3]);
    let idx = scene.add(create_random_burst(&mut rng, BurstOptions::default()));
    let controller = PlaybackController::new(100.0, 1.0);
    let (z0, speed) = {
        let b = &scene.children()[idx];
        (b.position.z, b.speed_z)
    };

    scene.advance_depths(controller.speed());

    let b = &scene.children()[idx];
    assert_eq!(b.position.z, z0 + speed as f32);
    assert_eq!(controller.fov(), 100.0);
}

#[test]
fn solid_meshes_emit_triangles_and_wireframes_emit_lines() {
    let mut scene = Scene::new([0.0; 3]);
    scene.add(solid_ring(false));
    let flat = scene.flatten();
    assert!(!flat.triangle_indices.is_empty());
    assert!(flat.line_indices.is_empty());

    let mut scene = Scene::new([0.0; 3]);
    scene.add(solid_ring(true));
    let flat = scene.flatten();
    assert!(flat.triangle_indices.is_empty());
    assert!(!flat.line_indices.is_empty());
    assert_eq!(flat.line_indices.len() % 2, 0);
}

#[test]
fn flattened_indices_stay_in_bounds() {
    let mut scene = Scene::new([0.0; 3]);
    for obj in populate(&mut StdRng::seed_from_u64(13), 3, 3) {
        scene.add(obj);
    }
    scene.add(create_box(BoxOptions::default()));
    let flat = scene.flatten();
    let n = flat.vertices.len() as u32;
    assert!(flat
        .triangle_indices
        .iter()
        .chain(&flat.line_indices)
        .all(|i| *i < n));
}

#[test]
fn flatten_into_reuses_buffer() {
    let mut scene = Scene::new([0.0; 3]);
    scene.add(solid_ring(false));
    let mut flat = FlatScene::default();
    scene.flatten_into(&mut flat);
    let first = flat.vertices.len();
    scene.flatten_into(&mut flat);
    assert_eq!(flat.vertices.len(), first);
}

#[test]
fn world_transform_applies_group_depth() {
    let mut obj = moving(-500.0, 1);
    obj.speed_z = 0;
    let mut scene = Scene::new([0.0; 3]);
    scene.add(obj);
    let flat = scene.flatten();
    assert!(flat.vertices.iter().all(|v| (v.position[2] + 500.0).abs() < 1e-3));
}

#[test]
fn set_color_reaches_nested_meshes() {
    let mut scene = Scene::new([0.0; 3]);
    scene.add(create_random_burst(
        &mut StdRng::seed_from_u64(14),
        BurstOptions::default(),
    ));
    scene.set_color([1.0, 1.0, 0.0]);
    let flat = scene.flatten();
    assert!(flat.vertices.iter().all(|v| v.color == [1.0, 1.0, 0.0]));
}

#[test]
fn mesh_count_sums_group_leaves() {
    let burst = create_random_burst(
        &mut StdRng::seed_from_u64(15),
        BurstOptions {
            count: Some(7),
            ..Default::default()
        },
    );
    assert_eq!(burst.mesh_count(), 7);
}

#[test]
fn camera_projects_axis_point_to_center() {
    let cam = Camera::new(100.0, 16.0 / 9.0, 0.1, 2500.0);
    let clip = cam.view_proj() * Vec3::new(0.0, 0.0, -300.0).extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn wider_fov_shrinks_off_axis_points() {
    let mut cam = Camera::new(FOV_REST, 1.0, 0.1, 2500.0);
    let p = Vec3::new(50.0, 0.0, -300.0).extend(1.0);
    let narrow = {
        let c = cam.view_proj() * p;
        c.x / c.w
    };
    cam.fov_degrees = FOV_PUNCH;
    cam.update_projection();
    let wide = {
        let c = cam.view_proj() * p;
        c.x / c.w
    };
    assert!(wide < narrow);
}
