use super::color::{random_color, Rgb};
use super::constants::*;
use super::geometry::Mesh;
use super::scene::{Material, Primitive, SceneObject};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Options for `create_ring`. `None` fields are defaulted or randomized.
#[derive(Clone, Debug, Default)]
pub struct RingOptions {
    pub inner_radius: Option<f32>,
    pub outer_radius: Option<f32>,
    pub radial_segments: Option<u32>,
    pub ring_segments: Option<u32>,
    pub theta_start: Option<f32>,
    pub theta_length: Option<f32>,
    pub color: Option<Rgb>,
    pub wireframe: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct PlaneOptions {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub width_segments: Option<u32>,
    pub height_segments: Option<u32>,
    pub color: Option<Rgb>,
    pub wireframe: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct BurstOptions {
    pub count: Option<usize>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub color: Option<Rgb>,
    pub wireframe: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct RandomRingOptions {
    pub inner_radius: Option<f32>,
    pub thickness: Option<f32>,
    pub color: Option<Rgb>,
    pub wireframe: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct BoxOptions {
    pub size: Vec3,
    pub position: Vec3,
    pub color: Rgb,
    pub wireframe: bool,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            size: Vec3::splat(40.0),
            position: Vec3::new(0.0, 0.0, -300.0),
            color: [0.0, 1.0, 0.0],
            wireframe: true,
        }
    }
}

/// One of 0, 90, 180 or 270 degrees.
fn random_quarter_turn(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0..4) as f32 * FRAC_PI_2
}

/// Starting depth in [DEPTH_FAR, DEPTH_NEAR], denser near DEPTH_FAR.
pub fn random_depth(rng: &mut impl Rng) -> f32 {
    DEPTH_FAR * rng.gen::<f32>().sqrt()
}

pub fn random_speed(rng: &mut impl Rng) -> i32 {
    rng.gen_range(SPEED_MIN..=SPEED_MAX)
}

fn pick_color(rng: &mut impl Rng, color: Option<Rgb>) -> Rgb {
    color.unwrap_or_else(|| random_color(rng, RANDOM_SATURATION, RANDOM_LIGHTNESS))
}

/// Build one ring primitive.
///
/// Start and sweep angles are drawn independently, so rings may overlap
/// or leave gaps, and a zero sweep yields an empty sector.
pub fn create_ring(rng: &mut impl Rng, opts: RingOptions) -> SceneObject {
    let inner_radius = opts.inner_radius.unwrap_or(RING_INNER_RADIUS);
    let outer_radius = opts.outer_radius.unwrap_or(RING_OUTER_RADIUS);
    let radial_segments = opts.radial_segments.unwrap_or(RING_RADIAL_SEGMENTS);
    let ring_segments = opts.ring_segments.unwrap_or(RING_SEGMENTS);
    let theta_start = opts
        .theta_start
        .unwrap_or_else(|| random_quarter_turn(rng));
    let theta_length = opts
        .theta_length
        .unwrap_or_else(|| rng.gen_range(0..4) as f32 / 4.0 * TAU);
    let color = pick_color(rng, opts.color);
    let mesh = Mesh::ring(
        inner_radius,
        outer_radius,
        radial_segments,
        ring_segments,
        theta_start,
        theta_length,
    );
    SceneObject::mesh(
        Primitive::Ring {
            inner_radius,
            outer_radius,
            radial_segments,
            ring_segments,
            theta_start,
            theta_length,
        },
        mesh,
        Material {
            color,
            wireframe: opts.wireframe.unwrap_or(false),
        },
    )
}

/// Build one plane standing outward from the depth axis like a spoke.
pub fn create_plane(rng: &mut impl Rng, opts: PlaneOptions) -> SceneObject {
    let width = opts.width.unwrap_or(PLANE_WIDTH);
    let height = opts.height.unwrap_or(PLANE_HEIGHT);
    let color = pick_color(rng, opts.color);
    let offset = PLANE_RADIUS + rng.gen::<f32>() * PLANE_RADIUS_JITTER;
    let mut mesh = Mesh::plane(
        width,
        height,
        opts.width_segments.unwrap_or(1),
        opts.height_segments.unwrap_or(1),
    );
    mesh.rotate_x(FRAC_PI_2).translate(Vec3::new(0.0, offset, 0.0));
    SceneObject::mesh(
        Primitive::Plane { width, height },
        mesh,
        Material {
            color,
            wireframe: opts.wireframe.unwrap_or(false),
        },
    )
}

/// Spread `objects` evenly over `arc_length` radians about the depth axis.
pub fn create_arc_group(
    rng: &mut impl Rng,
    mut objects: Vec<SceneObject>,
    arc_length: f32,
) -> SceneObject {
    let n = objects.len().max(1) as f32;
    let step = arc_length / n;
    for (i, o) in objects.iter_mut().enumerate() {
        o.rotation.z = i as f32 * step;
    }
    let mut group = SceneObject::group(objects);
    group.position.z = random_depth(rng);
    group.speed_z = random_speed(rng);
    group
}

/// Radial burst of 5..=36 identical planes over a full circle.
pub fn create_random_burst(rng: &mut impl Rng, opts: BurstOptions) -> SceneObject {
    let count = opts
        .count
        .unwrap_or_else(|| rng.gen_range(BURST_COUNT_MIN..=BURST_COUNT_MAX));
    let width = opts
        .width
        .unwrap_or_else(|| rng.gen_range(BURST_WIDTH_MIN..BURST_WIDTH_MAX));
    let height = opts
        .height
        .unwrap_or_else(|| rng.gen_range(BURST_HEIGHT_MIN..BURST_HEIGHT_MAX));
    let wireframe = opts.wireframe.unwrap_or_else(|| rng.gen_bool(0.5));
    let color = pick_color(rng, opts.color);
    let planes = (0..count)
        .map(|_| {
            create_plane(
                rng,
                PlaneOptions {
                    width: Some(width),
                    height: Some(height),
                    color: Some(color),
                    wireframe: Some(wireframe),
                    ..Default::default()
                },
            )
        })
        .collect();
    create_arc_group(rng, planes, TAU)
}

/// Single free-flying ring with its own depth and speed.
pub fn create_random_ring(rng: &mut impl Rng, opts: RandomRingOptions) -> SceneObject {
    let inner_radius = opts
        .inner_radius
        .unwrap_or_else(|| rng.gen_range(RANDOM_RING_INNER_MIN..RANDOM_RING_INNER_MAX));
    let thickness = opts
        .thickness
        .unwrap_or_else(|| rng.gen_range(RANDOM_RING_THICKNESS_MIN..RANDOM_RING_THICKNESS_MAX));
    let wireframe = opts.wireframe.unwrap_or_else(|| rng.gen_bool(0.5));
    let color = pick_color(rng, opts.color);
    let mut ring = create_ring(
        rng,
        RingOptions {
            inner_radius: Some(inner_radius),
            outer_radius: Some(inner_radius + thickness),
            color: Some(color),
            wireframe: Some(wireframe),
            ..Default::default()
        },
    );
    ring.position.z = random_depth(rng);
    ring.speed_z = random_speed(rng);
    ring
}

/// Static box that only moves when a hook moves it.
pub fn create_box(opts: BoxOptions) -> SceneObject {
    let mut obj = SceneObject::mesh(
        Primitive::Box {
            width: opts.size.x,
            height: opts.size.y,
            depth: opts.size.z,
        },
        Mesh::cuboid(opts.size.x, opts.size.y, opts.size.z),
        Material {
            color: opts.color,
            wireframe: opts.wireframe,
        },
    );
    obj.position = opts.position;
    obj
}

/// Startup population: bursts and rings in the order they will be drawn.
pub fn populate(rng: &mut impl Rng, bursts: usize, rings: usize) -> Vec<SceneObject> {
    let mut out = Vec::with_capacity(bursts + rings);
    out.extend((0..bursts).map(|_| create_random_burst(rng, BurstOptions::default())));
    out.extend((0..rings).map(|_| create_random_ring(rng, RandomRingOptions::default())));
    out
}
