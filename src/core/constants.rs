// Shared scene, tween and effect tuning constants.

// Depth axis: objects fly from FAR toward NEAR and wrap back to FAR.
pub const DEPTH_NEAR: f32 = 0.0;
pub const DEPTH_FAR: f32 = -2000.0;

// Per-object depth speed range (inclusive)
pub const SPEED_MIN: i32 = 1;
pub const SPEED_MAX: i32 = 10;

// Ring defaults
pub const RING_INNER_RADIUS: f32 = 30.0;
pub const RING_OUTER_RADIUS: f32 = 40.0;
pub const RING_RADIAL_SEGMENTS: u32 = 32;
pub const RING_SEGMENTS: u32 = 8;

// Random ring ranges
pub const RANDOM_RING_INNER_MIN: f32 = 40.0;
pub const RANDOM_RING_INNER_MAX: f32 = 180.0;
pub const RANDOM_RING_THICKNESS_MIN: f32 = 2.0;
pub const RANDOM_RING_THICKNESS_MAX: f32 = 20.0;

// Plane defaults; planes stand radially like spokes once grouped
pub const PLANE_WIDTH: f32 = 10.0;
pub const PLANE_HEIGHT: f32 = 100.0;
pub const PLANE_RADIUS: f32 = 100.0;
pub const PLANE_RADIUS_JITTER: f32 = 20.0;

// Burst ranges
pub const BURST_COUNT_MIN: usize = 5;
pub const BURST_COUNT_MAX: usize = 36;
pub const BURST_WIDTH_MIN: f32 = 2.0;
pub const BURST_WIDTH_MAX: f32 = 12.0;
pub const BURST_HEIGHT_MIN: f32 = 20.0;
pub const BURST_HEIGHT_MAX: f32 = 200.0;

// Startup population
pub const STARTUP_BURSTS: usize = 12;
pub const STARTUP_RINGS: usize = 10;

// Field-of-view punch (degrees)
pub const FOV_REST: f32 = 80.0;
pub const FOV_PUNCH: f32 = 100.0;

// Tween timings (milliseconds)
pub const PRESS_MS: f64 = 100.0;
pub const RELEASE_PAUSED_MS: f64 = 1000.0;
pub const RELEASE_ACTIVE_MS: f64 = 150.0;
pub const SPEED_DOWN_MS: f64 = 500.0;
pub const SPEED_UP_MS: f64 = 50.0;

// Random fill colors stay vivid
pub const RANDOM_SATURATION: f32 = 0.8;
pub const RANDOM_LIGHTNESS: f32 = 0.55;

// Box rotation per frame driven from the animate hook (radians)
pub const BOX_SPIN_PER_FRAME: f32 = 0.01;
