pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod generator;
pub mod geometry;
pub mod playback;
pub mod scene;
pub mod tween;

pub use camera::Camera;
pub use config::*;
pub use controls::*;
pub use playback::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
