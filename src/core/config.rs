use super::color::{rgb_from_u32, Rgb};
use super::constants::{STARTUP_BURSTS, STARTUP_RINGS};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid scene config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Field of view in degrees plus the slider range offered for it.
///
/// `value` is not checked against `range`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FovConfig {
    pub value: f32,
    pub range: [f32; 2],
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            value: 100.0,
            range: [30.0, 150.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov: FovConfig,
    /// `None` follows the canvas aspect ratio.
    pub aspect: Option<f32>,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: FovConfig::default(),
            aspect: None,
            near: 0.1,
            far: 2500.0,
        }
    }
}

/// Blur footprint of the bloom pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelSize {
    VerySmall,
    Small,
    Medium,
    Large,
    VeryLarge,
    Huge,
}

impl KernelSize {
    pub const ALL: [KernelSize; 6] = [
        KernelSize::VerySmall,
        KernelSize::Small,
        KernelSize::Medium,
        KernelSize::Large,
        KernelSize::VeryLarge,
        KernelSize::Huge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KernelSize::VerySmall => "very small",
            KernelSize::Small => "small",
            KernelSize::Medium => "medium",
            KernelSize::Large => "large",
            KernelSize::VeryLarge => "very large",
            KernelSize::Huge => "huge",
        }
    }

    /// Blur tap spacing in bloom-target texels.
    pub fn radius(self) -> f32 {
        match self {
            KernelSize::VerySmall => 0.5,
            KernelSize::Small => 1.0,
            KernelSize::Medium => 1.5,
            KernelSize::Large => 2.0,
            KernelSize::VeryLarge => 3.0,
            KernelSize::Huge => 4.5,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomParams {
    /// Bloom target size relative to the canvas.
    pub resolution_scale: f32,
    pub kernel_size: KernelSize,
    pub intensity: f32,
    /// Higher values keep only the brightest pixels.
    pub distinction: f32,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            resolution_scale: 0.5,
            kernel_size: KernelSize::Large,
            intensity: 1.0,
            distinction: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilmParams {
    /// Scanlines per output pixel row.
    pub scanline_density: f32,
    pub scanline_intensity: f32,
    pub grain_intensity: f32,
}

impl Default for FilmParams {
    fn default() -> Self {
        Self {
            scanline_density: 1.25,
            scanline_intensity: 0.3,
            grain_intensity: 0.35,
        }
    }
}

/// Caller-supplied controls; the change callback lives on the bootstrap hooks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub color: Rgb,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            color: rgb_from_u32(0x00ff88),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub background: Rgb,
    pub playback_speed: f32,
    pub bloom: BloomParams,
    pub film: FilmParams,
    pub controls: ControlsConfig,
    /// Fixed seed for the generator; `None` draws one from the browser.
    pub seed: Option<u64>,
    pub bursts: usize,
    pub rings: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            background: rgb_from_u32(0x111111),
            playback_speed: 1.0,
            bloom: BloomParams::default(),
            film: FilmParams::default(),
            controls: ControlsConfig::default(),
            seed: None,
            bursts: STARTUP_BURSTS,
            rings: STARTUP_RINGS,
        }
    }
}

impl SceneConfig {
    /// Parse JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
