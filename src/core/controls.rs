use super::color::{parse_hex_color, to_hex_color, Rgb};
use super::config::{BloomParams, FilmParams, KernelSize, SceneConfig};

/// Every live-tunable parameter the panel can touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Fov,
    Color,
    ScanlineDensity,
    ScanlineIntensity,
    GrainIntensity,
    BloomResolution,
    BloomKernel,
    BloomIntensity,
    BloomDistinction,
}

impl ControlKey {
    /// DOM id suffix.
    pub fn id(self) -> &'static str {
        match self {
            ControlKey::Fov => "fov",
            ControlKey::Color => "color",
            ControlKey::ScanlineDensity => "scanline-density",
            ControlKey::ScanlineIntensity => "scanline-intensity",
            ControlKey::GrainIntensity => "grain-intensity",
            ControlKey::BloomResolution => "bloom-resolution",
            ControlKey::BloomKernel => "bloom-kernel",
            ControlKey::BloomIntensity => "bloom-intensity",
            ControlKey::BloomDistinction => "bloom-distinction",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    Slider { min: f32, max: f32, step: f32 },
    Select { options: Vec<&'static str> },
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlValue {
    Number(f32),
    Choice(usize),
    Color(Rgb),
}

impl ControlKind {
    /// Parse a raw DOM value (`input.value` / `select.value`).
    pub fn parse(&self, raw: &str) -> Option<ControlValue> {
        match self {
            ControlKind::Slider { min, max, .. } => raw
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| ControlValue::Number(v.clamp(*min, *max))),
            ControlKind::Select { options } => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|i| *i < options.len())
                .map(ControlValue::Choice),
            ControlKind::Color => parse_hex_color(raw).map(ControlValue::Color),
        }
    }

    pub fn format(&self, value: ControlValue) -> String {
        match value {
            ControlValue::Number(v) => format!("{v}"),
            ControlValue::Choice(i) => i.to_string(),
            ControlValue::Color(c) => to_hex_color(c),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Control {
    pub key: ControlKey,
    pub label: &'static str,
    pub kind: ControlKind,
}

impl Control {
    fn slider(key: ControlKey, label: &'static str, min: f32, max: f32, step: f32) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Slider { min, max, step },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControlGroup {
    pub title: String,
    pub controls: Vec<Control>,
}

/// Ordered panel groups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlLayout {
    pub groups: Vec<ControlGroup>,
}

impl ControlLayout {
    /// Keep the caller's groups, then add each default group whose title is missing.
    pub fn for_config(config: &SceneConfig, caller_groups: Vec<ControlGroup>) -> Self {
        let mut groups = caller_groups;
        for g in default_groups(config) {
            if !groups.iter().any(|existing| existing.title == g.title) {
                groups.push(g);
            }
        }
        Self { groups }
    }

    pub fn control(&self, key: ControlKey) -> Option<&Control> {
        self.groups
            .iter()
            .flat_map(|g| g.controls.iter())
            .find(|c| c.key == key)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.title.as_str()).collect()
    }
}

pub fn default_groups(config: &SceneConfig) -> Vec<ControlGroup> {
    let [fov_min, fov_max] = config.camera.fov.range;
    vec![
        ControlGroup {
            title: "Camera".into(),
            controls: vec![Control::slider(ControlKey::Fov, "fov", fov_min, fov_max, 1.0)],
        },
        ControlGroup {
            title: "Options".into(),
            controls: vec![Control {
                key: ControlKey::Color,
                label: "color",
                kind: ControlKind::Color,
            }],
        },
        ControlGroup {
            title: "Film".into(),
            controls: vec![
                Control::slider(ControlKey::ScanlineDensity, "scanline density", 0.0, 2.0, 0.01),
                Control::slider(ControlKey::ScanlineIntensity, "scanline intensity", 0.0, 1.0, 0.01),
                Control::slider(ControlKey::GrainIntensity, "grain", 0.0, 1.0, 0.01),
            ],
        },
        ControlGroup {
            title: "Bloom".into(),
            controls: vec![
                Control::slider(ControlKey::BloomResolution, "resolution", 0.1, 1.0, 0.05),
                Control {
                    key: ControlKey::BloomKernel,
                    label: "kernel size",
                    kind: ControlKind::Select {
                        options: KernelSize::ALL.iter().map(|k| k.label()).collect(),
                    },
                },
                Control::slider(ControlKey::BloomIntensity, "intensity", 0.0, 3.0, 0.01),
                Control::slider(ControlKey::BloomDistinction, "distinction", 0.1, 10.0, 0.1),
            ],
        },
    ]
}

/// What a control change affected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Applied {
    Effects,
    Fov(f32),
    Color(Rgb),
    Ignored,
}

/// Current values of everything the panel edits.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveParams {
    pub fov: f32,
    pub color: Rgb,
    pub bloom: BloomParams,
    pub film: FilmParams,
}

impl LiveParams {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            fov: config.camera.fov.value,
            color: config.controls.color,
            bloom: config.bloom.clone(),
            film: config.film.clone(),
        }
    }

    pub fn apply(&mut self, key: ControlKey, value: ControlValue) -> Applied {
        match (key, value) {
            (ControlKey::Fov, ControlValue::Number(v)) => {
                self.fov = v;
                Applied::Fov(v)
            }
            (ControlKey::Color, ControlValue::Color(c)) => {
                self.color = c;
                Applied::Color(c)
            }
            (ControlKey::ScanlineDensity, ControlValue::Number(v)) => {
                self.film.scanline_density = v;
                Applied::Effects
            }
            (ControlKey::ScanlineIntensity, ControlValue::Number(v)) => {
                self.film.scanline_intensity = v;
                Applied::Effects
            }
            (ControlKey::GrainIntensity, ControlValue::Number(v)) => {
                self.film.grain_intensity = v;
                Applied::Effects
            }
            (ControlKey::BloomResolution, ControlValue::Number(v)) => {
                self.bloom.resolution_scale = v;
                Applied::Effects
            }
            (ControlKey::BloomKernel, ControlValue::Choice(i)) => match KernelSize::from_index(i) {
                Some(k) => {
                    self.bloom.kernel_size = k;
                    Applied::Effects
                }
                None => Applied::Ignored,
            },
            (ControlKey::BloomIntensity, ControlValue::Number(v)) => {
                self.bloom.intensity = v;
                Applied::Effects
            }
            (ControlKey::BloomDistinction, ControlValue::Number(v)) => {
                self.bloom.distinction = v;
                Applied::Effects
            }
            _ => Applied::Ignored,
        }
    }

    pub fn value_of(&self, key: ControlKey) -> ControlValue {
        match key {
            ControlKey::Fov => ControlValue::Number(self.fov),
            ControlKey::Color => ControlValue::Color(self.color),
            ControlKey::ScanlineDensity => ControlValue::Number(self.film.scanline_density),
            ControlKey::ScanlineIntensity => ControlValue::Number(self.film.scanline_intensity),
            ControlKey::GrainIntensity => ControlValue::Number(self.film.grain_intensity),
            ControlKey::BloomResolution => ControlValue::Number(self.bloom.resolution_scale),
            ControlKey::BloomKernel => ControlValue::Choice(self.bloom.kernel_size.index()),
            ControlKey::BloomIntensity => ControlValue::Number(self.bloom.intensity),
            ControlKey::BloomDistinction => ControlValue::Number(self.bloom.distinction),
        }
    }
}
