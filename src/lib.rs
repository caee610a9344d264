#![cfg(target_arch = "wasm32")]
use crate::core::generator::{self, BoxOptions};
use crate::core::color::{to_hex_color, Rgb};
use crate::core::{Scene, SceneConfig};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod bootstrap;
mod core;
mod dom;
mod events;
mod frame;
mod panel;
mod render;

use crate::bootstrap::Hooks;
use crate::core::constants::BOX_SPIN_PER_FRAME;
use crate::frame::FrameContext;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flythrough starting");

    if has_config_hook() {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init(SceneConfig::default()).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Pages that set `window.FLYTHROUGH_MANUAL = true` call `start_with_config` themselves.
fn has_config_hook() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("FLYTHROUGH_MANUAL")).ok())
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}

/// Start with a JSON scene config; missing fields take their defaults.
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = SceneConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(config: SceneConfig) -> anyhow::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (bursts, rings) = (config.bursts, config.rings);
    let box_index: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));

    let box_on_start = box_index.clone();
    let box_on_animate = box_index.clone();
    let hooks = Hooks {
        on_start: Some(Box::new(move |ctx: &mut FrameContext| {
            for obj in generator::populate(&mut rng, bursts, rings) {
                ctx.scene.add(obj);
            }
            let idx = ctx.scene.add(generator::create_box(BoxOptions::default()));
            box_on_start.set(Some(idx));
            log::info!(
                "[scene] {} objects, {} meshes",
                ctx.scene.children().len(),
                ctx.scene
                    .children()
                    .iter()
                    .map(|c| c.mesh_count())
                    .sum::<usize>()
            );
        })),
        on_animate: Some(Box::new(move |scene: &mut Scene, _timestamp_ms: f64| {
            let Some(idx) = box_on_animate.get() else {
                return;
            };
            if let Some(b) = scene.children_mut().get_mut(idx) {
                b.rotation += Vec3::new(BOX_SPIN_PER_FRAME, BOX_SPIN_PER_FRAME, 0.0);
            }
        })),
        on_color_change: Some(Box::new(|scene: &mut Scene, color: Rgb| {
            scene.set_color(color);
            log::info!("[panel] color {}", to_hex_color(color));
        })),
        controls: Vec::new(),
    };

    bootstrap::initialize(config, hooks).await?;
    Ok(())
}
