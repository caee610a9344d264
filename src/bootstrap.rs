use crate::core::{
    Camera, ControlGroup, ControlLayout, LiveParams, PlaybackController, Scene, SceneConfig,
};
use crate::frame::{self, AnimateHook, ColorHook, FrameClock, FrameContext};
use crate::{dom, events, panel, render};
use std::cell::RefCell;
use std::rc::Rc;

/// Caller extension points.
#[derive(Default)]
pub struct Hooks {
    /// Runs once after the renderer, listeners and panel exist, before the first frame.
    pub on_start: Option<Box<dyn FnOnce(&mut FrameContext)>>,
    /// Runs first in every frame with the animation timestamp in milliseconds.
    pub on_animate: Option<AnimateHook>,
    /// Receives the color picked in the panel.
    pub on_color_change: Option<ColorHook>,
    /// Extra panel groups; a group titled like a default one replaces it.
    pub controls: Vec<ControlGroup>,
}

/// Create the renderer on the page canvas, wire input and the panel, then start the frame loop.
///
/// Failing to obtain a WebGPU device is fatal and returned to the caller.
pub async fn initialize(
    config: SceneConfig,
    hooks: Hooks,
) -> anyhow::Result<Rc<RefCell<FrameContext>>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::acquire_canvas(&document)?;
    dom::wire_canvas_resize(&canvas);

    let gpu = render::GpuState::new(&canvas, config.background, &config.bloom, &config.film).await?;

    let aspect = config
        .camera
        .aspect
        .unwrap_or_else(|| dom::canvas_aspect(&canvas));
    let camera = Camera::new(
        config.camera.fov.value,
        aspect,
        config.camera.near,
        config.camera.far,
    );
    let controller = PlaybackController::new(config.camera.fov.value, config.playback_speed);
    let params = LiveParams::from_config(&config);
    let layout = ControlLayout::for_config(&config, hooks.controls);
    log::info!(
        "[init] fov={} speed={} canvas={}x{}",
        config.camera.fov.value,
        config.playback_speed,
        canvas.width(),
        canvas.height()
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene: Scene::new(config.background),
        camera,
        controller,
        params: params.clone(),
        layout: layout.clone(),
        canvas: canvas.clone(),
        gpu: Some(gpu),
        clock: FrameClock::new(),
        follow_canvas_aspect: config.camera.aspect.is_none(),
        on_animate: hooks.on_animate,
        on_color_change: hooks.on_color_change,
    }));

    events::wire_pointer_handlers(&canvas, frame_ctx.clone());
    panel::build(&document, &layout, &params, frame_ctx.clone())?;
    events::wire_panel_toggle_h(&document);

    if let Some(on_start) = hooks.on_start {
        on_start(&mut frame_ctx.borrow_mut());
    }
    frame::start_loop(frame_ctx.clone());
    Ok(frame_ctx)
}
