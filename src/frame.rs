use crate::core::color::Rgb;
use crate::core::{
    advance_frame, Applied, Camera, ControlKey, ControlLayout, LiveParams, PlaybackController,
    PlaybackEvents, Scene,
};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type AnimateHook = Box<dyn FnMut(&mut Scene, f64)>;
pub type ColorHook = Box<dyn FnMut(&mut Scene, Rgb)>;

/// Monotonic milliseconds for tweens plus per-frame delta.
pub struct FrameClock {
    epoch: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            epoch: now,
            last: now,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt.as_secs_f32()
    }
}

pub struct FrameContext {
    pub scene: Scene,
    pub camera: Camera,
    pub controller: PlaybackController,
    pub params: LiveParams,
    pub layout: ControlLayout,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub clock: FrameClock,
    /// Recompute the camera aspect from the canvas each frame.
    pub follow_canvas_aspect: bool,
    pub on_animate: Option<AnimateHook>,
    pub on_color_change: Option<ColorHook>,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) {
        let dt_sec = self.clock.tick();

        if let Some(hook) = self.on_animate.as_mut() {
            hook(&mut self.scene, timestamp_ms);
        }

        let events = advance_frame(&mut self.scene, &mut self.controller, self.clock.now_ms());
        log_events(&events);

        self.sync_camera();
        self.present(dt_sec);
    }

    pub fn pointer_down(&mut self) {
        let events = self.controller.pointer_down(self.clock.now_ms());
        log_events(&events);
    }

    pub fn pointer_up(&mut self) {
        let events = self.controller.pointer_up(self.clock.now_ms());
        log_events(&events);
    }

    /// Feed a raw panel value through its control and redraw without advancing the scene.
    pub fn apply_control(&mut self, key: ControlKey, raw: &str) {
        let Some(control) = self.layout.control(key) else {
            return;
        };
        let Some(value) = control.kind.parse(raw) else {
            log::warn!("[panel] rejected {}={:?}", key.id(), raw);
            return;
        };
        match self.params.apply(key, value) {
            Applied::Effects => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.set_effects(&self.params.bloom, &self.params.film);
                }
            }
            Applied::Fov(fov) => self.controller.set_fov(fov),
            Applied::Color(color) => {
                if let Some(hook) = self.on_color_change.as_mut() {
                    hook(&mut self.scene, color);
                }
            }
            Applied::Ignored => return,
        }
        self.sync_camera();
        self.present(0.0);
    }

    fn sync_camera(&mut self) {
        self.camera.fov_degrees = self.controller.fov();
        if self.follow_canvas_aspect {
            self.camera.aspect = dom::canvas_aspect(&self.canvas);
        }
        self.camera.update_projection();
    }

    fn present(&mut self, dt_sec: f32) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        gpu.set_background(self.scene.background);
        match gpu.render(dt_sec, &self.scene, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
            }
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }
}

fn log_events(events: &PlaybackEvents) {
    for e in events {
        log::debug!("[playback] {:?}", e);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        frame_ctx.borrow_mut().frame(timestamp);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
