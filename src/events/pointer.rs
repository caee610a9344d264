use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press and release on the canvas drive the playback controller.
///
/// Listeners are attached to the canvas only; the panel receives its own events.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    wire_pointerdown(canvas, frame_ctx.clone());
    wire_pointerup(canvas, frame_ctx);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas_capture = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        frame_ctx.borrow_mut().pointer_down();
        log::debug!("[pointer] down id={}", ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas_capture = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        _ = canvas_capture.release_pointer_capture(ev.pointer_id());
        frame_ctx.borrow_mut().pointer_up();
        log::debug!("[pointer] up id={}", ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
