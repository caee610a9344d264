use crate::panel;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_panel_toggle_key(key: &str) -> bool {
    key == "h" || key == "H"
}

pub fn wire_panel_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if ev.repeat() || !is_panel_toggle_key(&ev.key()) {
                return;
            }
            // Typing into a panel field must not hide the panel.
            let from_input = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
                .is_some();
            if from_input {
                return;
            }
            panel::toggle(&doc);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
