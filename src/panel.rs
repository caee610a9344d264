use crate::core::{Control, ControlKind, ControlLayout, LiveParams};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PANEL_ID: &str = "control-panel";

const PANEL_STYLE: &str = "position:fixed;top:8px;right:8px;width:260px;max-height:95vh;\
overflow:auto;color:#cfe7ff;font:12px system-ui;background:rgba(10,14,24,0.85);\
padding:6px 10px;border-radius:6px;border:1px solid rgba(80,110,150,0.35);z-index:10";
const ROW_STYLE: &str = "display:flex;align-items:center;gap:6px;margin:3px 0";
const LABEL_STYLE: &str = "flex:0 0 96px";
const READOUT_STYLE: &str = "flex:0 0 36px;text-align:right;font-variant-numeric:tabular-nums";

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{tag}> has unexpected type"))
}

/// Build the control panel from `layout`, one fieldset per group, and append it to `<body>`.
///
/// Replaces any panel left by an earlier call.
pub fn build(
    document: &web::Document,
    layout: &ControlLayout,
    params: &LiveParams,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<()> {
    if let Some(old) = document.get_element_by_id(PANEL_ID) {
        old.remove();
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let root: web::HtmlElement = create(document, "div")?;
    root.set_id(PANEL_ID);
    _ = root.set_attribute("style", PANEL_STYLE);

    for group in &layout.groups {
        let fieldset: web::HtmlElement = create(document, "fieldset")?;
        _ = fieldset.set_attribute("style", "border:1px solid rgba(80,110,150,0.35);margin:4px 0");
        let legend: web::HtmlElement = create(document, "legend")?;
        legend.set_text_content(Some(&group.title));
        fieldset.append_child(&legend).map_err(js_err)?;
        for control in &group.controls {
            let row = build_row(document, control, params, frame_ctx.clone())?;
            fieldset.append_child(&row).map_err(js_err)?;
        }
        root.append_child(&fieldset).map_err(js_err)?;
    }

    body.append_child(&root).map_err(js_err)?;
    log::info!("[panel] groups: {}", layout.titles().join(", "));
    Ok(())
}

fn build_row(
    document: &web::Document,
    control: &Control,
    params: &LiveParams,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<web::HtmlElement> {
    let row: web::HtmlElement = create(document, "div")?;
    _ = row.set_attribute("style", ROW_STYLE);
    let label: web::HtmlElement = create(document, "span")?;
    label.set_text_content(Some(control.label));
    _ = label.set_attribute("style", LABEL_STYLE);
    row.append_child(&label).map_err(js_err)?;

    let key = control.key;
    let current = control.kind.format(params.value_of(key));
    let dom_id = format!("{PANEL_ID}-{}", key.id());

    match &control.kind {
        ControlKind::Slider { min, max, step } => {
            let input: web::HtmlInputElement = create(document, "input")?;
            input.set_type("range");
            input.set_id(&dom_id);
            input.set_min(&min.to_string());
            input.set_max(&max.to_string());
            input.set_step(&step.to_string());
            input.set_value(&current);
            _ = input.set_attribute("style", "flex:1");
            let readout: web::HtmlElement = create(document, "span")?;
            readout.set_text_content(Some(&current));
            _ = readout.set_attribute("style", READOUT_STYLE);
            row.append_child(&input).map_err(js_err)?;
            row.append_child(&readout).map_err(js_err)?;

            let input_cb = input.clone();
            listen(&input, "input", move || {
                let raw = input_cb.value();
                readout.set_text_content(Some(&raw));
                frame_ctx.borrow_mut().apply_control(key, &raw);
            });
        }
        ControlKind::Select { options } => {
            let select: web::HtmlSelectElement = create(document, "select")?;
            select.set_id(&dom_id);
            _ = select.set_attribute("style", "flex:1");
            for (i, text) in options.iter().enumerate() {
                let opt = web::HtmlOptionElement::new_with_text_and_value(text, &i.to_string())
                    .map_err(js_err)?;
                select.append_child(&opt).map_err(js_err)?;
            }
            select.set_value(&current);
            row.append_child(&select).map_err(js_err)?;

            let select_cb = select.clone();
            listen(&select, "change", move || {
                frame_ctx.borrow_mut().apply_control(key, &select_cb.value());
            });
        }
        ControlKind::Color => {
            let input: web::HtmlInputElement = create(document, "input")?;
            input.set_type("color");
            input.set_id(&dom_id);
            input.set_value(&current);
            row.append_child(&input).map_err(js_err)?;

            let input_cb = input.clone();
            listen(&input, "input", move || {
                frame_ctx.borrow_mut().apply_control(key, &input_cb.value());
            });
        }
    }
    Ok(row)
}

fn listen(target: &web::EventTarget, event: &str, mut f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| f()) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", PANEL_STYLE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
