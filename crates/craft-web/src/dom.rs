//! Small DOM helpers shared by the wiring modules.

use craft_core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_inner_size() -> (f32, f32) {
    if let Some(w) = web::window() {
        let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (iw as f32, ih as f32)
    } else {
        (0.0, 0.0)
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a listener to an element already in hand (per-card, per-dot, form).
pub fn on_event(target: &web::EventTarget, kind: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Bounding rect of an element, in viewport coordinates.
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        right: r.right() as f32,
        bottom: r.bottom() as f32,
    }
}

/// Create an absolutely-positioned canvas inside `parent` and grab its 2D
/// context. The canvas never intercepts pointer events.
pub fn create_overlay_canvas(
    document: &web::Document,
    parent: &web::Element,
    width: u32,
    height: u32,
    z_index: i32,
    opacity: f32,
) -> Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
    let style = format!(
        "position:absolute;top:0;left:0;z-index:{z_index};opacity:{opacity};pointer-events:none"
    );
    let _ = canvas.set_attribute("style", &style);
    parent.append_child(&canvas).ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, ctx))
}
