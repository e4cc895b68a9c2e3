//! Pointer and resize wiring for the animation layers.

use crate::dom;
use craft_core::{CursorTrail, ParticleField};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The `.custom-cursor` badge follows the pointer on desktop. On narrow
/// viewports the badge is removed instead and `None` is returned.
pub fn init_custom_cursor(document: &web::Document) -> Option<web::HtmlElement> {
    let el = document.query_selector(".custom-cursor").ok()??;
    let el: web::HtmlElement = el.dyn_into().ok()?;

    let mobile = web::window()
        .and_then(|w| w.match_media("(max-width: 768px)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);
    if mobile {
        el.remove();
        return None;
    }

    // Interactive elements enlarge the badge via a class toggle.
    if let Ok(list) = document
        .query_selector_all("a, button, input, textarea, select, .product-card, .feature-card")
    {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(target) = node.dyn_into::<web::Element>() {
                    let cl = el.class_list();
                    dom::on_event(target.as_ref(), "mouseenter", move |_| {
                        let _ = cl.add_1("hover");
                    });
                    let cl = el.class_list();
                    dom::on_event(target.as_ref(), "mouseleave", move |_| {
                        let _ = cl.remove_1("hover");
                    });
                }
            }
        }
    }

    Some(el)
}

/// Feed pointer movement into the trail and move the cursor badge.
pub fn wire_pointermove(trail: Rc<RefCell<CursorTrail>>, cursor: Option<web::HtmlElement>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        trail.borrow_mut().record(pos);
        if let Some(el) = &cursor {
            let _ = el.style().set_property(
                "transform",
                &format!("translate({}px, {}px)", ev.client_x(), ev.client_y()),
            );
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the overlay canvas and the field bounds in sync with the window.
/// Particle positions are intentionally untouched (they drift back on their
/// own).
pub fn wire_resize(canvas: web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::window_inner_size();
        canvas.set_width(w.max(1.0) as u32);
        canvas.set_height(h.max(1.0) as u32);
        field.borrow_mut().resize(Vec2::new(w, h));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
