//! Mobile menu wiring.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Open/close handlers for the slide-in menu. Opening locks body scroll;
/// closing (button or any link tap) restores it.
pub fn init(document: &web::Document) {
    let menu = match document.get_element_by_id("mobile-menu") {
        Some(el) => el,
        None => return,
    };

    {
        let doc = document.clone();
        dom::add_click_listener(document, "mobile-menu-button", move || set_open(&doc, true));
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "close-menu-button", move || set_open(&doc, false));
    }

    if let Ok(links) = menu.query_selector_all("a") {
        for i in 0..links.length() {
            if let Some(node) = links.item(i) {
                if let Ok(link) = node.dyn_into::<web::Element>() {
                    let doc = document.clone();
                    dom::on_event(link.as_ref(), "click", move |_| set_open(&doc, false));
                }
            }
        }
    }
}

fn set_open(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id("mobile-menu") {
        let cl = menu.class_list();
        if open {
            let _ = cl.add_1("open");
        } else {
            let _ = cl.remove_1("open");
        }
    }
    if let Some(body) = document.body() {
        let overflow = if open { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", overflow);
    }
}
