//! Scroll-driven behaviors: back-to-top button, reveal animations, smooth
//! anchor scrolling and the hero intro.

use crate::dom;
use craft_core::{BACK_TO_TOP_THRESHOLD, HERO_INTRO_DELAY_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const REVEAL_SELECTOR: &str = ".feature-card, .product-card, .process-step";

pub fn init(document: &web::Document) {
    wire_back_to_top(document);
    wire_reveals(document);
    wire_smooth_anchors(document);
    start_hero_intro(document);
}

fn wire_back_to_top(document: &web::Document) {
    let button = match document.get_element_by_id("back-to-top") {
        Some(el) => el,
        None => return,
    };

    let btn = button.clone();
    let closure = Closure::wrap(Box::new(move || {
        let offset = web::window()
            .map(|w| w.page_y_offset().unwrap_or(0.0))
            .unwrap_or(0.0);
        let cl = btn.class_list();
        if offset > BACK_TO_TOP_THRESHOLD {
            let _ = cl.remove_2("opacity-0", "invisible");
            let _ = cl.add_2("opacity-100", "visible");
        } else {
            let _ = cl.add_2("opacity-0", "invisible");
            let _ = cl.remove_2("opacity-100", "visible");
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    dom::on_event(button.as_ref(), "click", move |_| {
        if let Some(window) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    });
}

/// Cards start transparent and fade in the first time they fully enter the
/// viewport.
fn wire_reveals(document: &web::Document) {
    let targets = match document.query_selector_all(REVEAL_SELECTOR) {
        Ok(t) => t,
        Err(_) => return,
    };
    for i in 0..targets.length() {
        if let Some(node) = targets.item(i) {
            if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                let _ = el.style().set_property("opacity", "0");
            }
        }
    }

    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (win_w, win_h) = dom::window_inner_size();
        if let Ok(targets) = doc.query_selector_all(REVEAL_SELECTOR) {
            for i in 0..targets.length() {
                if let Some(node) = targets.item(i) {
                    if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                        let hidden = el
                            .style()
                            .get_property_value("opacity")
                            .map(|v| v == "0")
                            .unwrap_or(false);
                        if hidden && dom::element_rect(el.as_ref()).fully_visible(win_w, win_h) {
                            let _ = el.style().set_property("opacity", "1");
                            let cl = el.class_list();
                            let _ = cl.add_2("transition-all", "duration-500");
                            let _ = cl.add_2("transform", "translate-y-0");
                            let _ = cl.remove_2("opacity-0", "translate-y-4");
                        }
                    }
                }
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// In-page anchors scroll smoothly instead of jumping.
fn wire_smooth_anchors(document: &web::Document) {
    let anchors = match document.query_selector_all(r##"a[href^="#"]"##) {
        Ok(a) => a,
        Err(_) => return,
    };
    for i in 0..anchors.length() {
        if let Some(node) = anchors.item(i) {
            if let Ok(anchor) = node.dyn_into::<web::Element>() {
                let doc = document.clone();
                let a = anchor.clone();
                dom::on_event(anchor.as_ref(), "click", move |ev| {
                    if let Some(href) = a.get_attribute("href") {
                        if let Ok(Some(target)) = doc.query_selector(&href) {
                            ev.prevent_default();
                            let opts = web::ScrollIntoViewOptions::new();
                            opts.set_behavior(web::ScrollBehavior::Smooth);
                            target.scroll_into_view_with_scroll_into_view_options(&opts);
                        }
                    }
                });
            }
        }
    }
}

fn start_hero_intro(document: &web::Document) {
    let hero = match document.get_element_by_id("hero") {
        Some(el) => el,
        None => return,
    };
    let hero: web::HtmlElement = match hero.dyn_into() {
        Ok(el) => el,
        Err(_) => return,
    };
    let closure = Closure::wrap(Box::new(move || {
        let _ = hero.style().set_property("opacity", "1");
        let _ = hero.style().set_property("transform", "translateY(0)");
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            HERO_INTRO_DELAY_MS,
        );
    }
    closure.forget();
}
