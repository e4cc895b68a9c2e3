//! Testimonial carousel wiring.

use crate::dom;
use craft_core::{SliderState, SLIDER_AUTO_ADVANCE_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    let track = document.query_selector(".testimonial-slider .flex").ok().flatten();
    let slides = document.query_selector_all(".testimonial-slide").ok();
    let prev = document.get_element_by_id("prev-testimonial");
    let next = document.get_element_by_id("next-testimonial");
    let dots = document.query_selector_all(".testimonial-dot").ok();

    let (track, slides, dots) = match (track, slides, prev.as_ref(), next.as_ref(), dots) {
        (Some(t), Some(s), Some(_), Some(_), Some(d)) if s.length() > 0 && d.length() > 0 => {
            (t, s, d)
        }
        _ => {
            log::warn!("[testimonials] slider elements not found");
            return;
        }
    };

    let state = Rc::new(RefCell::new(SliderState::new(slides.length() as usize)));
    {
        let (w, _) = dom::window_inner_size();
        state.borrow_mut().set_viewport_width(w);
    }
    apply(document, &track, &state.borrow());

    // Arrow buttons
    {
        let doc = document.clone();
        let track_c = track.clone();
        let state_c = state.clone();
        dom::add_click_listener(document, "next-testimonial", move || {
            state_c.borrow_mut().next();
            apply(&doc, &track_c, &state_c.borrow());
        });
    }
    {
        let doc = document.clone();
        let track_c = track.clone();
        let state_c = state.clone();
        dom::add_click_listener(document, "prev-testimonial", move || {
            state_c.borrow_mut().prev();
            apply(&doc, &track_c, &state_c.borrow());
        });
    }

    // Dots jump straight to a slide
    for i in 0..dots.length() {
        if let Some(node) = dots.item(i) {
            if let Ok(dot) = node.dyn_into::<web::Element>() {
                let doc = document.clone();
                let track_c = track.clone();
                let state_c = state.clone();
                let index = i as usize;
                dom::on_event(dot.as_ref(), "click", move |_| {
                    state_c.borrow_mut().goto(index);
                    apply(&doc, &track_c, &state_c.borrow());
                });
            }
        }
    }

    // Slides-per-view follows the viewport
    {
        let doc = document.clone();
        let track_c = track.clone();
        let state_c = state.clone();
        let closure = Closure::wrap(Box::new(move || {
            let (w, _) = dom::window_inner_size();
            state_c.borrow_mut().set_viewport_width(w);
            apply(&doc, &track_c, &state_c.borrow());
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // Auto-advance, paused while the pointer is over the track
    let interval: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    *interval.borrow_mut() = schedule_auto_advance(document, &track, &state);
    {
        let interval_c = interval.clone();
        dom::on_event(track.as_ref(), "mouseenter", move |_| {
            if let (Some(window), Some(id)) = (web::window(), interval_c.borrow_mut().take()) {
                window.clear_interval_with_handle(id);
            }
        });
    }
    {
        let doc = document.clone();
        let track_c = track.clone();
        let state_c = state.clone();
        let interval_c = interval.clone();
        dom::on_event(track.as_ref(), "mouseleave", move |_| {
            let mut slot = interval_c.borrow_mut();
            if slot.is_none() {
                *slot = schedule_auto_advance(&doc, &track_c, &state_c);
            }
        });
    }
}

fn schedule_auto_advance(
    document: &web::Document,
    track: &web::Element,
    state: &Rc<RefCell<SliderState>>,
) -> Option<i32> {
    let window = web::window()?;
    let doc = document.clone();
    let track_c = track.clone();
    let state_c = state.clone();
    let closure = Closure::wrap(Box::new(move || {
        state_c.borrow_mut().next();
        apply(&doc, &track_c, &state_c.borrow());
    }) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SLIDER_AUTO_ADVANCE_MS,
        )
        .ok();
    closure.forget();
    id
}

/// Push the current state into the DOM: track transform plus dot highlight.
fn apply(document: &web::Document, track: &web::Element, state: &SliderState) {
    if let Ok(el) = track.clone().dyn_into::<web::HtmlElement>() {
        let _ = el
            .style()
            .set_property("transform", &format!("translateX(-{}%)", state.offset_pct()));
    }
    if let Ok(dots) = document.query_selector_all(".testimonial-dot") {
        for i in 0..dots.length() {
            if let Some(node) = dots.item(i) {
                if let Ok(dot) = node.dyn_into::<web::Element>() {
                    let cl = dot.class_list();
                    if i as usize == state.current() {
                        let _ = cl.add_1("bg-craft-amber");
                        let _ = cl.remove_1("bg-gray-300");
                    } else {
                        let _ = cl.remove_1("bg-craft-amber");
                        let _ = cl.add_1("bg-gray-300");
                    }
                }
            }
        }
    }
}
