#![cfg(target_arch = "wasm32")]
//! WASM entry point: builds the animation layers and wires the page widgets.

use craft_core::{CraftFlow, CursorTrail, ParticleField, ELEMENT_COUNT, PARTICLE_COUNT};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod contact;
mod dom;
mod events;
mod frame;
mod menu;
mod products;
mod scroll;
mod testimonials;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("craft-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Widgets first so generated product cards exist for the scroll reveals.
    menu::init(&document);
    products::init(&document);
    testimonials::init(&document);
    contact::init(&document);
    scroll::init(&document);

    let (win_w, win_h) = dom::window_inner_size();

    // Full-page overlay hosting the particle field and the cursor trail. The
    // dedicated container is preferred; the body works as a fallback mount.
    let container: web::Element = match document.get_element_by_id("p5-container") {
        Some(el) => el,
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?
            .into(),
    };
    let (overlay_canvas, overlay_ctx) =
        dom::create_overlay_canvas(&document, &container, win_w as u32, win_h as u32, 0, 1.0)
            .ok_or_else(|| anyhow::anyhow!("2d canvas unavailable"))?;

    let field = Rc::new(RefCell::new(ParticleField::new(
        Vec2::new(win_w, win_h),
        PARTICLE_COUNT,
        random_seed(),
    )));
    let trail = Rc::new(RefCell::new(CursorTrail::default()));

    let flow = build_flow_layer(&document);

    let cursor = events::init_custom_cursor(&document);
    events::wire_pointermove(trail.clone(), cursor);
    events::wire_resize(overlay_canvas.clone(), field.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        trail,
        flow,
        overlay_canvas,
        overlay_ctx,
        container,
        last_tick: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Decorative craft flow over the about section. A missing mount point skips
/// the whole layer; nothing is spawned and no canvas is created.
fn build_flow_layer(document: &web::Document) -> Option<frame::FlowLayer> {
    let section = match document.get_element_by_id("about") {
        Some(el) => el,
        None => {
            log::warn!("[flow] #about not found, skipping craft layer");
            return None;
        }
    };
    let html: web::HtmlElement = section.clone().dyn_into().ok()?;
    let w = html.offset_width().max(1) as u32;
    let h = html.offset_height().max(1) as u32;
    let (canvas, ctx) = dom::create_overlay_canvas(document, &section, w, h, 0, 0.1)?;
    let flow = Rc::new(RefCell::new(CraftFlow::new(
        Vec2::new(w as f32, h as f32),
        ELEMENT_COUNT,
        random_seed(),
    )));
    log::info!("[flow] {} elements over {}x{}", ELEMENT_COUNT, w, h);
    Some(frame::FlowLayer { flow, canvas, ctx })
}

/// 64 random bits from the host RNG to seed the simulation RNGs.
fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
