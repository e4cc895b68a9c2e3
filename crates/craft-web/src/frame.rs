//! Throttled requestAnimationFrame loop.

use crate::canvas::CanvasPainter;
use crate::dom;
use craft_core::{CraftFlow, CursorTrail, ParticleField, TARGET_FPS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The craft-element layer with its dedicated canvas. Absent when the mount
/// point was not found.
pub struct FlowLayer {
    pub flow: Rc<RefCell<CraftFlow>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

/// Everything the per-frame tick touches.
pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub trail: Rc<RefCell<CursorTrail>>,
    pub flow: Option<FlowLayer>,
    pub overlay_canvas: web::HtmlCanvasElement,
    pub overlay_ctx: web::CanvasRenderingContext2d,
    /// Visibility gate for the ambient field.
    pub container: web::Element,
    pub last_tick: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let w = self.overlay_canvas.width() as f64;
        let h = self.overlay_canvas.height() as f64;
        self.overlay_ctx.clear_rect(0.0, 0.0, w, h);

        // Skip field work while the container is far offscreen; the trail is
        // pointer-anchored and keeps fading regardless.
        let (win_w, win_h) = dom::window_inner_size();
        let visible = dom::element_rect(&self.container).near_viewport(win_w, win_h);
        {
            let mut painter = CanvasPainter::new(&self.overlay_ctx);
            if visible {
                let mut field = self.field.borrow_mut();
                field.update();
                field.display(&mut painter);
            }
            let mut trail = self.trail.borrow_mut();
            trail.tick();
            trail.display(&mut painter);
        }

        if let Some(layer) = &self.flow {
            let fw = layer.canvas.width() as f64;
            let fh = layer.canvas.height() as f64;
            layer.ctx.clear_rect(0.0, 0.0, fw, fh);
            let mut painter = CanvasPainter::new(&layer.ctx);
            let mut flow = layer.flow.borrow_mut();
            flow.update();
            flow.display(&mut painter);
        }
    }
}

/// Drive `frame()` from requestAnimationFrame, skipping callbacks that arrive
/// before the target interval has elapsed.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let min_interval = 1.0 / TARGET_FPS;
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut ctx = frame_ctx_tick.borrow_mut();
            let now = Instant::now();
            let dt = now - ctx.last_tick;
            if dt.as_secs_f64() >= min_interval {
                ctx.last_tick = now;
                ctx.frame();
            }
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
