//! `Painter` implementation on a 2D canvas context.

use craft_core::{Painter, Rgba};
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasPainter<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter<'_> {
    fn fill(&mut self, color: Rgba) {
        let css = color.to_css();
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_stroke_style_str(&css);
    }

    fn circle(&mut self, x: f32, y: f32, d: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x as f64, y as f64, (d / 2.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            x as f64,
            y as f64,
            (w / 2.0).abs() as f64,
            (h / 2.0).abs() as f64,
            0.0,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }

    fn push(&mut self) {
        self.ctx.save();
    }

    fn pop(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }
}
