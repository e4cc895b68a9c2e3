//! Decorative craft-element flow layer.
//!
//! A sparse population of rotating icon shapes drifting across the about
//! section on a toroidal surface: crossing any edge teleports the element to
//! the opposite one, no reflection.

use crate::constants::{
    ELEMENT_ROT_SPEED_RANGE, ELEMENT_SIZE_MAX, ELEMENT_SIZE_MIN, ELEMENT_VEL_RANGE, PALETTE,
    SHAPE_ALPHA,
};
use crate::paint::{Painter, Rgba};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// The icon shapes drawn by the flow layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CraftKind {
    Pot,
    Basket,
    Jewelry,
    Fabric,
    WoodCarving,
}

impl CraftKind {
    pub const ALL: [CraftKind; 5] = [
        CraftKind::Pot,
        CraftKind::Basket,
        CraftKind::Jewelry,
        CraftKind::Fabric,
        CraftKind::WoodCarving,
    ];

    /// Draw the icon centered at the origin. Callers translate/rotate first.
    pub fn draw(&self, p: &mut dyn Painter, size: f32) {
        match self {
            CraftKind::Pot => {
                p.fill(Rgba::from_palette(PALETTE[2], SHAPE_ALPHA));
                p.ellipse(0.0, 0.0, size, size * 0.8);
                p.rect(-size / 3.0, -size / 2.0, size / 1.5, -size / 3.0);
            }
            CraftKind::Basket => {
                p.fill(Rgba::from_palette(PALETTE[1], SHAPE_ALPHA));
                p.ellipse(0.0, 0.0, size, size / 2.0);
                p.rect(-size / 2.0, -size / 4.0, size, -size / 2.0);
            }
            CraftKind::Jewelry => {
                p.fill(Rgba::from_palette(PALETTE[3], SHAPE_ALPHA));
                p.circle(0.0, 0.0, size / 2.0);
                for i in 0..8 {
                    let angle = TAU * i as f32 / 8.0;
                    p.circle(
                        angle.cos() * size / 2.0,
                        angle.sin() * size / 2.0,
                        size / 6.0,
                    );
                }
            }
            CraftKind::Fabric => {
                p.fill(Rgba::from_palette(PALETTE[4], SHAPE_ALPHA));
                p.rect(-size / 2.0, -size / 2.0, size, size);
                p.line(-size / 2.0, -size / 4.0, size / 2.0, -size / 4.0);
                p.line(-size / 2.0, 0.0, size / 2.0, 0.0);
                p.line(-size / 2.0, size / 4.0, size / 2.0, size / 4.0);
            }
            CraftKind::WoodCarving => {
                p.fill(Rgba::from_palette(PALETTE[2], SHAPE_ALPHA));
                p.rect(-size / 2.0, -size / 3.0, size, size / 1.5);
                p.rect(-size / 3.0, -size / 2.0, size / 1.5, size);
            }
        }
    }
}

/// A rotating icon drifting across the section.
#[derive(Clone, Debug)]
pub struct CraftElement {
    pub position: Vec2,
    pub velocity: Vec2,
    pub kind: CraftKind,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

/// Fixed-cardinality element population over a wrapped rectangle.
pub struct CraftFlow {
    pub elements: Vec<CraftElement>,
    bounds: Vec2,
}

impl CraftFlow {
    pub fn new(bounds: Vec2, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let elements = (0..count)
            .map(|_| CraftElement {
                position: Vec2::new(
                    rng.gen_range(0.0..bounds.x),
                    rng.gen_range(0.0..bounds.y),
                ),
                velocity: Vec2::new(
                    rng.gen_range(-ELEMENT_VEL_RANGE..ELEMENT_VEL_RANGE),
                    rng.gen_range(-ELEMENT_VEL_RANGE..ELEMENT_VEL_RANGE),
                ),
                kind: *CraftKind::ALL.choose(&mut rng).unwrap_or(&CraftKind::Pot),
                size: rng.gen_range(ELEMENT_SIZE_MIN..ELEMENT_SIZE_MAX),
                rotation: rng.gen_range(0.0..TAU),
                rotation_speed: rng.gen_range(-ELEMENT_ROT_SPEED_RANGE..ELEMENT_ROT_SPEED_RANGE),
            })
            .collect::<Vec<_>>();
        Self { elements, bounds }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Advance one frame: drift, spin, wrap to the opposite edge.
    pub fn update(&mut self) {
        let Vec2 { x: w, y: h } = self.bounds;
        for e in &mut self.elements {
            e.position += e.velocity;
            e.rotation += e.rotation_speed;

            if e.position.x < 0.0 {
                e.position.x = w;
            } else if e.position.x > w {
                e.position.x = 0.0;
            }
            if e.position.y < 0.0 {
                e.position.y = h;
            } else if e.position.y > h {
                e.position.y = 0.0;
            }
        }
    }

    pub fn display(&self, painter: &mut dyn Painter) {
        for e in &self.elements {
            painter.push();
            painter.translate(e.position.x, e.position.y);
            painter.rotate(e.rotation);
            e.kind.draw(painter, e.size);
            painter.pop();
        }
    }
}
