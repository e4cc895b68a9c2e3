//! Pointer trail effect.
//!
//! Every pointer-move sample appends a marker whose size scales with the
//! instantaneous pointer speed; the render tick fades the markers out. Unlike
//! the agent populations this collection is dynamic, but bounded: past the
//! maximum length the oldest point is evicted first.

use crate::constants::{
    PALETTE, TRAIL_ALPHA_FADE_STEP, TRAIL_ALPHA_INITIAL, TRAIL_MAX_POINTS, TRAIL_SIZE_MAX,
    TRAIL_SIZE_MIN, TRAIL_SPEED_MAX,
};
use crate::math::map_range;
use crate::paint::{Painter, Rgba};
use glam::Vec2;
use std::collections::VecDeque;

/// One fading marker. Alive while `alpha > 0`; the transition to removal is
/// one-way and driven solely by the render tick.
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub position: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// Bounded FIFO of recent pointer positions.
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    prev: Option<Vec2>,
    max_points: usize,
}

impl CursorTrail {
    pub fn new(max_points: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_points + 1),
            prev: None,
            max_points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest first.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Record a pointer-move sample. Speed is the distance covered since the
    /// previous sample, clamped and mapped linearly onto the size range.
    pub fn record(&mut self, position: Vec2) {
        let speed = self.prev.map(|p| p.distance(position)).unwrap_or(0.0);
        let size = map_range(
            speed.clamp(0.0, TRAIL_SPEED_MAX),
            0.0,
            TRAIL_SPEED_MAX,
            TRAIL_SIZE_MIN,
            TRAIL_SIZE_MAX,
        );
        self.points.push_back(TrailPoint {
            position,
            size,
            alpha: TRAIL_ALPHA_INITIAL,
        });
        if self.points.len() > self.max_points {
            self.points.pop_front();
        }
        self.prev = Some(position);
    }

    /// Fade every point one step and drop the ones that reached zero.
    pub fn tick(&mut self) {
        for pt in &mut self.points {
            pt.alpha -= TRAIL_ALPHA_FADE_STEP;
        }
        self.points.retain(|pt| pt.alpha > 0.0);
    }

    pub fn display(&self, painter: &mut dyn Painter) {
        for pt in &self.points {
            painter.fill(Rgba::from_palette(PALETTE[0], pt.alpha));
            painter.circle(pt.position.x, pt.position.y, pt.size);
        }
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new(TRAIL_MAX_POINTS)
    }
}
