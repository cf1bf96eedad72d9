//! Axis-aligned box geometry shared by paddle, ball and bricks
//!
//! Every entity is a center point plus half extents. Overlap is strict on
//! both axes, so boxes that merely touch do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{XMAX, XMIN, YMAX, YMIN};

/// Half sizes of an entity, derived once from its visual footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub half_width: f32,
    pub half_height: f32,
}

impl Extent {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// Derive half extents from a full (width, height) footprint
    pub fn from_size((width, height): (f32, f32)) -> Self {
        Self::new(width / 2.0, height / 2.0)
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }

    /// Combined extent of two boxes (the distance at which their centers touch)
    #[inline]
    pub fn sum(&self, other: &Extent) -> Extent {
        Extent::new(
            self.half_width + other.half_width,
            self.half_height + other.half_height,
        )
    }
}

/// Rectangular arena bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            xmin: XMIN,
            xmax: XMAX,
            ymin: YMIN,
            ymax: YMAX,
        }
    }
}

impl Playfield {
    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    pub fn center_x(&self) -> f32 {
        (self.xmin + self.xmax) / 2.0
    }
}

/// Strict AABB overlap test between two centered boxes
#[inline]
pub fn boxes_overlap(a_pos: Vec2, a: &Extent, b_pos: Vec2, b: &Extent) -> bool {
    let reach = a.sum(b);
    (a_pos.x - b_pos.x).abs() < reach.half_width && (a_pos.y - b_pos.y).abs() < reach.half_height
}

/// Per-axis penetration of two overlapping boxes
///
/// Positive on both axes exactly when [`boxes_overlap`] holds.
#[inline]
pub fn penetration(a_pos: Vec2, a: &Extent, b_pos: Vec2, b: &Extent) -> Vec2 {
    let reach = a.sum(b);
    let delta = (a_pos - b_pos).abs();
    Vec2::new(reach.half_width - delta.x, reach.half_height - delta.y)
}

/// Which velocity component a box collision reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Axis of least penetration; ties go to Y
#[inline]
pub fn reflection_axis(pen: Vec2) -> Axis {
    if pen.x < pen.y { Axis::X } else { Axis::Y }
}
