//! Axis-aligned collision detection
//!
//! The ship's sprite rotates ±45° while it moves, so the collision test uses
//! a rectangle shrunk from the nominal square bounds; the tight box would
//! read as unfair hits against the rotated silhouette.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::wall::Wall;
use crate::tuning::Tuning;

/// Axis-aligned rectangle, bottom-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Whether a point lies inside (inclusive edges, for button hit-tests)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// The ship's shrunk hit-box, insets split evenly per edge
pub fn player_hitbox(player_pos: Vec2, tuning: &Tuning) -> Rect {
    let pad_x = tuning.player_size * tuning.hitbox_inset_x;
    let pad_y = tuning.player_size * tuning.hitbox_inset_y;

    Rect::new(
        player_pos.x + pad_x / 2.0,
        player_pos.y + pad_y / 2.0,
        tuning.player_size - pad_x,
        tuning.player_size - pad_y,
    )
}

/// The two solid segments of a wall: everything outside the gap
pub fn wall_solid_rects(wall: &Wall, world_width: f32, tuning: &Tuning) -> [Rect; 2] {
    let right_start = wall.gap_x + tuning.gap_size;
    [
        Rect::new(0.0, wall.y, wall.gap_x, tuning.wall_height),
        Rect::new(
            right_start,
            wall.y,
            world_width - right_start,
            tuning.wall_height,
        ),
    ]
}

/// Whether the hit-box intersects either solid segment of the wall
pub fn hits_wall(hitbox: &Rect, wall: &Wall, world_width: f32, tuning: &Tuning) -> bool {
    wall_solid_rects(wall, world_width, tuning)
        .iter()
        .any(|solid| hitbox.overlaps(solid))
}
