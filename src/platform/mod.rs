//! Platform coordinate mapping
//!
//! The sim works in a fixed virtual world (720x1280). Hosts report raw
//! pointer coordinates in physical pixels with a top-left origin; this
//! module maps them into world space with fit scaling, the same projection
//! the renderer is expected to use.

use glam::Vec2;

/// Fit-scaled viewport: fixed world size, variable physical size
#[derive(Debug, Clone)]
pub struct Viewport {
    world: Vec2,
    physical: Vec2,
}

impl Viewport {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        Self {
            world: Vec2::new(world_width, world_height),
            physical: Vec2::new(world_width, world_height),
        }
    }

    /// Record a new physical surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.physical = Vec2::new(width, height);
        }
    }

    pub fn world_width(&self) -> f32 {
        self.world.x
    }

    pub fn world_height(&self) -> f32 {
        self.world.y
    }

    /// Map a physical pointer position (top-left origin, y down) to world
    /// coordinates (bottom-left origin, y up)
    pub fn to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            x * (self.world.x / self.physical.x),
            (self.physical.y - y) * (self.world.y / self.physical.y),
        )
    }
}
