//! Wall obstacles and the rolling wall window
//!
//! A wall is a full-width horizontal band with one gap. The field keeps a
//! fixed number of walls alive forever: a wall that scrolls off the bottom
//! is recycled above the current topmost wall with a fresh random gap, so
//! the window never allocates after startup.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A single gapped wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    /// Left edge of the gap, in `[0, world_width - gap_size]`
    pub gap_x: f32,
    /// Vertical position of the band's bottom edge (world units, y up)
    pub y: f32,
    /// Set once the player has cleared this wall; reset on recycle
    pub passed: bool,
}

impl Wall {
    pub fn new(gap_x: f32, y: f32) -> Self {
        Self {
            gap_x,
            y,
            passed: false,
        }
    }

    /// Top edge of the band
    pub fn top(&self, wall_height: f32) -> f32 {
        self.y + wall_height
    }

    /// Move down one tick; recycle above `highest_y` once fully off-screen.
    ///
    /// `highest_y` must be the pre-tick maximum across the whole field so a
    /// recycled wall lands strictly above every other wall.
    pub fn advance(
        &mut self,
        dt: f32,
        speed: f32,
        highest_y: f32,
        world_width: f32,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) {
        self.y -= speed * dt;

        if self.y < -tuning.wall_height {
            self.y = highest_y + tuning.wall_spacing;
            self.gap_x = random_gap_x(world_width, tuning, rng);
            self.passed = false;
        }
    }
}

/// Draw a gap offset uniformly over the legal range
pub fn random_gap_x(world_width: f32, tuning: &Tuning, rng: &mut impl Rng) -> f32 {
    let max = tuning.max_gap_x(world_width);
    if max > 0.0 { rng.random_range(0.0..max) } else { 0.0 }
}

/// Fixed-size rolling window of walls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallField {
    walls: Vec<Wall>,
}

impl WallField {
    /// Populate the window: walls staggered upward from the top of the
    /// world, one spacing apart, each with an independent random gap
    pub fn new(world_width: f32, world_height: f32, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let walls = (0..tuning.wall_count)
            .map(|i| {
                let gap_x = random_gap_x(world_width, tuning, rng);
                let y = world_height + i as f32 * tuning.wall_spacing;
                Wall::new(gap_x, y)
            })
            .collect();
        Self { walls }
    }

    /// Advance every wall by one tick, anchoring recycles to the pre-tick
    /// maximum position
    pub fn advance_all(
        &mut self,
        dt: f32,
        speed: f32,
        world_width: f32,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) {
        let highest_y = self
            .walls
            .iter()
            .map(|w| w.y)
            .fold(f32::NEG_INFINITY, f32::max);

        for wall in &mut self.walls {
            wall.advance(dt, speed, highest_y, world_width, tuning, rng);
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn walls_mut(&mut self) -> &mut [Wall] {
        &mut self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}
