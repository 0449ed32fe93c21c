//! Data-driven game balance
//!
//! Every gameplay constant is exposed here rather than buried in the update
//! code, so hosts (and tests) can rebalance without touching the sim.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Player square sprite size (world units)
    pub player_size: f32,
    /// Horizontal ship speed (units/second)
    pub player_speed: f32,
    /// Hit-box horizontal shrink, fraction of `player_size`
    pub hitbox_inset_x: f32,
    /// Hit-box vertical shrink, fraction of `player_size`
    pub hitbox_inset_y: f32,

    /// Number of walls in the rolling window
    pub wall_count: usize,
    /// Horizontal opening the ship threads through
    pub gap_size: f32,
    /// Vertical extent of each wall band
    pub wall_height: f32,
    /// Steady-state vertical distance between consecutive walls
    pub wall_spacing: f32,
    /// Downward wall speed (units/second)
    pub wall_speed: f32,

    /// Background scroll speed (units/second)
    pub scroll_speed: f32,
    /// Background image height; scroll offset wraps at its negative
    pub background_height: f32,

    /// Game music volume ramp per second during fade-in
    pub music_fade_rate: f32,
    /// Volume at which the fade-in stops
    pub music_target_volume: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            hitbox_inset_x: HITBOX_INSET_X,
            hitbox_inset_y: HITBOX_INSET_Y,
            wall_count: WALL_COUNT,
            gap_size: GAP_SIZE,
            wall_height: WALL_HEIGHT,
            wall_spacing: WALL_SPACING,
            wall_speed: WALL_SPEED,
            scroll_speed: SCROLL_SPEED,
            background_height: BACKGROUND_HEIGHT,
            music_fade_rate: MUSIC_FADE_RATE,
            music_target_volume: MUSIC_TARGET_VOLUME,
        }
    }
}

impl Tuning {
    /// Largest legal `gap_x` for a given world width
    pub fn max_gap_x(&self, world_width: f32) -> f32 {
        (world_width - self.gap_size).max(0.0)
    }
}
