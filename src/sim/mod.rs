//! Host-independent simulation
//!
//! All gameplay logic lives here. The module is single-threaded and pure in
//! the sense that it never touches a device: rendering reads a snapshot,
//! audio and persistence consume queued events.

pub mod collision;
pub mod state;
pub mod tick;
pub mod wall;

pub use collision::{Rect, hits_wall, player_hitbox, wall_solid_rects};
pub use state::{GameEvent, GamePhase, GameState, RenderSnapshot, Speeds, WallView};
pub use tick::{TickInput, tick};
pub use wall::{Wall, WallField};
