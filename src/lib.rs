//! Triangle Dash - a single-screen arcade game core
//!
//! A triangular ship auto-bounces left/right across a fixed-width world while
//! a stream of gapped walls scrolls downward; the player toggles direction to
//! thread the ship through each gap. Hitting a wall ends the run.
//!
//! Core modules:
//! - `sim`: Host-independent simulation (movement, wall lifecycle, collisions)
//! - `run`: RunController wiring the sim to its capability collaborators
//! - `audio`: Sound/music capability interface
//! - `persistence`: High score storage capability
//! - `platform`: Physical/world coordinate mapping
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod persistence;
pub mod platform;
pub mod run;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use run::RunController;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Longest frame delta the controller will feed the simulation, in
    /// seconds. Protects against huge catch-up steps after a stall.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World (virtual viewport) dimensions - portrait phone aspect
    pub const WORLD_WIDTH: f32 = 720.0;
    pub const WORLD_HEIGHT: f32 = 1280.0;

    /// Player (triangle ship) defaults
    pub const PLAYER_SIZE: f32 = 75.0;
    pub const PLAYER_SPEED: f32 = 400.0;
    /// Hit-box shrinkage: the sprite rotates ±45° in motion, so the nominal
    /// square bounds would collide unfairly at the corners.
    pub const HITBOX_INSET_X: f32 = 0.2;
    pub const HITBOX_INSET_Y: f32 = 0.3;

    /// Wall defaults
    pub const WALL_COUNT: usize = 5;
    pub const GAP_SIZE: f32 = 235.0;
    pub const WALL_HEIGHT: f32 = 75.0;
    pub const WALL_SPACING: f32 = 600.0;
    pub const WALL_SPEED: f32 = 500.0;

    /// Background scroll
    pub const SCROLL_SPEED: f32 = 100.0;
    pub const BACKGROUND_HEIGHT: f32 = 1920.0;

    /// Game music fades in from silence when a run starts
    pub const MUSIC_FADE_RATE: f32 = 0.2;
    pub const MUSIC_TARGET_VOLUME: f32 = 0.5;
    /// Menu track loops at a fixed low volume
    pub const MENU_MUSIC_VOLUME: f32 = 0.2;

    /// Play-again button (menu and game-over screens)
    pub const BUTTON_WIDTH: f32 = 300.0;
    pub const BUTTON_HEIGHT: f32 = 100.0;
    /// Vertical offset of the button below the world's vertical center
    pub const BUTTON_DROP: f32 = 260.0;
}
