//! Run state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::wall::WallField;
use crate::consts::{BUTTON_DROP, BUTTON_HEIGHT, BUTTON_WIDTH};
use crate::tuning::Tuning;

/// Current phase of the run state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the play button
    Menu,
    /// Active run
    Playing,
    /// Run ended; waiting for the play-again button
    GameOver,
}

/// The three motion speeds, zeroed together on game over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speeds {
    /// Horizontal ship speed
    pub player: f32,
    /// Downward wall speed
    pub wall: f32,
    /// Background scroll speed
    pub scroll: f32,
}

impl Speeds {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            player: tuning.player_speed,
            wall: tuning.wall_speed,
            scroll: tuning.scroll_speed,
        }
    }

    /// Freeze all motion (collision response)
    pub fn zero(&mut self) {
        self.player = 0.0;
        self.wall = 0.0;
        self.scroll = 0.0;
    }
}

/// Fire-and-forget cues for the audio/persistence collaborators,
/// drained by the controller after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Play/play-again button pressed
    ButtonPressed,
    /// A run (re)started; menu music should hand over to game music
    RunStarted,
    /// The ship cleared a wall
    WallPassed { score: u32 },
    /// The run's score beat the stored high score; persist it
    NewHighScore(u32),
    /// The ship hit a wall
    RunEnded { score: u32 },
}

/// Complete run state, mutated only inside [`tick`](super::tick::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    /// World dimensions (fixed virtual viewport)
    pub world: Vec2,
    /// Balance parameters for this session
    pub tuning: Tuning,

    /// Ship position (bottom-left of nominal square; y fixed after init)
    pub player_pos: Vec2,
    /// Current horizontal direction
    pub moving_right: bool,
    /// Live motion speeds
    pub speeds: Speeds,

    /// Background scroll offset, wraps at `-background_height`
    pub background_y: f32,

    /// Game music volume during/after fade-in
    pub music_volume: f32,
    /// Whether the fade-in ramp is still active
    pub music_fading_in: bool,

    /// Walls cleared this run
    pub score: u32,
    /// Best score across runs (loaded once at startup)
    pub high_score: u32,

    pub phase: GamePhase,
    pub walls: WallField,

    /// Pending collaborator cues
    pub events: Vec<GameEvent>,

    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session in the menu phase.
    ///
    /// `seed` comes from the host (typically wall-clock millis); tests pass
    /// a fixed value for reproducible gap placement.
    pub fn new(world_width: f32, world_height: f32, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let walls = WallField::new(world_width, world_height, &tuning, &mut rng);
        let world = Vec2::new(world_width, world_height);

        Self {
            player_pos: initial_player_pos(world, &tuning),
            moving_right: true,
            speeds: Speeds::from_tuning(&tuning),
            background_y: 0.0,
            music_volume: 0.0,
            music_fading_in: false,
            score: 0,
            high_score: 0,
            phase: GamePhase::Menu,
            walls,
            events: Vec::new(),
            world,
            tuning,
            rng,
        }
    }

    /// Reset everything a run touches and enter `Playing`.
    ///
    /// Used both for the first start from the menu and for replays from the
    /// game-over screen; calling it twice yields the same state as once.
    pub fn restart(&mut self) {
        self.player_pos = initial_player_pos(self.world, &self.tuning);
        self.moving_right = true;
        self.speeds = Speeds::from_tuning(&self.tuning);
        self.score = 0;
        self.walls = WallField::new(self.world.x, self.world.y, &self.tuning, &mut self.rng);
        self.music_volume = 0.0;
        self.music_fading_in = true;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started (high score {})", self.high_score);
    }

    /// Play/play-again button bounds, shared by the menu and game-over screens
    pub fn play_button(&self) -> Rect {
        Rect::new(
            (self.world.x - BUTTON_WIDTH) / 2.0,
            self.world.y / 2.0 - BUTTON_DROP,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    /// Drain pending collaborator cues
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            background_y: self.background_y,
            walls: self
                .walls
                .walls()
                .iter()
                .map(|w| WallView {
                    left_width: w.gap_x,
                    right_start: w.gap_x + self.tuning.gap_size,
                    y: w.y,
                })
                .collect(),
            player_pos: self.player_pos,
            player_rotation: if self.moving_right {
                -std::f32::consts::FRAC_PI_4
            } else {
                std::f32::consts::FRAC_PI_4
            },
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            play_button: self.play_button(),
        }
    }
}

fn initial_player_pos(world: Vec2, tuning: &Tuning) -> Vec2 {
    // Centered horizontally, a fifth of the way up the screen
    Vec2::new((world.x - tuning.player_size) / 2.0, world.y / 5.0)
}

/// One wall as the renderer needs it: two solid spans and a height
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WallView {
    /// Width of the left solid segment (left edge is 0)
    pub left_width: f32,
    /// X where the right solid segment starts (runs to world width)
    pub right_start: f32,
    /// Vertical position of the band
    pub y: f32,
}

/// Per-frame read-only state for the render collaborator; the core never
/// issues drawing calls itself
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub background_y: f32,
    pub walls: Vec<WallView>,
    pub player_pos: Vec2,
    /// Sprite rotation in radians: -45° moving right, +45° moving left
    pub player_rotation: f32,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub play_button: Rect,
}
