//! Triangle Dash entry point
//!
//! Headless native host: drives the RunController at 60 Hz with an
//! autopilot that steers the ship toward the nearest gap, logging the
//! audio cues it would have played. Real hosts replace the sink and the
//! input synthesis with a windowing/audio layer.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use triangle_dash::audio::{AudioSink, MusicTrack, SoundEffect};
use triangle_dash::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use triangle_dash::persistence::PrefsFile;
use triangle_dash::sim::{GamePhase, GameState, TickInput};
use triangle_dash::{RunController, Settings, Tuning};

/// Sink that logs every cue instead of playing it
#[derive(Default)]
struct ConsoleAudio {
    playing: [bool; 2],
}

impl ConsoleAudio {
    fn slot(track: MusicTrack) -> usize {
        match track {
            MusicTrack::Menu => 0,
            MusicTrack::Game => 1,
        }
    }
}

impl AudioSink for ConsoleAudio {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sound {:?} at {:.2}", effect, volume);
    }
    fn music_play(&mut self, track: MusicTrack) {
        log::debug!("music {:?} play", track);
        self.playing[Self::slot(track)] = true;
    }
    fn music_stop(&mut self, track: MusicTrack) {
        log::debug!("music {:?} stop", track);
        self.playing[Self::slot(track)] = false;
    }
    fn music_set_volume(&mut self, _track: MusicTrack, _volume: f32) {}
    fn music_is_playing(&self, track: MusicTrack) -> bool {
        self.playing[Self::slot(track)]
    }
}

/// Toggle toward the gap of the lowest wall still ahead of the ship
fn autopilot(state: &GameState) -> TickInput {
    let tuning = &state.tuning;
    let target = state
        .walls
        .walls()
        .iter()
        .filter(|w| w.top(tuning.wall_height) >= state.player_pos.y)
        .min_by(|a, b| a.y.total_cmp(&b.y));

    let Some(wall) = target else {
        return TickInput::default();
    };

    let ship_center = state.player_pos.x + tuning.player_size / 2.0;
    let gap_center = wall.gap_x + tuning.gap_size / 2.0;
    let want_right = ship_center < gap_center;

    TickInput {
        toggle_direction: want_right != state.moving_right,
        ..TickInput::default()
    }
}

fn main() {
    env_logger::init();
    log::info!("Triangle Dash (headless) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let store = PrefsFile::new("triangle_dash_prefs.json");
    let mut controller = RunController::new(
        WORLD_WIDTH,
        WORLD_HEIGHT,
        Tuning::default(),
        Settings::default(),
        seed,
        ConsoleAudio::default(),
        store,
    );

    let dt = 1.0 / 60.0;
    let mut runs = 0;
    for _ in 0..20_000 {
        let input = match controller.state().phase {
            GamePhase::Menu | GamePhase::GameOver => {
                if runs >= 3 {
                    break;
                }
                runs += 1;
                let button = controller.state().play_button();
                TickInput {
                    pointer: Some(Vec2::new(
                        button.x + button.w / 2.0,
                        button.y + button.h / 2.0,
                    )),
                    ..TickInput::default()
                }
            }
            GamePhase::Playing => autopilot(controller.state()),
        };

        controller.tick(dt, &input);

        if controller.state().phase == GamePhase::GameOver {
            log::info!(
                "Run {} over: score {}, high score {}",
                runs,
                controller.state().score,
                controller.state().high_score
            );
        }
    }

    controller.shutdown();
    log::info!("Done after {} runs", runs);
}
