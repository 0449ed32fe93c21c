//! End-to-end runs through the RunController: state machine, audio cue
//! sequencing and high score persistence.

use glam::Vec2;

use triangle_dash::audio::{AudioSink, MusicTrack, SoundEffect};
use triangle_dash::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use triangle_dash::persistence::MemoryStore;
use triangle_dash::sim::{GamePhase, TickInput};
use triangle_dash::{RunController, Settings, Tuning};

/// Audio sink that records every call for assertions
#[derive(Debug, Default)]
struct RecordingAudio {
    sounds: Vec<(SoundEffect, f32)>,
    calls: Vec<String>,
    menu_playing: bool,
    game_playing: bool,
}

impl AudioSink for RecordingAudio {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        self.sounds.push((effect, volume));
        self.calls.push(format!("sound {effect:?}"));
    }

    fn music_play(&mut self, track: MusicTrack) {
        self.calls.push(format!("play {track:?}"));
        match track {
            MusicTrack::Menu => self.menu_playing = true,
            MusicTrack::Game => self.game_playing = true,
        }
    }

    fn music_stop(&mut self, track: MusicTrack) {
        self.calls.push(format!("stop {track:?}"));
        match track {
            MusicTrack::Menu => self.menu_playing = false,
            MusicTrack::Game => self.game_playing = false,
        }
    }

    fn music_set_volume(&mut self, _track: MusicTrack, _volume: f32) {}

    fn music_is_playing(&self, track: MusicTrack) -> bool {
        match track {
            MusicTrack::Menu => self.menu_playing,
            MusicTrack::Game => self.game_playing,
        }
    }
}

fn new_controller(high_score: u32) -> RunController<RecordingAudio, MemoryStore> {
    RunController::new(
        WORLD_WIDTH,
        WORLD_HEIGHT,
        Tuning::default(),
        Settings::default(),
        42,
        RecordingAudio::default(),
        MemoryStore::new(high_score),
    )
}

fn press_play(controller: &mut RunController<RecordingAudio, MemoryStore>) {
    let button = controller.state().play_button();
    let input = TickInput {
        pointer: Some(Vec2::new(button.x + button.w / 2.0, button.y + button.h / 2.0)),
        ..TickInput::default()
    };
    controller.tick(1.0 / 60.0, &input);
}

/// Park a solid wall on the ship so the next tick collides
fn force_collision(controller: &mut RunController<RecordingAudio, MemoryStore>) {
    let player_pos = controller.state().player_pos;
    let state = controller.state_mut();
    state.speeds.wall = 0.0;
    let wall = &mut state.walls.walls_mut()[0];
    wall.y = player_pos.y;
    // Gap on the far side of the world from the ship
    wall.gap_x = if player_pos.x < WORLD_WIDTH / 2.0 {
        400.0
    } else {
        0.0
    };
    wall.passed = true;

    controller.tick(1.0 / 60.0, &TickInput::default());
}

#[test]
fn startup_loads_high_score_and_plays_menu_music() {
    let controller = new_controller(11);

    assert_eq!(controller.state().phase, GamePhase::Menu);
    assert_eq!(controller.state().high_score, 11);
    assert!(controller.audio().music_is_playing(MusicTrack::Menu));
    assert!(!controller.audio().music_is_playing(MusicTrack::Game));
}

#[test]
fn play_button_swaps_menu_music_for_game_music() {
    let mut controller = new_controller(0);
    press_play(&mut controller);

    assert_eq!(controller.state().phase, GamePhase::Playing);
    assert!(!controller.audio().music_is_playing(MusicTrack::Menu));
    assert!(controller.audio().music_is_playing(MusicTrack::Game));
    assert!(
        controller
            .audio()
            .sounds
            .iter()
            .any(|(e, _)| *e == SoundEffect::ButtonClick)
    );
    // Menu track started at init, then the click and handover in order
    assert_eq!(
        controller.audio().calls,
        ["play Menu", "sound ButtonClick", "stop Menu", "play Game"]
    );
}

#[test]
fn collision_ends_run_with_death_cue_and_music_swap() {
    let mut controller = new_controller(0);
    press_play(&mut controller);
    force_collision(&mut controller);

    assert_eq!(controller.state().phase, GamePhase::GameOver);
    assert_eq!(controller.state().speeds.player, 0.0);
    assert!(
        controller
            .audio()
            .sounds
            .iter()
            .any(|(e, _)| *e == SoundEffect::Death)
    );
    assert!(!controller.audio().music_is_playing(MusicTrack::Game));
    assert!(controller.audio().music_is_playing(MusicTrack::Menu));
}

#[test]
fn beating_the_high_score_saves_exactly_once() {
    let mut controller = new_controller(5);
    press_play(&mut controller);
    controller.state_mut().score = 10;
    force_collision(&mut controller);

    assert_eq!(controller.state().high_score, 10);
    assert_eq!(controller.store().high_score, 10);
    assert_eq!(controller.store().save_count, 1);

    // A worse follow-up run must not touch the store
    press_play(&mut controller);
    force_collision(&mut controller);
    assert_eq!(controller.store().save_count, 1);
    assert_eq!(controller.state().high_score, 10);
}

#[test]
fn losing_run_never_saves() {
    let mut controller = new_controller(20);
    press_play(&mut controller);
    controller.state_mut().score = 3;
    force_collision(&mut controller);

    assert_eq!(controller.state().high_score, 20);
    assert_eq!(controller.store().save_count, 0);
}

#[test]
fn restart_after_game_over_resets_the_run() {
    let mut controller = new_controller(0);
    press_play(&mut controller);
    controller.state_mut().score = 4;
    force_collision(&mut controller);
    assert_eq!(controller.state().phase, GamePhase::GameOver);

    press_play(&mut controller);
    let state = controller.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert!(state.speeds.player > 0.0);
    assert!(state.moving_right);
    assert_eq!(state.walls.len(), state.tuning.wall_count);
    assert!(controller.audio().music_is_playing(MusicTrack::Game));
}

#[test]
fn high_score_survives_ticking_and_never_decreases() {
    let mut controller = new_controller(7);
    press_play(&mut controller);

    let mut last = controller.state().high_score;
    for _ in 0..240 {
        controller.tick(1.0 / 60.0, &TickInput::default());
        assert!(controller.state().high_score >= last);
        last = controller.state().high_score;
    }
}

#[test]
fn snapshot_exposes_renderer_inputs() {
    let mut controller = new_controller(9);
    press_play(&mut controller);

    let snap = controller.snapshot();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.walls.len(), controller.state().tuning.wall_count);
    assert_eq!(snap.high_score, 9);
    let gap_size = controller.state().tuning.gap_size;
    for wall in &snap.walls {
        assert!((wall.right_start - wall.left_width - gap_size).abs() < 1e-3);
    }
    // Moving right renders the ship tilted clockwise
    assert!(snap.player_rotation < 0.0);
}

#[test]
fn resize_remaps_pointer_coordinates() {
    let mut controller = new_controller(0);
    controller.on_resize(360.0, 640.0);

    // Physical pixel in the middle of the half-size surface maps to the
    // world's play-button area
    let button = controller.state().play_button();
    let world = controller
        .viewport()
        .to_world(180.0, 640.0 - (button.y + button.h / 2.0) / 2.0);
    assert!(button.contains(world));
}

#[test]
fn shutdown_stops_all_music() {
    let mut controller = new_controller(0);
    press_play(&mut controller);
    controller.shutdown();

    assert!(!controller.audio().music_is_playing(MusicTrack::Menu));
    assert!(!controller.audio().music_is_playing(MusicTrack::Game));
}
