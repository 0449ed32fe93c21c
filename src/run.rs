//! Run controller: the core's lifecycle object
//!
//! Owns the simulation state plus the capability collaborators (audio sink,
//! score store) and exposes the entry points a host adapter drives:
//! [`RunController::new`], [`tick`](RunController::tick),
//! [`on_resize`](RunController::on_resize), [`shutdown`](RunController::shutdown)
//! and [`snapshot`](RunController::snapshot). No framework base class, no
//! ambient globals: hosts hold this struct and call into it once per frame.

use crate::audio::{AudioSink, MusicTrack, SoundEffect};
use crate::consts::{MAX_FRAME_DT, MENU_MUSIC_VOLUME};
use crate::persistence::ScoreStore;
use crate::platform::Viewport;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RenderSnapshot, TickInput, tick};
use crate::tuning::Tuning;

/// Base volumes for the one-shot cues, scaled by [`Settings::effective_sfx`]
const DEATH_VOLUME: f32 = 0.7;
const POINT_VOLUME: f32 = 0.6;
const CLICK_VOLUME: f32 = 0.2;

pub struct RunController<A: AudioSink, S: ScoreStore> {
    state: GameState,
    viewport: Viewport,
    settings: Settings,
    audio: A,
    store: S,
    /// Last volume pushed to the game track, to avoid redundant calls
    applied_music_volume: f32,
}

impl<A: AudioSink, S: ScoreStore> RunController<A, S> {
    /// Initialize a session: loads the saved high score (once per process)
    /// and starts the menu music
    pub fn new(
        world_width: f32,
        world_height: f32,
        tuning: Tuning,
        settings: Settings,
        seed: u64,
        mut audio: A,
        mut store: S,
    ) -> Self {
        let mut state = GameState::new(world_width, world_height, tuning, seed);
        state.high_score = store.load_high_score();
        log::info!("Session started, high score {}", state.high_score);

        audio.music_set_volume(
            MusicTrack::Menu,
            MENU_MUSIC_VOLUME * settings.effective_music(),
        );
        audio.music_play(MusicTrack::Menu);

        Self {
            state,
            viewport: Viewport::new(world_width, world_height),
            settings,
            audio,
            store,
            applied_music_volume: 0.0,
        }
    }

    /// Advance one frame and dispatch the resulting collaborator cues
    pub fn tick(&mut self, dt: f32, input: &TickInput) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        tick(&mut self.state, input, dt);

        for event in self.state.take_events() {
            self.dispatch(event);
        }

        // Keep the game track in step with the fade ramp
        if self.state.music_volume != self.applied_music_volume {
            self.applied_music_volume = self.state.music_volume;
            self.audio.music_set_volume(
                MusicTrack::Game,
                self.state.music_volume * self.settings.effective_music(),
            );
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        let sfx = self.settings.effective_sfx();
        match event {
            GameEvent::ButtonPressed => {
                self.audio.play_sound(SoundEffect::ButtonClick, CLICK_VOLUME * sfx);
            }
            GameEvent::RunStarted => {
                self.audio.music_stop(MusicTrack::Menu);
                self.audio.music_set_volume(MusicTrack::Game, 0.0);
                self.audio.music_play(MusicTrack::Game);
                self.applied_music_volume = 0.0;
            }
            GameEvent::WallPassed { .. } => {
                self.audio.play_sound(SoundEffect::Point, POINT_VOLUME * sfx);
            }
            GameEvent::RunEnded { .. } => {
                self.audio.play_sound(SoundEffect::Death, DEATH_VOLUME * sfx);
                self.audio.music_stop(MusicTrack::Game);
                if !self.audio.music_is_playing(MusicTrack::Menu) {
                    self.audio.music_set_volume(
                        MusicTrack::Menu,
                        MENU_MUSIC_VOLUME * self.settings.effective_music(),
                    );
                    self.audio.music_play(MusicTrack::Menu);
                }
            }
            GameEvent::NewHighScore(score) => {
                self.store.save_high_score(score);
            }
        }
    }

    /// Physical surface size changed; world coordinates are unaffected
    pub fn on_resize(&mut self, width: f32, height: f32) {
        log::debug!("Resize to {}x{}", width, height);
        self.viewport.resize(width, height);
    }

    /// Stop audio before teardown
    pub fn shutdown(&mut self) {
        self.audio.music_stop(MusicTrack::Menu);
        self.audio.music_stop(MusicTrack::Game);
    }

    /// Read-only view for the render collaborator
    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }

    /// Coordinate mapping for the host's raw pointer events
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Host-side access for session management (e.g. adopting a saved state)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
