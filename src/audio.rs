//! Audio capability interface
//!
//! The core never talks to an audio device; it emits cues through this trait
//! and treats every call as fire-and-forget. Hosts back it with whatever
//! playback layer they have; headless hosts and tests use [`NullAudio`].

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ship hit a wall
    Death,
    /// Ship cleared a gap
    Point,
    /// Play-again button pressed
    ButtonClick,
}

/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    Game,
}

/// Playback sink implemented by the host
pub trait AudioSink {
    /// Play a one-shot effect at the given volume
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
    /// Start a looping track (restarts from the beginning if stopped)
    fn music_play(&mut self, track: MusicTrack);
    /// Stop a looping track
    fn music_stop(&mut self, track: MusicTrack);
    /// Adjust a track's volume
    fn music_set_volume(&mut self, track: MusicTrack, volume: f32);
    /// Whether a track is currently playing
    fn music_is_playing(&self, track: MusicTrack) -> bool;
}

/// Sink that discards everything
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_sound(&mut self, _effect: SoundEffect, _volume: f32) {}
    fn music_play(&mut self, _track: MusicTrack) {}
    fn music_stop(&mut self, _track: MusicTrack) {}
    fn music_set_volume(&mut self, _track: MusicTrack, _volume: f32) {}
    fn music_is_playing(&self, _track: MusicTrack) -> bool {
        false
    }
}
