//! Audio preferences
//!
//! Volume levels applied by the controller on top of the per-cue base
//! volumes the sim requests.

use serde::{Deserialize, Serialize};

/// Audio settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute all audio
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Effective sound-effect multiplier
    pub fn effective_sfx(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective music multiplier
    pub fn effective_music(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_silences_everything() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        assert_eq!(settings.effective_sfx(), 0.0);
        assert_eq!(settings.effective_music(), 0.0);
    }

    #[test]
    fn test_effective_volumes_multiply() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.8,
            music_volume: 0.6,
            muted: false,
        };
        assert!((settings.effective_sfx() - 0.4).abs() < 1e-6);
        assert!((settings.effective_music() - 0.3).abs() < 1e-6);
    }
}
