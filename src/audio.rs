//! Audio playback for the quiz
//!
//! Named clips loaded as `HtmlAudioElement`s. Playback is fire-and-forget:
//! autoplay refusals and missing elements are swallowed, never surfaced.

#[cfg(target_arch = "wasm32")]
use web_sys::HtmlAudioElement;

use crate::game::SoundCue;
use crate::settings::Settings;

/// Named sound clips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Correct answer chime
    Correct,
    /// Wrong answer / time up buzz
    Wrong,
    /// Run ended
    GameOver,
    /// Countdown warning
    Tick,
    /// Background music loop
    Background,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Correct,
        SoundEffect::Wrong,
        SoundEffect::GameOver,
        SoundEffect::Tick,
        SoundEffect::Background,
    ];

    /// Asset URL the browser resolves for this clip (mixkit.co free sfx)
    pub fn url(&self) -> &'static str {
        match self {
            SoundEffect::Correct => {
                "https://assets.mixkit.co/active_storage/sfx/2000/2000-preview.mp3"
            }
            SoundEffect::Wrong => {
                "https://assets.mixkit.co/active_storage/sfx/2003/2003-preview.mp3"
            }
            SoundEffect::GameOver => {
                "https://assets.mixkit.co/active_storage/sfx/1435/1435-preview.mp3"
            }
            SoundEffect::Tick => {
                "https://assets.mixkit.co/active_storage/sfx/1859/1859-preview.mp3"
            }
            SoundEffect::Background => {
                "https://assets.mixkit.co/active_storage/sfx/123/123-preview.mp3"
            }
        }
    }

    /// Whether the clip auto-repeats; only the background track loops
    pub fn loops(&self) -> bool {
        matches!(self, SoundEffect::Background)
    }
}

impl From<SoundCue> for SoundEffect {
    fn from(cue: SoundCue) -> Self {
        match cue {
            SoundCue::Correct => SoundEffect::Correct,
            SoundCue::Wrong => SoundEffect::Wrong,
            SoundCue::GameOver => SoundEffect::GameOver,
            SoundCue::Tick => SoundEffect::Tick,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    /// Clip handles by effect; a missing entry means creation failed
    #[cfg(target_arch = "wasm32")]
    clips: Vec<(SoundEffect, HtmlAudioElement)>,
    muted: bool,
}

impl AudioManager {
    #[cfg(target_arch = "wasm32")]
    pub fn new(settings: &Settings) -> Self {
        let mut clips = Vec::with_capacity(SoundEffect::ALL.len());
        for effect in SoundEffect::ALL {
            match HtmlAudioElement::new_with_src(effect.url()) {
                Ok(clip) => {
                    if effect.loops() {
                        clip.set_loop(true);
                        clip.set_volume(settings.music_volume as f64);
                    } else {
                        clip.set_volume(settings.sfx_volume as f64);
                    }
                    clips.push((effect, clip));
                }
                Err(_) => {
                    log::warn!("Failed to create audio element for {:?} - clip disabled", effect);
                }
            }
        }
        Self {
            clips,
            muted: settings.muted,
        }
    }

    /// Native stub - no playback backend, mute bookkeeping only
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            muted: settings.muted,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play a one-shot from the start, overlapping any prior playback of the
    /// same clip
    pub fn play(&self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.restart_clip(effect);
    }

    /// Start (or keep playing) the background loop
    pub fn play_background(&self) {
        if self.muted {
            return;
        }
        self.resume_clip(SoundEffect::Background);
    }

    /// Pause every clip and rewind to the start. Used on mute and unmount.
    pub fn stop_all(&self) {
        self.stop_clips();
    }

    /// Flip the mute flag; muting stops everything, unmuting resumes the
    /// background loop. Returns the new flag.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if self.muted {
            self.stop_all();
        } else {
            self.play_background();
        }
        self.muted
    }

    #[cfg(target_arch = "wasm32")]
    fn clip(&self, effect: SoundEffect) -> Option<&HtmlAudioElement> {
        self.clips.iter().find(|(e, _)| *e == effect).map(|(_, c)| c)
    }

    #[cfg(target_arch = "wasm32")]
    fn restart_clip(&self, effect: SoundEffect) {
        if let Some(clip) = self.clip(effect) {
            clip.set_current_time(0.0);
            // Autoplay policy may refuse; recoverable, not surfaced
            let _ = clip.play();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn resume_clip(&self, effect: SoundEffect) {
        if let Some(clip) = self.clip(effect) {
            let _ = clip.play();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn stop_clips(&self) {
        for (_, clip) in &self.clips {
            let _ = clip.pause();
            clip.set_current_time(0.0);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn restart_clip(&self, _effect: SoundEffect) {}

    #[cfg(not(target_arch = "wasm32"))]
    fn resume_clip(&self, _effect: SoundEffect) {}

    #[cfg(not(target_arch = "wasm32"))]
    fn stop_clips(&self) {}
}
