//! Math Rush - a browser multiplication quiz
//!
//! Core modules:
//! - `game`: Deterministic quiz logic (questions, session state machine)
//! - `audio`: Named sound clips, mute handling
//! - `platform`: Browser timer handle ownership
//! - `settings`: Persisted sound preferences

pub mod audio;
pub mod game;
pub mod platform;
pub mod settings;

pub use audio::{AudioManager, SoundEffect};
pub use game::{GamePhase, GameSession, Question, QuestionSource, SoundCue};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
    /// Seconds allowed per question
    pub const QUESTION_SECONDS: u8 = 30;
    /// Warning cue plays while the countdown is at or below this
    pub const TICK_WARNING_SECONDS: u8 = 6;

    /// Inclusive operand range for generated questions
    pub const OPERAND_MIN: u32 = 1;
    pub const OPERAND_MAX: u32 = 10;

    /// Countdown callback period
    pub const TIMER_INTERVAL_MS: i32 = 1_000;
}
