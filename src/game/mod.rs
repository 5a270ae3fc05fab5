//! Deterministic quiz logic
//!
//! All gameplay state lives here. This module must stay pure:
//! - Seeded RNG only
//! - No DOM, timer or audio backend dependencies
//! - Sound side effects surface as `SoundCue`s drained by the shell

pub mod question;
pub mod session;

pub use question::{Question, QuestionSource};
pub use session::{GamePhase, GameSession, SoundCue};
