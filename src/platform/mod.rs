//! Platform abstraction layer
//!
//! Browser facilities the pure game core must not depend on:
//! - Timer handles (setInterval ownership)

#[cfg(target_arch = "wasm32")]
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use time::Interval;
