//! Owned browser interval handles
//!
//! `Interval` wraps `setInterval` so that dropping the value clears the
//! callback. The shell holds at most one per countdown; replacing the handle
//! cancels the previous interval before the new one can fire, which keeps
//! exactly one live timer callback per question.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// RAII guard for a repeating browser timer
pub struct Interval {
    id: i32,
    /// Kept alive for as long as the interval may fire
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Schedule `callback` every `millis` milliseconds. Returns `None` when
    /// there is no window or the browser refuses the timer.
    pub fn new(millis: i32, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}
