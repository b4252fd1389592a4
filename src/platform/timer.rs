//! Countdown interval
//!
//! One `setInterval` registration per countdown. The guard owns the JS
//! closure; dropping the guard clears the interval, so a countdown can never
//! outlive whoever holds it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Live `setInterval` for one countdown id
pub struct Countdown {
    id: u64,
    handle: i32,
    window: web_sys::Window,
    _tick: Closure<dyn FnMut()>,
}

impl Countdown {
    /// Start calling `on_tick` every `period_ms` for countdown `id`
    pub fn arm<F>(id: u64, period_ms: u32, on_tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let delay = i32::try_from(period_ms)
            .map_err(|_| JsValue::from_str(&format!("tick period {} ms out of range", period_ms)))?;
        let tick = Closure::<dyn FnMut()>::new(on_tick);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            delay,
        )?;
        log::debug!("Countdown {} armed ({} ms)", id, period_ms);
        Ok(Self {
            id,
            handle,
            window,
            _tick: tick,
        })
    }

    /// Countdown id this interval ticks for
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
        log::debug!("Countdown {} cleared", self.id);
    }
}
