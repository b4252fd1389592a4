//! Platform abstraction layer
//!
//! Browser glue for:
//! - Viewport size (read fresh every time a position is chosen)
//! - The countdown interval
//! - The widget's DOM
//!
//! Everything here is wasm32-only; the native build drives `sim` directly.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub use dom::WidgetDom;
#[cfg(target_arch = "wasm32")]
pub use timer::Countdown;

use crate::layout::Viewport;

/// Current browser viewport (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn viewport() -> Viewport {
    let dims = web_sys::window().map(|w| {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    });
    let (width, height) = dims.unwrap_or((0.0, 0.0));
    Viewport::new(width as f32, height as f32)
}

/// Fixed viewport used by the headless build
#[cfg(not(target_arch = "wasm32"))]
pub fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

/// RNG seed from the wall clock
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
