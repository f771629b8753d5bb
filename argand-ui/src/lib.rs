pub mod panels;
pub mod rendering;

pub use panels::{CoordinatePanel, EpicyclePlayground, PanelSnapshot};
pub use rendering::FrameLoop;

use wasm_bindgen::prelude::*;

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("argand-ui initialized");
}

/// Error strings cross the JS boundary as plain `JsValue` strings.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
