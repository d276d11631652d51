pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

pub use shared::unified_list::{init_unified_list, UnifiedList};

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
