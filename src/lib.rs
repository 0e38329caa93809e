//! Slowly drifting Andean geometric backdrop for a page canvas.
//!
//! The simulation (shapes, scene, clock, driver) is plain Rust and runs on
//! any target; the browser glue only exists on wasm32.

pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod palette;
pub mod scene;
pub mod shapes;
pub mod surface;

pub use config::SceneConfig;
pub use error::{BackdropError, Result};
pub use scene::Scene;
pub use surface::Surface;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod canvas2d;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        render::boot()?;
        Ok(())
    }
}
