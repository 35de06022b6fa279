mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod effects;
pub mod error;
pub mod field;
pub mod forces;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod trail;
pub mod web;
pub mod web_helpers;

pub use animation::{Animate, CancellationToken, FrameLoop};
pub use config::{FieldConfig, TrailConfig};
pub use error::FxError;
pub use field::ParticleField;
pub use renderer::{CanvasRenderer, Surface};
pub use trail::PointerTrail;

use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Call once from the page before starting any effect: installs the panic
/// hook and sends `tracing` output to the browser console.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::set_tracing_subscriber();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
