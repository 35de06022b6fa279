// Helper functions for dealing with the DOM: looking up the canvas, reading
// the viewport, and keeping event listeners attached for as long as needed

use crate::error::FxError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlCanvasElement, Window};

pub fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or(FxError::NoWindow)
}

/// `None` when the page has no element with this id, or it is not a canvas.
pub fn canvas_by_id(window: &Window, id: &str) -> Option<HtmlCanvasElement> {
    window
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

pub fn viewport_size(window: &Window) -> Result<(f64, f64), FxError> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| FxError::Js(String::from("innerWidth is not a number")))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| FxError::Js(String::from("innerHeight is not a number")))?;
    Ok((width, height))
}

// performance.now(), falling back to wall-clock ms without a Performance object
pub fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Listener, FxError>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if removed.is_err() {
            tracing::warn!(event = self.event, "failed to remove event listener");
        }
    }
}
