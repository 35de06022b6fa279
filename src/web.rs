//! Browser entry points.
//!
//! Each `start_*` function looks up its canvas, sizes it to the viewport,
//! hooks the pointer and resize events and hands the effect to a
//! [`FrameLoop`]. A page without the canvas, or one where any of the host
//! calls fail, gets `undefined` back and the effect simply never runs.

use crate::animation::{CancellationToken, FrameLoop};
use crate::config::{FieldConfig, TrailConfig};
use crate::error::FxError;
use crate::field::ParticleField;
use crate::renderer::{CanvasRenderer, Surface};
use crate::trail::PointerTrail;
use crate::web_helpers::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

/// Running effect. Stops on `stop()` or when freed from JS; either way the
/// listeners are detached and the next frame is the last.
#[wasm_bindgen]
pub struct EffectHandle {
    token: CancellationToken,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl EffectHandle {
    pub fn stop(&mut self) {
        self.token.cancel();
        self.listeners.clear();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

struct Stage {
    window: Window,
    canvas: HtmlCanvasElement,
}

// None when the page has no such canvas
fn stage(canvas_id: &str) -> Result<Option<Stage>, FxError> {
    let window = web_helpers::window()?;
    Ok(web_helpers::canvas_by_id(&window, canvas_id).map(|canvas| Stage { window, canvas }))
}

fn pointer_position(event: &web_sys::Event) -> Option<(f64, f64)> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| (e.client_x() as f64, e.client_y() as f64))
}

/// Keeps the canvas the size of the viewport and tells `on_resize` about it.
fn resize_listener<F>(window: &Window, renderer: Rc<RefCell<CanvasRenderer>>, mut on_resize: F) -> Result<Listener, FxError>
where
    F: FnMut(f64, f64) + 'static,
{
    let resize_window = window.clone();
    Listener::new(window, "resize", move |_| match web_helpers::viewport_size(&resize_window) {
        Ok((width, height)) => {
            renderer.borrow_mut().resize(width, height);
            on_resize(width, height);
        }
        Err(err) => tracing::warn!("viewport size unavailable: {}", err),
    })
}

// A failed host call leaves the effect blank instead of throwing into the page
fn inert_on_error(effect: &str, started: Result<Option<EffectHandle>, FxError>) -> Option<EffectHandle> {
    match started {
        Ok(handle) => handle,
        Err(err) => {
            tracing::warn!(effect, "effect disabled: {}", err);
            None
        }
    }
}

#[wasm_bindgen]
pub fn start_particle_field(canvas_id: &str, config: Option<FieldConfig>) -> Option<EffectHandle> {
    inert_on_error("particle field", try_start_particle_field(canvas_id, config))
}

fn try_start_particle_field(canvas_id: &str, config: Option<FieldConfig>) -> Result<Option<EffectHandle>, FxError> {
    let Stage { window, canvas } = match stage(canvas_id)? {
        Some(stage) => stage,
        None => {
            tracing::debug!(canvas_id, "no canvas, particle field disabled");
            return Ok(None);
        }
    };
    let config = config.unwrap_or_else(|| FieldConfig::from_element(&canvas));
    let (width, height) = web_helpers::viewport_size(&window)?;

    let mut renderer = CanvasRenderer::new(canvas)?;
    renderer.resize(width, height);
    let renderer = Rc::new(RefCell::new(renderer));
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        config,
        &mut rand::thread_rng(),
    )));

    let mut listeners = Vec::with_capacity(2);
    let pointer_field = field.clone();
    listeners.push(Listener::new(&window, "mousemove", move |event| {
        if let Some((x, y)) = pointer_position(&event) {
            pointer_field.borrow_mut().set_pointer(x, y);
        }
    })?);
    let resize_field = field.clone();
    listeners.push(resize_listener(&window, renderer.clone(), move |w, h| {
        resize_field.borrow_mut().resize(w, h)
    })?);

    let mut frame_loop = FrameLoop::new(field, renderer);
    if config.profile_frames {
        frame_loop = frame_loop.with_timer("ParticleField::frame");
    }
    let token = frame_loop.start()?;
    Ok(Some(EffectHandle { token, listeners }))
}

#[wasm_bindgen]
pub fn start_pointer_trail(canvas_id: &str, config: Option<TrailConfig>) -> Option<EffectHandle> {
    inert_on_error("pointer trail", try_start_pointer_trail(canvas_id, config))
}

fn try_start_pointer_trail(canvas_id: &str, config: Option<TrailConfig>) -> Result<Option<EffectHandle>, FxError> {
    let Stage { window, canvas } = match stage(canvas_id)? {
        Some(stage) => stage,
        None => {
            tracing::debug!(canvas_id, "no canvas, pointer trail disabled");
            return Ok(None);
        }
    };
    let (width, height) = web_helpers::viewport_size(&window)?;

    let mut renderer = CanvasRenderer::new(canvas)?;
    renderer.resize(width, height);
    let renderer = Rc::new(RefCell::new(renderer));
    let trail = Rc::new(RefCell::new(PointerTrail::new(
        config.unwrap_or_default(),
        rand::thread_rng(),
    )));

    let mut listeners = Vec::with_capacity(2);
    let pointer_trail = trail.clone();
    let clock = window.clone();
    listeners.push(Listener::new(&window, "mousemove", move |event| {
        if let Some((x, y)) = pointer_position(&event) {
            let now = web_helpers::now_ms(&clock);
            pointer_trail.borrow_mut().pointer_moved(x, y, now);
        }
    })?);
    listeners.push(resize_listener(&window, renderer.clone(), |_, _| {})?);

    let token = FrameLoop::new(trail, renderer).start()?;
    tracing::debug!(width, height, "pointer trail started");
    Ok(Some(EffectHandle { token, listeners }))
}
