//! Frame scheduling.
//!
//! An effect implements [`Animate`]; a [`FrameLoop`] pairs it with a surface
//! and a [`CancellationToken`]. In the browser [`FrameLoop::start`] drives it
//! from `requestAnimationFrame` until the token is cancelled; tests call
//! [`FrameLoop::step`] directly.

use crate::error::FxError;
use crate::renderer::Surface;
use crate::Timer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub trait Animate {
    /// Clears `surface`, advances one frame and draws the result.
    fn frame<S: Surface>(&mut self, surface: &mut S, now_ms: f64) -> Result<(), FxError>;
}

#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub struct FrameLoop<A, S> {
    animation: Rc<RefCell<A>>,
    surface: Rc<RefCell<S>>,
    token: CancellationToken,
    frames: u64,
    timer_label: Option<&'static str>,
}

impl<A: Animate, S: Surface> FrameLoop<A, S> {
    pub fn new(animation: Rc<RefCell<A>>, surface: Rc<RefCell<S>>) -> Self {
        FrameLoop {
            animation,
            surface,
            token: CancellationToken::new(),
            frames: 0,
            timer_label: None,
        }
    }

    /// Wraps every frame in a `console.time` span with this label.
    pub fn with_timer(mut self, label: &'static str) -> Self {
        self.timer_label = Some(label);
        self
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs a single frame. Returns `Ok(false)` without touching the
    /// surface once the token has been cancelled.
    pub fn step(&mut self, now_ms: f64) -> Result<bool, FxError> {
        if self.token.is_cancelled() {
            return Ok(false);
        }
        let _timer = self.timer_label.map(Timer::new);
        let mut surface = self.surface.borrow_mut();
        self.animation.borrow_mut().frame(&mut *surface, now_ms)?;
        self.frames += 1;
        Ok(true)
    }
}

impl<A: Animate + 'static, S: Surface + 'static> FrameLoop<A, S> {
    /// Hands the loop over to `requestAnimationFrame`. The returned token
    /// stops it; the frame closure frees itself on the first tick after
    /// cancellation.
    pub fn start(mut self) -> Result<CancellationToken, FxError> {
        let window = web_sys::window().ok_or(FxError::NoWindow)?;
        let token = self.token();

        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let tick_window = window.clone();

        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            match self.step(now_ms) {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!(frames = self.frames, "frame loop stopped");
                    // drop our handle; the closure is freed once this call returns
                    f.borrow_mut().take();
                    return;
                }
                Err(err) => tracing::warn!("frame failed: {}", err),
            }
            let next = f.borrow();
            if let Some(callback) = next.as_ref() {
                if let Err(err) = tick_window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    tracing::warn!("requestAnimationFrame failed: {}", FxError::from(err));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = g.borrow();
        if let Some(callback) = first.as_ref() {
            window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{Op, RecordingSurface};

    #[derive(Default)]
    struct Ticks {
        seen: Vec<f64>,
    }

    impl Animate for Ticks {
        fn frame<S: Surface>(&mut self, surface: &mut S, now_ms: f64) -> Result<(), FxError> {
            surface.clear();
            self.seen.push(now_ms);
            Ok(())
        }
    }

    #[test]
    fn steps_until_cancelled() {
        let ticks = Rc::new(RefCell::new(Ticks::default()));
        let surface = Rc::new(RefCell::new(RecordingSurface::new(10.0, 10.0)));
        let mut frame_loop = FrameLoop::new(ticks.clone(), surface.clone());
        let token = frame_loop.token();

        assert_eq!(frame_loop.step(16.0), Ok(true));
        assert_eq!(frame_loop.step(32.0), Ok(true));
        token.cancel();
        assert_eq!(frame_loop.step(48.0), Ok(false));

        assert_eq!(ticks.borrow().seen, vec![16.0, 32.0]);
        assert_eq!(frame_loop.frames(), 2);
        assert_eq!(surface.borrow().ops, vec![Op::Clear, Op::Clear]);
    }

    #[test]
    fn cloned_tokens_share_state() {
        let token = CancellationToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }
}
