//! Pointer trail: short-lived marks dropped behind the pointer.

use crate::animation::Animate;
use crate::color::{Color, PALETTE};
use crate::config::TrailConfig;
use crate::error::FxError;
use crate::renderer::Surface;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrailMark {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub life: f64,
    pub decay: f64,
    pub color: Color,
}

impl TrailMark {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    fn age(&mut self, shrink_factor: f64) {
        self.life -= self.decay;
        self.size *= shrink_factor;
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }
}

pub struct PointerTrail<R> {
    config: TrailConfig,
    marks: Vec<TrailMark>,
    last_spawn_ms: Option<f64>,
    rng: R,
}

impl<R: Rng> PointerTrail<R> {
    pub fn new(config: TrailConfig, rng: R) -> Self {
        PointerTrail {
            config,
            marks: Vec::new(),
            last_spawn_ms: None,
            rng,
        }
    }

    /// Drops a new mark at the pointer unless one was dropped less than
    /// `min_spawn_interval_ms` ago. Returns whether a mark was created.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now_ms: f64) -> bool {
        if let Some(last) = self.last_spawn_ms {
            if now_ms - last < self.config.min_spawn_interval_ms {
                return false;
            }
        }
        self.last_spawn_ms = Some(now_ms);

        let config = &self.config;
        let rng = &mut self.rng;
        let drift = config.drift;
        let mark = TrailMark {
            pos: [x, y],
            vel: [
                (rng.gen::<f64>() - 0.5) * drift,
                (rng.gen::<f64>() - 0.5) * drift,
            ],
            size: config.size_min + rng.gen::<f64>() * (config.size_max - config.size_min),
            life: 1.0,
            decay: config.decay_min + rng.gen::<f64>() * (config.decay_max - config.decay_min),
            color: if rng.gen::<bool>() { PALETTE[0] } else { PALETTE[1] },
        };
        self.marks.push(mark);
        true
    }
}

impl<R> PointerTrail<R> {
    pub fn marks(&self) -> &[TrailMark] {
        &self.marks
    }

    // Evicts the dead, then ages the survivors
    pub fn update(&mut self) {
        self.marks.retain(TrailMark::is_alive);
        let shrink = self.config.shrink_factor;
        for mark in &mut self.marks {
            mark.age(shrink);
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), FxError> {
        for mark in self.marks.iter().filter(|m| m.is_alive()) {
            surface.fill_circle(mark.pos, mark.size, mark.color, mark.life)?;
        }
        Ok(())
    }
}

impl<R> Animate for PointerTrail<R> {
    fn frame<S: Surface>(&mut self, surface: &mut S, _now_ms: f64) -> Result<(), FxError> {
        surface.clear();
        self.update();
        self.draw(surface)
    }
}
