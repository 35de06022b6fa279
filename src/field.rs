//! Ambient particle field.
//!
//! A fixed set of drifting particles that bounce off the surface edges, get
//! pushed away from the pointer, and are joined by faint lines when two of
//! them come close enough.

use crate::animation::Animate;
use crate::color::LINK_COLOR;
use crate::config::FieldConfig;
use crate::error::FxError;
use crate::forces;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::renderer::Surface;
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
    pointer: Pointer,
}

/// Number of particles for a viewport `width` px wide.
pub fn particle_count(width: f64, config: &FieldConfig) -> usize {
    if !(width > 0.0) || !(config.density_divisor > 0.0) {
        return 0;
    }
    let by_width = (width / config.density_divisor).floor() as usize;
    by_width.min(config.max_particles)
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> Self {
        let count = particle_count(width, &config);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height, &config))
            .collect();
        tracing::debug!(count, width, height, "particle field created");
        ParticleField {
            width,
            height,
            config,
            particles,
            pointer: Pointer::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    /// New viewport bounds. The particle count stays as it was at creation;
    /// particles left outside a shrunken viewport are pulled back to its edge.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for particle in &mut self.particles {
            particle.clamp_to(width, height);
        }
    }

    /// One simulation step: drift, pointer repulsion, then edge reflection.
    ///
    /// Only a particle still heading out of bounds bounces. One the cursor
    /// pushes across an edge while it drifts inward is clamped back onto the
    /// edge with its velocity untouched.
    pub fn update(&mut self) {
        let pointer = self.pointer.pos;
        let radius = self.config.interaction_radius;
        let strength = self.config.repulsion_strength;
        for particle in &mut self.particles {
            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
            let push = forces::repulsion_displacement(particle.pos, pointer, radius, strength);
            particle.pos = vecmath::vec2_add(particle.pos, push);
            particle.reflect(self.width, self.height);
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), FxError> {
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, p.color, p.opacity)?;
        }
        self.draw_links(surface);
        Ok(())
    }

    // O(n^2) over unordered pairs; n is capped by `max_particles`
    fn draw_links<S: Surface>(&self, surface: &mut S) {
        let radius = self.config.connection_radius;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
                let alpha = forces::link_alpha(distance, radius, self.config.line_alpha_max);
                if alpha > 0.0 {
                    surface.stroke_line(a.pos, b.pos, self.config.line_width, LINK_COLOR, alpha);
                }
            }
        }
    }
}

impl Animate for ParticleField {
    fn frame<S: Surface>(&mut self, surface: &mut S, _now_ms: f64) -> Result<(), FxError> {
        surface.clear();
        self.update();
        self.draw(surface)
    }
}
