// Ambient particle: position, velocity, and the fixed look it was born with

use crate::color::{Color, PALETTE};
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, opacity: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
            color,
        }
    }

    /// Uniformly placed inside `width` x `height`, with velocity, size and
    /// opacity drawn from the ranges in `config`.
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            (rng.gen::<f64>() - 0.5) * config.speed,
            (rng.gen::<f64>() - 0.5) * config.speed,
        ];
        let radius = lerp(config.radius_min, config.radius_max, rng.gen::<f64>());
        let opacity = lerp(config.opacity_min, config.opacity_max, rng.gen::<f64>());
        let color = if rng.gen::<bool>() { PALETTE[0] } else { PALETTE[1] };
        Particle::new(pos, vel, radius, opacity, color)
    }

    // Negates the velocity on every axis where the particle sits outside
    // [0, width] x [0, height] while still heading further out, then puts it
    // back on the edge. Returns which axes flipped.
    pub fn reflect(&mut self, width: f64, height: f64) -> [bool; 2] {
        let bounds = [width, height];
        let mut flipped = [false; 2];
        for axis in 0..2 {
            let p = self.pos[axis];
            let v = self.vel[axis];
            if (p < 0.0 && v < 0.0) || (p > bounds[axis] && v > 0.0) {
                self.vel[axis] = -v;
                flipped[axis] = true;
            }
        }
        self.clamp_to(width, height);
        flipped
    }

    pub fn clamp_to(&mut self, width: f64, height: f64) {
        self.pos[0] = self.pos[0].max(0.0).min(width);
        self.pos[1] = self.pos[1].max(0.0).min(height);
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(pos: Vector2<f64>, vel: Vector2<f64>) -> Particle {
        Particle::new(pos, vel, 1.0, 1.0, PALETTE[0])
    }

    #[test]
    fn random_particle_respects_config_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0].abs() <= config.speed / 2.0);
            assert!(p.vel[1].abs() <= config.speed / 2.0);
            assert!(p.radius >= config.radius_min && p.radius < config.radius_max);
            assert!(p.opacity > 0.0 && p.opacity <= 1.0);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn reflect_flips_only_the_crossed_axis() {
        let mut p = at([-0.1, 50.0], [-0.2, 0.3]);
        assert_eq!(p.reflect(100.0, 100.0), [true, false]);
        assert_eq!(p.vel, [0.2, 0.3]);
        assert_eq!(p.pos, [0.0, 50.0]);

        let mut p = at([50.0, 100.5], [0.2, 0.3]);
        assert_eq!(p.reflect(100.0, 100.0), [false, true]);
        assert_eq!(p.vel, [0.2, -0.3]);
    }

    #[test]
    fn reflect_leaves_inbound_particles_alone() {
        let mut p = at([50.0, 50.0], [0.2, -0.3]);
        assert_eq!(p.reflect(100.0, 100.0), [false, false]);

        // already bounced, heading back in
        let mut p = at([-0.1, 50.0], [0.2, 0.0]);
        assert_eq!(p.reflect(100.0, 100.0), [false, false]);
        assert_eq!(p.vel, [0.2, 0.0]);
    }
}
