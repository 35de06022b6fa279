//! Tunables for the particle field and the pointer trail.
//!
//! Both configs are exported to JS with a constructor and setters. Setters
//! ignore values that would break the simulation (non-finite, negative,
//! or zero where a divisor is expected) and keep the previous value.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub(crate) max_particles: usize,
    pub(crate) density_divisor: f64,
    pub(crate) interaction_radius: f64,
    pub(crate) connection_radius: f64,
    pub(crate) repulsion_strength: f64,
    pub(crate) speed: f64,
    pub(crate) radius_min: f64,
    pub(crate) radius_max: f64,
    pub(crate) opacity_min: f64,
    pub(crate) opacity_max: f64,
    pub(crate) line_alpha_max: f64,
    pub(crate) line_width: f64,
    pub(crate) profile_frames: bool,
}

impl FieldConfig {
    pub const DEFAULT_MAX_PARTICLES: usize = 100;
    /// Link drawing is quadratic in the particle count, so no page may ask
    /// for more than this.
    pub const MAX_PARTICLES_CEILING: usize = 500;
    pub const DEFAULT_DENSITY_DIVISOR: f64 = 15.0;
    pub const DEFAULT_INTERACTION_RADIUS: f64 = 150.0;
    pub const DEFAULT_CONNECTION_RADIUS: f64 = 100.0;
    pub const DEFAULT_SPEED: f64 = 0.5;

    /// Reads overrides from the canvas' `data-*` attributes. Anything missing
    /// or unparsable keeps its default.
    pub fn from_element(element: &Element) -> FieldConfig {
        let attr = |name: &str| element.get_attribute(name);
        Self::from_attributes(attr)
    }

    pub(crate) fn from_attributes<F>(attr: F) -> FieldConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FieldConfig::default();
        let max = parse_positive(attr("data-max-particles"), config.max_particles as f64);
        config.set_max_particles(max.min(Self::MAX_PARTICLES_CEILING as f64) as usize);
        config.density_divisor = parse_positive(attr("data-density"), config.density_divisor);
        config.set_interaction_radius(parse_positive(
            attr("data-interaction-radius"),
            config.interaction_radius,
        ));
        config.set_connection_radius(parse_positive(
            attr("data-connection-radius"),
            config.connection_radius,
        ));
        config.speed = parse_positive(attr("data-speed"), config.speed);
        config
    }

    pub fn interaction_radius(&self) -> f64 {
        self.interaction_radius
    }

    pub fn connection_radius(&self) -> f64 {
        self.connection_radius
    }
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig {
            max_particles: Self::DEFAULT_MAX_PARTICLES,
            density_divisor: Self::DEFAULT_DENSITY_DIVISOR,
            interaction_radius: Self::DEFAULT_INTERACTION_RADIUS,
            connection_radius: Self::DEFAULT_CONNECTION_RADIUS,
            repulsion_strength: 0.02,
            speed: Self::DEFAULT_SPEED,
            radius_min: 0.5,
            radius_max: 2.5,
            opacity_min: 0.2,
            opacity_max: 0.7,
            line_alpha_max: 0.2,
            line_width: 0.5,
            profile_frames: false,
        }
    }

    pub fn set_max_particles(&mut self, max: usize) {
        self.max_particles = max.min(Self::MAX_PARTICLES_CEILING);
    }

    pub fn set_density_divisor(&mut self, divisor: f64) {
        if is_positive(divisor) {
            self.density_divisor = divisor;
        }
    }

    pub fn set_interaction_radius(&mut self, radius: f64) {
        if is_positive(radius) {
            self.interaction_radius = radius;
        }
    }

    pub fn set_connection_radius(&mut self, radius: f64) {
        if is_positive(radius) {
            self.connection_radius = radius;
        }
    }

    pub fn set_repulsion_strength(&mut self, strength: f64) {
        if strength.is_finite() && strength >= 0.0 {
            self.repulsion_strength = strength;
        }
    }

    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() && speed >= 0.0 {
            self.speed = speed;
        }
    }

    pub fn set_line_alpha_max(&mut self, alpha: f64) {
        if alpha.is_finite() {
            self.line_alpha_max = alpha.max(0.0).min(1.0);
        }
    }

    // Logs console.time spans around every frame
    pub fn set_profile_frames(&mut self, enabled: bool) {
        self.profile_frames = enabled;
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    pub(crate) min_spawn_interval_ms: f64,
    pub(crate) decay_min: f64,
    pub(crate) decay_max: f64,
    pub(crate) shrink_factor: f64,
    pub(crate) size_min: f64,
    pub(crate) size_max: f64,
    pub(crate) drift: f64,
}

#[wasm_bindgen]
impl TrailConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TrailConfig {
        TrailConfig {
            min_spawn_interval_ms: 50.0,
            decay_min: 0.01,
            decay_max: 0.03,
            shrink_factor: 0.98,
            size_min: 2.0,
            size_max: 6.0,
            drift: 1.0,
        }
    }

    pub fn set_min_spawn_interval_ms(&mut self, interval: f64) {
        if interval.is_finite() && interval >= 0.0 {
            self.min_spawn_interval_ms = interval;
        }
    }

    /// Range the per-mark life decay is drawn from. An inverted range is
    /// swapped, a non-positive lower bound is rejected.
    pub fn set_decay_range(&mut self, min: f64, max: f64) {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if is_positive(lo) && hi.is_finite() {
            self.decay_min = lo;
            self.decay_max = hi;
        }
    }

    pub fn set_shrink_factor(&mut self, factor: f64) {
        if is_positive(factor) && factor <= 1.0 {
            self.shrink_factor = factor;
        }
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// Falls back to `default` on missing, unparsable or non-positive input
pub(crate) fn parse_positive(raw: Option<String>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| is_positive(*v))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn non_numeric_attribute_falls_back_to_default() {
        assert_eq!(parse_positive(Some("fast".to_owned()), 0.5), 0.5);
        assert_eq!(parse_positive(Some("".to_owned()), 0.5), 0.5);
        assert_eq!(parse_positive(Some("-3".to_owned()), 0.5), 0.5);
        assert_eq!(parse_positive(Some("NaN".to_owned()), 0.5), 0.5);
        assert_eq!(parse_positive(None, 0.5), 0.5);
        assert_eq!(parse_positive(Some(" 1.25 ".to_owned()), 0.5), 1.25);
    }

    #[test]
    fn attributes_override_defaults() {
        let map = attrs(&[
            ("data-max-particles", "60"),
            ("data-density", "abc"),
            ("data-interaction-radius", "200"),
            ("data-speed", "1.5"),
        ]);
        let config = FieldConfig::from_attributes(|name| map.get(name).cloned());

        assert_eq!(config.max_particles, 60);
        assert_eq!(config.density_divisor, FieldConfig::DEFAULT_DENSITY_DIVISOR);
        assert_eq!(config.interaction_radius, 200.0);
        assert_eq!(config.connection_radius, FieldConfig::DEFAULT_CONNECTION_RADIUS);
        assert_eq!(config.speed, 1.5);
    }

    #[test]
    fn particle_cap_has_a_ceiling() {
        let map = attrs(&[("data-max-particles", "5000")]);
        let config = FieldConfig::from_attributes(|name| map.get(name).cloned());
        assert_eq!(config.max_particles, FieldConfig::MAX_PARTICLES_CEILING);

        let mut config = FieldConfig::new();
        config.set_max_particles(5000);
        assert_eq!(config.max_particles, FieldConfig::MAX_PARTICLES_CEILING);
        config.set_max_particles(40);
        assert_eq!(config.max_particles, 40);
    }

    #[test]
    fn setters_reject_nonsense() {
        let mut config = FieldConfig::new();
        config.set_density_divisor(0.0);
        config.set_interaction_radius(f64::NAN);
        config.set_speed(-1.0);
        assert_eq!(config, FieldConfig::default());

        config.set_line_alpha_max(4.0);
        assert_eq!(config.line_alpha_max, 1.0);
    }

    #[test]
    fn decay_range_is_normalised() {
        let mut trail = TrailConfig::new();
        trail.set_decay_range(0.05, 0.02);
        assert_eq!((trail.decay_min, trail.decay_max), (0.02, 0.05));

        trail.set_decay_range(0.0, 0.1);
        assert_eq!((trail.decay_min, trail.decay_max), (0.02, 0.05));
    }
}
