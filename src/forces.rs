// Distance falloff laws shared by the field: cursor repulsion and the
// alpha of the connective lines between neighbouring particles.

use vecmath::Vector2;

/// Linear falloff `(R - d) / R`, 1 at the cursor and 0 from `radius` on.
pub fn repulsion_force(distance: f64, radius: f64) -> f64 {
    if radius <= 0.0 || distance >= radius {
        0.0
    } else {
        (radius - distance.max(0.0)) / radius
    }
}

/// Displacement that pushes a particle at `pos` away from `pointer`. The
/// push is along the particle-to-pointer vector, scaled by the falloff and
/// by `strength`.
pub fn repulsion_displacement(pos: Vector2<f64>, pointer: Vector2<f64>, radius: f64, strength: f64) -> Vector2<f64> {
    let delta = vecmath::vec2_sub(pointer, pos);
    let distance = vecmath::vec2_len(delta);
    let force = repulsion_force(distance, radius);
    if force == 0.0 {
        return [0.0, 0.0];
    }
    vecmath::vec2_scale(delta, -force * strength)
}

/// Line opacity for two particles `distance` apart: `max_alpha` when they
/// touch, fading linearly to 0 at `radius`.
pub fn link_alpha(distance: f64, radius: f64, max_alpha: f64) -> f64 {
    if radius <= 0.0 || distance >= radius {
        0.0
    } else {
        max_alpha * (1.0 - distance.max(0.0) / radius)
    }
}
