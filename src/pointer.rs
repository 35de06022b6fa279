// Pointer state shared by the effects: the last known position and the
// eased cursor/follower pair that chases it.

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vector2<f64>,
}

impl Pointer {
    pub fn new() -> Self {
        Pointer { pos: [0.0, 0.0] }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = [x, y];
    }

    pub fn distance_to(&self, point: Vector2<f64>) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(point, self.pos))
    }
}

/// Custom cursor dot and its trailing ring. Each frame both close a fixed
/// fraction of the gap to the pointer, the follower more slowly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorFollower {
    pub cursor: Vector2<f64>,
    pub follower: Vector2<f64>,
}

impl CursorFollower {
    pub const CURSOR_EASING: f64 = 0.2;
    pub const FOLLOWER_EASING: f64 = 0.1;

    pub fn new() -> Self {
        CursorFollower {
            cursor: [0.0, 0.0],
            follower: [0.0, 0.0],
        }
    }

    pub fn step(&mut self, pointer: &Pointer) {
        self.cursor = ease_toward(self.cursor, pointer.pos, Self::CURSOR_EASING);
        self.follower = ease_toward(self.follower, pointer.pos, Self::FOLLOWER_EASING);
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ease_toward(current: Vector2<f64>, target: Vector2<f64>, factor: f64) -> Vector2<f64> {
    let gap = vecmath::vec2_sub(target, current);
    vecmath::vec2_add(current, vecmath::vec2_scale(gap, factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_starts_at_origin() {
        let pointer = Pointer::new();
        assert_eq!(pointer.pos, [0.0, 0.0]);
        assert_eq!(pointer.distance_to([3.0, 4.0]), 5.0);
    }

    #[test]
    fn follower_lags_behind_cursor() {
        let mut pointer = Pointer::new();
        pointer.move_to(100.0, 50.0);
        let mut follower = CursorFollower::new();
        follower.step(&pointer);
        assert_eq!(follower.cursor, [20.0, 10.0]);
        assert_eq!(follower.follower, [10.0, 5.0]);

        for _ in 0..200 {
            follower.step(&pointer);
        }
        assert!(pointer.distance_to(follower.follower) < 1e-6);
    }
}
