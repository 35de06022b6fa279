//! Numeric side of the page's hover and scroll effects.
//!
//! The page script owns the elements and their styles; it hands pointer,
//! scroll and rect values in and applies what comes back.

use crate::pointer::{CursorFollower, Pointer};
use wasm_bindgen::prelude::*;

pub const PARALLAX_SPEED_STEP: f64 = 20.0;
pub const MAGNETIC_PULL: f64 = 0.2;
pub const TILT_DIVISOR: f64 = 20.0;
pub const REVEAL_POINT: f64 = 150.0;
pub const REVEAL_STAGGER_MS: f64 = 50.0;
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const HEADING_REVEAL_FRACTION: f64 = 0.9;
pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;
pub const RIPPLE_LIFETIME_MS: f64 = 600.0;
pub const PAGE_FADE_OUT_MS: f64 = 300.0;
pub const PAGE_FADE_IN_DELAY_MS: f64 = 100.0;

/// Element bounds as returned by `getBoundingClientRect()`.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[wasm_bindgen]
impl Rect {
    #[wasm_bindgen(constructor)]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }
}

/// Pair of numbers handed back to JS, e.g. a translate offset.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

// Layer `layer` (0-based) moves (layer + 1) * 20px across the viewport
#[wasm_bindgen]
pub fn parallax_offset(pointer_x: f64, pointer_y: f64, viewport_width: f64, viewport_height: f64, layer: u32) -> Offset {
    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return Offset { x: 0.0, y: 0.0 };
    }
    let speed = (layer as f64 + 1.0) * PARALLAX_SPEED_STEP;
    Offset {
        x: (pointer_x / viewport_width - 0.5) * speed,
        y: (pointer_y / viewport_height - 0.5) * speed,
    }
}

#[wasm_bindgen]
pub fn magnetic_offset(pointer_x: f64, pointer_y: f64, rect: &Rect) -> Offset {
    Offset {
        x: (pointer_x - rect.left - rect.width / 2.0) * MAGNETIC_PULL,
        y: (pointer_y - rect.top - rect.height / 2.0) * MAGNETIC_PULL,
    }
}

/// Card tilt in degrees: `x` is the rotateX angle, `y` the rotateY angle.
#[wasm_bindgen]
pub fn tilt_angles(pointer_x: f64, pointer_y: f64, rect: &Rect) -> Offset {
    let local_x = pointer_x - rect.left;
    let local_y = pointer_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    Offset {
        x: (local_y - center_y) / TILT_DIVISOR,
        y: (center_x - local_x) / TILT_DIVISOR,
    }
}

/// How far the page has been scrolled, in percent. A page shorter than the
/// viewport reports 0.
#[wasm_bindgen]
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).max(0.0).min(100.0)
}

#[wasm_bindgen]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_POINT
}

#[wasm_bindgen]
pub fn reveal_delay_ms(index: u32) -> f64 {
    index as f64 * REVEAL_STAGGER_MS
}

#[wasm_bindgen]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

// Headings fade in once their top is within the upper 90% of the viewport
#[wasm_bindgen]
pub fn heading_visible(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * HEADING_REVEAL_FRACTION
}

/// True when any part of `[top, bottom]` overlaps the viewport.
#[wasm_bindgen]
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Document offset to scroll to for an in-page anchor, leaving room for the
/// fixed header.
#[wasm_bindgen]
pub fn anchor_scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - ANCHOR_HEADER_OFFSET
}

/// Square ripple centred on the click, big enough to cover the button.
/// `x`/`y` are relative to the button's top-left corner.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

#[wasm_bindgen]
pub fn ripple_geometry(click_x: f64, click_y: f64, rect: &Rect) -> Ripple {
    let size = rect.width.max(rect.height);
    Ripple {
        size,
        x: click_x - rect.left - size / 2.0,
        y: click_y - rect.top - size / 2.0,
    }
}

#[wasm_bindgen]
pub fn ripple_lifetime_ms() -> f64 {
    RIPPLE_LIFETIME_MS
}

/// Whether clicking `href` should fade the page out before navigating:
/// only same-host links that are not fragments, `mailto:` or `tel:`.
#[wasm_bindgen]
pub fn should_transition(href: &str, link_host: &str, page_host: &str) -> bool {
    let href = href.trim();
    if href.starts_with('#') || href.starts_with("mailto") || href.starts_with("tel") {
        return false;
    }
    link_host == page_host
}

#[wasm_bindgen]
pub fn page_fade_out_ms() -> f64 {
    PAGE_FADE_OUT_MS
}

#[wasm_bindgen]
pub fn page_fade_in_delay_ms() -> f64 {
    PAGE_FADE_IN_DELAY_MS
}

/// Stat counter that climbs to `target` in roughly two seconds of 16ms frames.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub const DURATION_MS: f64 = 2000.0;
    pub const FRAME_MS: f64 = 16.0;
}

#[wasm_bindgen]
impl CounterAnimation {
    #[wasm_bindgen(constructor)]
    pub fn new(target: f64) -> CounterAnimation {
        let target = if target.is_finite() { target } else { 0.0 };
        CounterAnimation {
            target,
            step: target / (Self::DURATION_MS / Self::FRAME_MS),
            current: 0.0,
            done: false,
        }
    }

    /// Value to display this frame; the last call yields the exact target.
    pub fn tick(&mut self) -> f64 {
        if self.done {
            return self.target;
        }
        self.current += self.step;
        if self.step > 0.0 && self.current < self.target {
            self.current.floor()
        } else {
            self.done = true;
            self.target
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Custom cursor state for the page: feed it pointer moves, step it once per
/// frame, and read the eased positions back.
#[wasm_bindgen]
#[derive(Default)]
pub struct CursorTracker {
    pointer: Pointer,
    follower: CursorFollower,
}

#[wasm_bindgen]
impl CursorTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CursorTracker {
        CursorTracker::default()
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn step(&mut self) {
        self.follower.step(&self.pointer);
    }

    pub fn cursor(&self) -> Offset {
        Offset {
            x: self.follower.cursor[0],
            y: self.follower.cursor[1],
        }
    }

    pub fn follower(&self) -> Offset {
        Offset {
            x: self.follower.follower[0],
            y: self.follower.follower[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_is_zero_at_viewport_center() {
        assert_eq!(parallax_offset(500.0, 400.0, 1000.0, 800.0, 2), Offset { x: 0.0, y: 0.0 });
        let corner = parallax_offset(1000.0, 0.0, 1000.0, 800.0, 1);
        assert_eq!(corner, Offset { x: 20.0, y: -20.0 });
        assert_eq!(parallax_offset(10.0, 10.0, 0.0, 0.0, 0), Offset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn magnetic_pull_is_a_fifth_of_the_offset() {
        let rect = Rect::new(100.0, 100.0, 200.0, 50.0);
        let offset = magnetic_offset(250.0, 125.0, &rect);
        assert!((offset.x - 10.0).abs() < 1e-12);
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn tilt_leans_toward_the_pointer() {
        let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
        let center = tilt_angles(100.0, 100.0, &rect);
        assert_eq!(center, Offset { x: 0.0, y: 0.0 });

        let top_left = tilt_angles(0.0, 0.0, &rect);
        assert_eq!(top_left, Offset { x: -5.0, y: 5.0 });
    }

    #[test]
    fn scroll_progress_is_clamped_percent() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn reveal_waits_for_the_reveal_point() {
        assert!(should_reveal(600.0, 800.0));
        assert!(!should_reveal(650.0, 800.0));
        assert_eq!(reveal_delay_ms(3), 150.0);
    }

    #[test]
    fn counter_reaches_target_exactly() {
        let mut counter = CounterAnimation::new(250.0);
        let mut shown = Vec::new();
        while !counter.is_done() {
            shown.push(counter.tick());
        }
        assert_eq!(shown.last(), Some(&250.0));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert!(shown.iter().all(|v| v.fract() == 0.0));
        assert_eq!(shown.len(), 125);
    }

    #[test]
    fn counter_with_zero_target_finishes_at_once() {
        let mut counter = CounterAnimation::new(0.0);
        assert_eq!(counter.tick(), 0.0);
        assert!(counter.is_done());
    }

    #[test]
    fn tracker_eases_toward_pointer() {
        let mut tracker = CursorTracker::new();
        tracker.pointer_moved(50.0, 100.0);
        tracker.step();
        assert_eq!(tracker.cursor(), Offset { x: 10.0, y: 20.0 });
        assert_eq!(tracker.follower(), Offset { x: 5.0, y: 10.0 });
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn headings_show_in_upper_ninety_percent() {
        assert!(heading_visible(700.0, 800.0));
        assert!(!heading_visible(720.0, 800.0));
        assert!(heading_visible(-40.0, 800.0));
    }

    #[test]
    fn viewport_overlap() {
        assert!(in_viewport(100.0, 200.0, 800.0));
        assert!(in_viewport(-50.0, 10.0, 800.0));
        assert!(!in_viewport(-200.0, 0.0, 800.0));
        assert!(!in_viewport(800.0, 900.0, 800.0));
    }

    #[test]
    fn anchor_target_clears_the_header() {
        assert_eq!(anchor_scroll_target(500.0, 1200.0), 1620.0);
        assert_eq!(anchor_scroll_target(0.0, 0.0), -80.0);
    }

    #[test]
    fn ripple_covers_the_button_around_the_click() {
        let rect = Rect::new(100.0, 50.0, 120.0, 40.0);
        let ripple = ripple_geometry(160.0, 70.0, &rect);
        assert_eq!(ripple, Ripple { size: 120.0, x: 0.0, y: -40.0 });
        assert_eq!(ripple_lifetime_ms(), 600.0);
    }

    #[test]
    fn only_same_host_pages_fade_out() {
        assert!(should_transition("/about.html", "example.com", "example.com"));
        assert!(!should_transition("https://other.org/", "other.org", "example.com"));
        assert!(!should_transition("#contact", "example.com", "example.com"));
        assert!(!should_transition("mailto:hi@example.com", "", "example.com"));
        assert!(!should_transition("tel:+821012345678", "", "example.com"));
        assert_eq!((page_fade_out_ms(), page_fade_in_delay_ms()), (300.0, 100.0));
    }
}
