// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Brand gradient endpoints; particles pick one of the two at random.
pub const PALETTE: [Color; 2] = [Color::from_u32(0x667eeaff), Color::from_u32(0x764ba2ff)];

/// Line color for the connective edges between particles.
pub const LINK_COLOR: Color = PALETTE[0];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Own alpha channel scaled by `opacity`, clamped to [0, 1]
    pub fn alpha_with(&self, opacity: f64) -> f64 {
        let own = self.a as f64 / 255.0;
        (own * opacity).max(0.0).min(1.0)
    }

    /// CSS `rgba()` string as accepted by the canvas fill and stroke styles.
    pub fn to_css(&self, opacity: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.alpha_with(opacity)
        )
    }
}
