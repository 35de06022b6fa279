// Drawing target for the effects. The browser implementation wraps a 2D
// canvas context; tests use the recording surface below.

use crate::color::Color;
use crate::error::FxError;
use vecmath::Vector2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, opacity: f64) -> Result<(), FxError>;
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color, opacity: f64);
}

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2d context from a canvas already on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FxError> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| FxError::NoContext("2d".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoContext("2d".to_owned()))?;
        Ok(CanvasRenderer { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasRenderer {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    // Setting either dimension wipes the bitmap; the next frame redraws it
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, opacity: f64) -> Result<(), FxError> {
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius.max(0.0), 0.0, std::f64::consts::TAU)?;
        self.context.set_fill_style_str(&color.to_css(opacity));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color, opacity: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style_str(&color.to_css(opacity));
        self.context.set_line_width(width);
        self.context.stroke();
    }
}
