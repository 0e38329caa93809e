use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::{BackdropError, Result};
use crate::palette::Color;
use crate::surface::Surface;

/// Match the drawing surface to the viewport; returns the new size.
pub fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Result<(f64, f64)> {
    let width = window.inner_width().map_err(BackdropError::js)?;
    let height = window.inner_height().map_err(BackdropError::js)?;
    canvas.set_width(width.as_f64().unwrap_or(0.0) as u32);
    canvas.set_height(height.as_f64().unwrap_or(0.0) as u32);
    Ok((f64::from(canvas.width()), f64::from(canvas.height())))
}

/// [`Surface`] over a browser 2d context.
pub struct Canvas2d<'a>(pub &'a CanvasRenderingContext2d);

impl Surface for Canvas2d<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.0.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.0.save();
    }

    fn restore(&mut self) {
        self.0.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        // Only throws for non-finite arguments, which the shapes never produce.
        if let Err(err) = self.0.translate(x, y) {
            log::debug!("translate({x}, {y}) rejected: {err:?}");
        }
    }

    fn rotate(&mut self, angle: f64) {
        if let Err(err) = self.0.rotate(angle) {
            log::debug!("rotate({angle}) rejected: {err:?}");
        }
    }

    fn set_stroke(&mut self, color: Color, line_width: f64) {
        self.0.set_stroke_style_str(color.css());
        self.0.set_line_width(line_width);
    }

    fn begin_path(&mut self) {
        self.0.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.0.close_path();
    }

    fn stroke(&mut self) {
        self.0.stroke();
    }
}
