use crate::palette::Color;

/// Stroke-only 2-D path drawing, shaped after `CanvasRenderingContext2d`.
///
/// Shapes draw through this trait so the same code renders in the browser
/// and into recorders in tests.
pub trait Surface {
    /// Wipe the whole `width` x `height` area.
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn set_stroke(&mut self, color: Color, line_width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
}
