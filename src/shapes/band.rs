use crate::clock::Tick;
use crate::config::BandConfig;
use crate::palette::Color;
use crate::surface::Surface;

use super::Shape;

/// Full-width horizontal line bobbing around `base_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    base_y: f64,
    y: f64,
    width: f64,
    color: Color,
    speed: f64,
    phase: f64,
    amplitude: f64,
    line_width: f64,
}

impl Band {
    pub fn new(
        base_y: f64,
        width: f64,
        color: Color,
        speed: f64,
        phase: f64,
        config: &BandConfig,
    ) -> Self {
        Self {
            base_y,
            y: base_y,
            width,
            color,
            speed,
            phase,
            amplitude: config.amplitude,
            line_width: config.line_width,
        }
    }

    pub fn base_y(&self) -> f64 {
        self.base_y
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Shape for Band {
    fn update(&mut self, tick: &Tick) {
        self.y = self.base_y + self.amplitude * (tick.time * self.speed + self.phase).sin();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_stroke(self.color, self.line_width);
        surface.begin_path();
        surface.move_to(0.0, self.y);
        surface.line_to(self.width, self.y);
        surface.stroke();
    }
}
