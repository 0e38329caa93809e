use crate::clock::Tick;
use crate::config::PatternConfig;
use crate::palette::Color;
use crate::surface::Surface;

use super::rewind::Rewind;
use super::Shape;

/// Staircase polyline descending to the right from `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SteppedPattern {
    x: f64,
    spawn_y: f64,
    base_y: f64,
    y: f64,
    steps: u32,
    step_size: f64,
    /// Base Y change per frame in cycle mode.
    drift_y: f64,
    rewind: Rewind<f64>,
    color: Color,
    speed: f64,
    phase: f64,
    amplitude: f64,
    line_width: f64,
}

impl SteppedPattern {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f64,
        y: f64,
        steps: u32,
        step_size: f64,
        color: Color,
        speed: f64,
        phase: f64,
        drift_y: f64,
        config: &PatternConfig,
    ) -> Self {
        Self {
            x,
            spawn_y: y,
            base_y: y,
            y,
            steps,
            step_size,
            drift_y,
            rewind: Rewind::default(),
            color,
            speed,
            phase,
            amplitude: config.amplitude,
            line_width: config.line_width,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn spawn_y(&self) -> f64 {
        self.spawn_y
    }

    pub fn base_y(&self) -> f64 {
        self.base_y
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn is_rewinding(&self) -> bool {
        self.rewind.is_active()
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Shape for SteppedPattern {
    fn update(&mut self, tick: &Tick) {
        if let Some(cycle) = &tick.cycle {
            self.base_y = match self.rewind.step(cycle, self.base_y, self.spawn_y) {
                Some(y) => y,
                None => self.base_y + self.drift_y,
            };
        }
        self.y = self.base_y + self.amplitude * (tick.time * self.speed + self.phase).sin();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_stroke(self.color, self.line_width);
        surface.begin_path();

        let (mut x, mut y) = (self.x, self.y);
        surface.move_to(x, y);
        for _ in 0..self.steps {
            x += self.step_size;
            surface.line_to(x, y);
            y += self.step_size;
            surface.line_to(x, y);
        }

        surface.stroke();
    }
}
