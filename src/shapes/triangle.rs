use crate::clock::Tick;
use crate::config::TriangleConfig;
use crate::palette::Color;
use crate::surface::Surface;

use super::rewind::{Blend, Rewind};
use super::Shape;

/// cos(30°): half the base width of an apex-up triangle, per unit size.
const COS_30: f64 = 0.866_025_403_784_438_6;

/// Position, size and rotation a triangle oscillates around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotation: f64,
}

impl Blend for Pose {
    fn blend(self, target: Pose, amount: f64) -> Pose {
        Pose {
            x: self.x.blend(target.x, amount),
            y: self.y.blend(target.y, amount),
            size: self.size.blend(target.size, amount),
            rotation: self.rotation.blend(target.rotation, amount),
        }
    }
}

/// Per-frame base wander used only in cycle mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Drift {
    pub dx: f64,
    pub dy: f64,
    /// Relative size change per frame.
    pub growth: f64,
    pub spin: f64,
}

impl Pose {
    fn drifted(self, drift: &Drift) -> Pose {
        Pose {
            x: self.x + drift.dx,
            y: self.y + drift.dy,
            size: self.size * (1.0 + drift.growth),
            rotation: self.rotation + drift.spin,
        }
    }
}

/// Apex-up stroked triangle that breathes, sways and bobs.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    spawn: Pose,
    base: Pose,
    current: Pose,
    drift: Drift,
    rewind: Rewind<Pose>,
    color: Color,
    speed: f64,
    phase: f64,
    breathing: f64,
    sway: f64,
    lift: f64,
    line_width: f64,
}

impl Triangle {
    pub fn new(
        spawn: Pose,
        color: Color,
        speed: f64,
        phase: f64,
        drift: Drift,
        config: &TriangleConfig,
    ) -> Self {
        Self {
            spawn,
            base: spawn,
            current: spawn,
            drift,
            rewind: Rewind::default(),
            color,
            speed,
            phase,
            breathing: config.breathing,
            sway: config.sway,
            lift: config.lift,
            line_width: config.line_width,
        }
    }

    pub fn spawn(&self) -> Pose {
        self.spawn
    }

    pub fn base(&self) -> Pose {
        self.base
    }

    /// Pose as last drawn.
    pub fn current(&self) -> Pose {
        self.current
    }

    pub fn is_rewinding(&self) -> bool {
        self.rewind.is_active()
    }

    pub fn breathing(&self) -> f64 {
        self.breathing
    }

    pub fn sway(&self) -> f64 {
        self.sway
    }

    pub fn lift(&self) -> f64 {
        self.lift
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Shape for Triangle {
    fn update(&mut self, tick: &Tick) {
        if let Some(cycle) = &tick.cycle {
            self.base = match self.rewind.step(cycle, self.base, self.spawn) {
                Some(base) => base,
                None => self.base.drifted(&self.drift),
            };
        }

        let wave = (tick.time * self.speed + self.phase).sin();
        let slow = (tick.time * self.speed * 0.5 + self.phase).sin();
        self.current = Pose {
            x: self.base.x,
            y: self.base.y + self.lift * wave,
            size: self.base.size * (1.0 + self.breathing * wave),
            rotation: self.base.rotation + self.sway * slow,
        };
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let Pose {
            x,
            y,
            size,
            rotation,
        } = self.current;
        surface.save();
        surface.translate(x, y);
        surface.rotate(rotation);
        surface.set_stroke(self.color, self.line_width);
        surface.begin_path();
        surface.move_to(0.0, -size);
        surface.line_to(-size * COS_30, size * 0.5);
        surface.line_to(size * COS_30, size * 0.5);
        surface.close_path();
        surface.stroke();
        surface.restore();
    }
}
