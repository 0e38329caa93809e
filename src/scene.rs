use std::f64::consts::TAU;

use rand::Rng;

use crate::clock::{Clock, Tick};
use crate::config::{CycleConfig, SceneConfig};
use crate::error::Result;
use crate::palette;
use crate::shapes::{Band, Drift, Pose, Shape, SteppedPattern, Triangle};
use crate::surface::Surface;

/// Every motif on screen plus the clock that moves them.
///
/// Shapes are rebuilt wholesale whenever the viewport changes; nothing about
/// an individual shape survives a rebuild.
#[derive(Clone, Debug)]
pub struct Scene {
    width: f64,
    height: f64,
    bands: Vec<Band>,
    triangles: Vec<Triangle>,
    patterns: Vec<SteppedPattern>,
    clock: Clock,
    cycle: Option<CycleConfig>,
}

impl Scene {
    /// Lay out a fresh scene. Fails when `config` does not validate.
    pub fn build<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let mut scene = Self {
            width,
            height,
            bands: Vec::new(),
            triangles: Vec::new(),
            patterns: Vec::new(),
            clock: Clock::new(),
            cycle: config.cycle.clone(),
        };
        scene.populate(config, rng);
        Ok(scene)
    }

    /// Replace every shape for a new viewport. The clock keeps running
    /// unless `reset_clock_on_resize` is set. An invalid `config` leaves the
    /// scene untouched.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        width: f64,
        height: f64,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Result<()> {
        config.validate()?;
        self.width = width;
        self.height = height;
        self.cycle = config.cycle.clone();
        if config.reset_clock_on_resize {
            self.clock.reset();
        }
        self.populate(config, rng);
        log::debug!(
            "scene rebuilt at {width}x{height}: {} bands, {} triangles, {} patterns",
            self.bands.len(),
            self.triangles.len(),
            self.patterns.len()
        );
        Ok(())
    }

    fn populate<R: Rng + ?Sized>(&mut self, config: &SceneConfig, rng: &mut R) {
        let (width, height) = (self.width, self.height);
        let cycle = config.cycle.as_ref();

        let b = &config.bands;
        let gap = height / (b.count + 1) as f64;
        self.bands = (0..b.count)
            .map(|i| {
                let y = gap * (i + 1) as f64;
                let color = palette::pick(rng, &b.colors);
                let speed = b.speed.sample(rng);
                let phase = rng.gen_range(0.0..TAU);
                Band::new(y, width, color, speed, phase, b)
            })
            .collect();

        let t = &config.triangles;
        let gap = width / (t.count + 1) as f64;
        self.triangles = (0..t.count)
            .map(|i| {
                let x = gap * (i + 1) as f64 + (rng.gen::<f64>() - 0.5) * t.jitter;
                let y = rng.gen::<f64>() * height;
                let size = t.size.sample(rng);
                let color = palette::pick(rng, &t.colors);
                let speed = t.speed.sample(rng);
                let phase = rng.gen_range(0.0..TAU);
                let drift = match cycle {
                    Some(c) => Drift {
                        dx: symmetric(rng, c.drift),
                        dy: symmetric(rng, c.drift),
                        growth: symmetric(rng, c.growth),
                        spin: symmetric(rng, c.spin),
                    },
                    None => Drift::default(),
                };
                let spawn = Pose {
                    x,
                    y,
                    size,
                    rotation: 0.0,
                };
                Triangle::new(spawn, color, speed, phase, drift, t)
            })
            .collect();

        let p = &config.patterns;
        let gap = height / (p.count + 1) as f64;
        self.patterns = (0..p.count)
            .map(|i| {
                let x = rng.gen::<f64>() * width * p.spread;
                let y = gap * (i + 1) as f64;
                let steps = rng.gen_range(p.min_steps..=p.max_steps);
                let step_size = p.step_size.sample(rng);
                let color = palette::pick(rng, &p.colors);
                let speed = p.speed.sample(rng);
                let phase = rng.gen_range(0.0..TAU);
                let drift_y = cycle.map_or(0.0, |c| symmetric(rng, c.drift));
                SteppedPattern::new(x, y, steps, step_size, color, speed, phase, drift_y, p)
            })
            .collect();
    }

    /// Advance the clock one frame and move every shape.
    pub fn tick(&mut self) -> Tick {
        let tick = self.clock.tick(self.cycle.as_ref());
        for band in &mut self.bands {
            band.update(&tick);
        }
        for triangle in &mut self.triangles {
            triangle.update(&tick);
        }
        for pattern in &mut self.patterns {
            pattern.update(&tick);
        }
        tick
    }

    /// Stroke every shape: bands, then triangles, then patterns.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let shapes = self
            .bands
            .iter()
            .map(|s| s as &dyn Shape)
            .chain(self.triangles.iter().map(|s| s as &dyn Shape))
            .chain(self.patterns.iter().map(|s| s as &dyn Shape));
        for shape in shapes {
            shape.draw(surface);
        }
    }

    /// One animation frame: clear, advance, redraw.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);
        self.tick();
        self.draw(surface);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn patterns(&self) -> &[SteppedPattern] {
        &self.patterns
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }
}

/// Uniform in `[-max, max]`.
fn symmetric<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    rng.gen_range(-max..=max)
}
