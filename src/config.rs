//! Scene tuning. Defaults reproduce the Mimbre Records page; the browser glue
//! accepts JSON overrides from the canvas `data-backdrop` attribute.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};
use crate::palette::Color;

/// Id of the canvas element the backdrop draws on.
pub const CANVAS_ID: &str = "geometric-canvas";

/// Attribute on the canvas holding optional JSON overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-backdrop";

/// Closed interval `[min, max]` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    fn check(&self, what: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(BackdropError::config(format!(
                "{what}: span [{}, {}] must be finite with min <= max",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub bands: BandConfig,
    pub triangles: TriangleConfig,
    pub patterns: PatternConfig,
    /// Enables the periodic ease-back-to-spawn behaviour.
    pub cycle: Option<CycleConfig>,
    /// Restart the clock at zero whenever the scene is rebuilt.
    pub reset_clock_on_resize: bool,
    /// Fixed RNG seed; random when absent.
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfig {
    pub count: usize,
    /// Radians per frame.
    pub speed: Span,
    /// Peak vertical offset in pixels.
    pub amplitude: f64,
    pub line_width: f64,
    pub colors: Vec<Color>,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            count: 4,
            speed: Span::new(0.0003, 0.0005),
            amplitude: 3.0,
            line_width: 2.0,
            colors: Color::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriangleConfig {
    pub count: usize,
    /// Apex-to-centre distance in pixels.
    pub size: Span,
    pub speed: Span,
    /// Total horizontal jitter around each evenly spaced slot.
    pub jitter: f64,
    /// Relative size modulation.
    pub breathing: f64,
    /// Peak rotation in radians.
    pub sway: f64,
    /// Peak vertical offset in pixels.
    pub lift: f64,
    pub line_width: f64,
    pub colors: Vec<Color>,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            count: 8,
            size: Span::new(15.0, 40.0),
            speed: Span::new(0.0002, 0.0005),
            jitter: 100.0,
            breathing: 0.1,
            sway: 0.05,
            lift: 2.0,
            line_width: 1.5,
            colors: Color::TRIANGLES.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    pub count: usize,
    pub min_steps: u32,
    pub max_steps: u32,
    pub step_size: Span,
    pub speed: Span,
    pub amplitude: f64,
    /// Patterns start within this leftmost fraction of the width.
    pub spread: f64,
    pub line_width: f64,
    pub colors: Vec<Color>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            count: 3,
            min_steps: 3,
            max_steps: 6,
            step_size: Span::new(20.0, 35.0),
            speed: Span::new(0.0004, 0.0006),
            amplitude: 4.0,
            spread: 0.3,
            line_width: 1.5,
            colors: Color::PATTERNS.to_vec(),
        }
    }
}

/// Periodic reset: shapes drift during a cycle and ease back to where they
/// spawned near its end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CycleConfig {
    /// Cycle length in frames.
    pub frames: u64,
    /// Progress past which the reset starts.
    pub threshold: f64,
    /// Length of the ease-back in frames.
    pub reset_frames: u32,
    /// Max base drift in pixels per frame, per axis.
    pub drift: f64,
    /// Max relative base size growth per frame.
    pub growth: f64,
    /// Max base rotation change in radians per frame.
    pub spin: f64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            frames: 5400,
            threshold: 0.95,
            reset_frames: 200,
            drift: 0.05,
            growth: 0.0001,
            spin: 0.0005,
        }
    }
}

impl SceneConfig {
    /// Parse overrides and validate the result. Missing fields keep their
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let b = &self.bands;
        b.speed.check("bands.speed")?;
        non_negative(b.amplitude, "bands.amplitude")?;
        positive(b.line_width, "bands.line_width")?;
        colors(b.count, &b.colors, "bands.colors")?;

        let t = &self.triangles;
        t.size.check("triangles.size")?;
        t.speed.check("triangles.speed")?;
        non_negative(t.size.min, "triangles.size.min")?;
        non_negative(t.jitter, "triangles.jitter")?;
        non_negative(t.sway, "triangles.sway")?;
        non_negative(t.lift, "triangles.lift")?;
        positive(t.line_width, "triangles.line_width")?;
        if !(0.0..1.0).contains(&t.breathing) {
            return Err(BackdropError::config("triangles.breathing must be in [0, 1)"));
        }
        colors(t.count, &t.colors, "triangles.colors")?;

        let p = &self.patterns;
        if p.min_steps > p.max_steps {
            return Err(BackdropError::config("patterns.min_steps exceeds max_steps"));
        }
        p.step_size.check("patterns.step_size")?;
        p.speed.check("patterns.speed")?;
        non_negative(p.amplitude, "patterns.amplitude")?;
        positive(p.line_width, "patterns.line_width")?;
        if !(0.0..=1.0).contains(&p.spread) {
            return Err(BackdropError::config("patterns.spread must be in [0, 1]"));
        }
        colors(p.count, &p.colors, "patterns.colors")?;

        if let Some(c) = &self.cycle {
            if !(c.threshold > 0.0 && c.threshold < 1.0) {
                return Err(BackdropError::config("cycle.threshold must be in (0, 1)"));
            }
            if c.frames == 0 {
                return Err(BackdropError::config("cycle.frames must be non-zero"));
            }
            // Progress peaks at (frames - 1) / frames; it must get past the
            // threshold or the reset never fires and drift is unbounded.
            if (c.frames - 1) as f64 / c.frames as f64 <= c.threshold {
                return Err(BackdropError::config(format!(
                    "cycle.frames = {} never reaches threshold {}",
                    c.frames, c.threshold
                )));
            }
            if c.reset_frames == 0 {
                return Err(BackdropError::config("cycle.reset_frames must be non-zero"));
            }
            non_negative(c.drift, "cycle.drift")?;
            non_negative(c.growth, "cycle.growth")?;
            non_negative(c.spin, "cycle.spin")?;
        }
        Ok(())
    }
}

fn non_negative(value: f64, what: &str) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BackdropError::config(format!("{what} must be finite and >= 0")))
    }
}

fn positive(value: f64, what: &str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BackdropError::config(format!("{what} must be finite and > 0")))
    }
}

fn colors(count: usize, colors: &[Color], what: &str) -> Result<()> {
    if count > 0 && colors.is_empty() {
        return Err(BackdropError::config(format!("{what} is empty")));
    }
    Ok(())
}
