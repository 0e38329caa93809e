#![allow(dead_code)]

use andean_backdrop::palette::Color;
use andean_backdrop::{Scene, SceneConfig, Surface};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Stroke(Color, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    StrokePath,
}

/// Surface that remembers every call instead of drawing.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    /// Split the recording into paths, each running from `BeginPath` to the
    /// `StrokePath` that ends it.
    pub fn paths(&self) -> Vec<Vec<Op>> {
        let mut paths = Vec::new();
        let mut current: Option<Vec<Op>> = None;
        for op in &self.ops {
            match op {
                Op::BeginPath => current = Some(Vec::new()),
                Op::StrokePath => paths.extend(current.take()),
                other => {
                    if let Some(path) = current.as_mut() {
                        path.push(other.clone());
                    }
                }
            }
        }
        paths
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear(width, height));
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate(angle));
    }
    fn set_stroke(&mut self, color: Color, line_width: f64) {
        self.ops.push(Op::Stroke(color, line_width));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::StrokePath);
    }
}

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn scene(width: f64, height: f64, config: &SceneConfig, seed: u64) -> Scene {
    Scene::build(width, height, config, &mut rng(seed)).unwrap()
}
