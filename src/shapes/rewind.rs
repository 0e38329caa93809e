//! Ease-back-to-spawn state shared by triangles and stepped patterns.

use crate::clock::CycleTick;

/// Cubic ease-out: fast start, gentle landing. `p` is clamped to `[0, 1]`.
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Values that can be blended toward a target.
pub trait Blend: Copy {
    /// `self` at `amount == 0`, `target` at `amount == 1`.
    fn blend(self, target: Self, amount: f64) -> Self;
}

impl Blend for f64 {
    fn blend(self, target: f64, amount: f64) -> f64 {
        self + (target - self) * amount
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase<T> {
    Idle,
    Easing { from: T, elapsed: u32 },
}

/// Tracks whether a shape is easing its base back to spawn.
///
/// A rewind starts on the first tick of a cycle whose progress exceeds the
/// threshold and lasts `reset_frames` ticks. It fires at most once per cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rewind<T> {
    phase: Phase<T>,
    last_cycle: Option<u64>,
}

impl<T: Blend> Default for Rewind<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            last_cycle: None,
        }
    }
}

impl<T: Blend> Rewind<T> {
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Easing { .. })
    }

    /// Advance one tick. Returns the base to use while rewinding, or `None`
    /// when the shape is free to drift.
    pub fn step(&mut self, cycle: &CycleTick, current: T, spawn: T) -> Option<T> {
        if let Phase::Idle = self.phase {
            if cycle.progress > cycle.threshold && self.last_cycle != Some(cycle.index) {
                self.last_cycle = Some(cycle.index);
                self.phase = Phase::Easing {
                    from: current,
                    elapsed: 0,
                };
            }
        }

        let Phase::Easing { from, elapsed } = &mut self.phase else {
            return None;
        };
        *elapsed += 1;
        let frames = cycle.reset_frames.max(1);
        if *elapsed >= frames {
            self.phase = Phase::Idle;
            return Some(spawn);
        }
        let p = f64::from(*elapsed) / f64::from(frames);
        Some(from.blend(spawn, ease_out_cubic(p)))
    }
}
