use crate::config::CycleConfig;

/// Frame counter driving every oscillation. One tick is one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    frame: u64,
}

/// Snapshot handed to shapes on each update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Frames elapsed, as the argument of the sinusoids.
    pub time: f64,
    /// Present only when cyclic reset is enabled.
    pub cycle: Option<CycleTick>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleTick {
    /// Which cycle this frame falls in.
    pub index: u64,
    /// Fraction of the current cycle elapsed, in `[0, 1)`.
    pub progress: f64,
    pub threshold: f64,
    pub reset_frames: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// Advance one frame.
    pub fn tick(&mut self, cycle: Option<&CycleConfig>) -> Tick {
        self.frame += 1;
        Tick {
            time: self.frame as f64,
            cycle: cycle.map(|c| CycleTick {
                index: self.frame / c.frames,
                progress: (self.frame % c.frames) as f64 / c.frames as f64,
                threshold: c.threshold,
                reset_frames: c.reset_frames,
            }),
        }
    }
}
