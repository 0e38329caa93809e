//! The three motif kinds of the backdrop.

mod band;
pub mod rewind;
mod stepped;
mod triangle;

pub use band::Band;
pub use stepped::SteppedPattern;
pub use triangle::{Drift, Pose, Triangle};

use crate::clock::Tick;
use crate::surface::Surface;

/// A motif that moves with the clock and strokes itself.
pub trait Shape {
    /// Recompute the current geometry for this tick.
    fn update(&mut self, tick: &Tick);

    fn draw(&self, surface: &mut dyn Surface);
}
