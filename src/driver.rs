//! Run/pause state machine on top of a per-frame callback.

use crate::error::Result;

/// Host-side frame scheduling (`requestAnimationFrame` in the browser).
pub trait FrameHost {
    type Handle: Copy;

    /// Register the frame callback once more.
    fn request_frame(&mut self) -> Result<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Paused,
}

/// Keeps at most one frame registration outstanding.
#[derive(Debug)]
pub struct Driver<H> {
    state: DriverState,
    pending: Option<H>,
}

impl<H: Copy> Default for Driver<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy> Driver<H> {
    pub fn new() -> Self {
        Self {
            state: DriverState::Paused,
            pending: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    /// Enter `Running` and schedule a frame, replacing any registration
    /// still outstanding.
    pub fn start<F>(&mut self, host: &mut F) -> Result<()>
    where
        F: FrameHost<Handle = H> + ?Sized,
    {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        self.pending = Some(host.request_frame()?);
        self.state = DriverState::Running;
        Ok(())
    }

    /// Enter `Paused` and drop the outstanding registration.
    pub fn stop<F>(&mut self, host: &mut F)
    where
        F: FrameHost<Handle = H> + ?Sized,
    {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        self.state = DriverState::Paused;
    }

    /// The scheduled callback has fired. Returns whether to render.
    pub fn frame_fired(&mut self) -> bool {
        self.pending = None;
        self.state == DriverState::Running
    }

    /// Request the next frame when running and none is outstanding.
    pub fn schedule_next<F>(&mut self, host: &mut F) -> Result<()>
    where
        F: FrameHost<Handle = H> + ?Sized,
    {
        if self.state == DriverState::Running && self.pending.is_none() {
            self.pending = Some(host.request_frame()?);
        }
        Ok(())
    }
}
