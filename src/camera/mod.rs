//! Camera collaborator.
//!
//! The shell never looks inside the camera. It only uses the capability set
//! below: a readiness query plus a getter/setter per burst field.

mod sim;

use alloc::sync::Arc;

use crate::hal::Mutex;

pub use sim::{BurstSettings, SimCamera};

/// Camera that may be shared between the shell and a capture path.
pub type SharedCamera<C> = Arc<Mutex<C>>;

/// Capture pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Idle,
    Capturing,
    Storing,
}

impl CameraState {
    pub fn is_idle(self) -> bool {
        self == CameraState::Idle
    }
}

/// Burst-related capabilities of a camera.
pub trait Camera {
    fn state(&self) -> CameraState;

    fn burst_enable(&self) -> bool;
    fn set_burst_enable(&mut self, enable: bool);

    /// Fast burst: frames are taken back to back, ignoring the interval.
    fn burst_fast(&self) -> bool;
    fn set_burst_fast(&mut self, fast: bool);

    fn burst_frames(&self) -> u16;
    fn set_burst_frames(&mut self, frames: u16);

    /// Interval between burst frames in milliseconds.
    fn burst_interval(&self) -> u16;
    fn set_burst_interval(&mut self, interval_ms: u16);
}

/// Wrap a camera for sharing.
pub fn shared<C: Camera>(camera: C) -> SharedCamera<C> {
    Arc::new(Mutex::new(camera))
}
