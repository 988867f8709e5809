use super::{Camera, CameraState};
use crate::config::shell::{DEFAULT_BURST_FRAMES, DEFAULT_BURST_INTERVAL_MS};

/// Burst parameters as stored by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstSettings {
    pub enable: bool,
    pub fast: bool,
    pub frames: u16,
    pub interval_ms: u16,
}

impl Default for BurstSettings {
    fn default() -> Self {
        Self {
            enable: false,
            fast: false,
            frames: DEFAULT_BURST_FRAMES,
            interval_ms: DEFAULT_BURST_INTERVAL_MS,
        }
    }
}

/// In-memory camera with a settable pipeline state.
#[derive(Debug, Clone, Default)]
pub struct SimCamera {
    settings: BurstSettings,
    state: CameraState,
    writes: usize,
}

impl SimCamera {
    pub fn new(settings: BurstSettings) -> Self {
        Self {
            settings,
            state: CameraState::Idle,
            writes: 0,
        }
    }

    pub fn settings(&self) -> BurstSettings {
        self.settings
    }

    pub fn set_state(&mut self, state: CameraState) {
        debug!("camera state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Number of setter calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Camera for SimCamera {
    fn state(&self) -> CameraState {
        self.state
    }

    fn burst_enable(&self) -> bool {
        self.settings.enable
    }

    fn set_burst_enable(&mut self, enable: bool) {
        self.writes += 1;
        self.settings.enable = enable;
    }

    fn burst_fast(&self) -> bool {
        self.settings.fast
    }

    fn set_burst_fast(&mut self, fast: bool) {
        self.writes += 1;
        self.settings.fast = fast;
    }

    fn burst_frames(&self) -> u16 {
        self.settings.frames
    }

    fn set_burst_frames(&mut self, frames: u16) {
        self.writes += 1;
        self.settings.frames = frames;
    }

    fn burst_interval(&self) -> u16 {
        self.settings.interval_ms
    }

    fn set_burst_interval(&mut self, interval_ms: u16) {
        self.writes += 1;
        self.settings.interval_ms = interval_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cam = SimCamera::default();
        assert_eq!(cam.state(), CameraState::Idle);
        assert!(!cam.burst_enable());
        assert_eq!(cam.burst_frames(), DEFAULT_BURST_FRAMES);
        assert_eq!(cam.burst_interval(), DEFAULT_BURST_INTERVAL_MS);
        assert_eq!(cam.writes(), 0);
    }

    #[test]
    fn test_setters_count_writes() {
        let mut cam = SimCamera::default();
        cam.set_burst_enable(true);
        cam.set_burst_frames(7);
        assert_eq!(cam.writes(), 2);
        assert_eq!(
            cam.settings(),
            BurstSettings {
                enable: true,
                fast: false,
                frames: 7,
                interval_ms: DEFAULT_BURST_INTERVAL_MS,
            }
        );
    }
}
