//! Burst command - reads and writes the camera's burst-capture settings.

use crate::camera::{Camera, SharedCamera};
use crate::console::Output;
use crate::error::{ShellError, ShellResult};
use crate::shell::params::{OnInvalid, UintPolicy};
use crate::shell::{Command, CommandContext};

/// `burst frames <count>`: a burst takes at least one frame. Garbage counts
/// as 0 and is clamped like any other out-of-range value.
pub const FRAMES_POLICY: UintPolicy =
    UintPolicy::new(1, u16::MAX as u32, OnInvalid::Substitute(0));

/// `burst interval <time_ms>`: any 16-bit interval is accepted, garbage is
/// refused so a typo never rewrites the interval.
pub const INTERVAL_POLICY: UintPolicy =
    UintPolicy::new(0, u16::MAX as u32, OnInvalid::Reject("Invalid interval!"));

const USAGE: &str = "\tburst <on|fast|off>: Enable/disable burst mode.\r\n\
                     \tburst frames <count>: Set number of frames to take in a burst.\r\n\
                     \tburst interval <time_ms>: Set interval in milliseconds at which frames are taken.\r\n";

/// Burst command implementation.
pub struct BurstCommand<C> {
    camera: Option<SharedCamera<C>>,
}

impl<C: Camera + Send> BurstCommand<C> {
    pub fn new(camera: Option<SharedCamera<C>>) -> Self {
        Self { camera }
    }
}

fn resolve_u16(policy: &UintPolicy, token: &str) -> ShellResult<u16> {
    let value = policy.apply(token)?;
    Ok(u16::try_from(value).unwrap_or(u16::MAX))
}

impl<C: Camera + Send> Command for BurstCommand<C> {
    fn name(&self) -> &str {
        "burst"
    }

    fn description(&self) -> &str {
        "Configure burst capture (mode, frame count, interval)"
    }

    fn usage(&self) -> &str {
        USAGE
    }

    fn category(&self) -> &str {
        "camera"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, out: &mut dyn Output) -> ShellResult<()> {
        let Some(camera) = self.camera.as_ref() else {
            anyhow::bail!(ShellError::MissingCollaborator("camera"));
        };

        // One guard for the whole invocation: the idle check and every
        // setter below see the same camera state.
        let mut camera = camera.lock();
        // Queries are refused too while a capture is in flight.
        if !camera.state().is_idle() {
            anyhow::bail!(ShellError::Busy);
        }

        let Some(param) = ctx.read_param() else {
            let mode = match (camera.burst_enable(), camera.burst_fast()) {
                (true, true) => "FAST",
                (true, false) => "ON",
                (false, _) => "OFF",
            };
            out.line(mode);
            return Ok(());
        };

        if param.eq_ignore_ascii_case("on") {
            camera.set_burst_enable(true);
            camera.set_burst_fast(false);
        } else if param.eq_ignore_ascii_case("fast") {
            camera.set_burst_enable(true);
            camera.set_burst_fast(true);
        } else if param.eq_ignore_ascii_case("off") {
            camera.set_burst_enable(false);
            camera.set_burst_fast(false);
        } else if param.eq_ignore_ascii_case("interval") {
            let Some(token) = ctx.read_param() else {
                out.write_int(u32::from(camera.burst_interval()));
                out.newline();
                return Ok(());
            };
            let interval = resolve_u16(&INTERVAL_POLICY, token)?;
            camera.set_burst_interval(interval);
        } else if param.eq_ignore_ascii_case("frames") {
            let Some(token) = ctx.read_param() else {
                out.write_int(u32::from(camera.burst_frames()));
                out.newline();
                return Ok(());
            };
            let frames = resolve_u16(&FRAMES_POLICY, token)?;
            camera.set_burst_frames(frames);
        } else {
            anyhow::bail!(ShellError::InvalidArgument("Invalid burst command!"));
        }

        info!("burst: {}", ctx.args_raw);
        out.ok();
        Ok(())
    }
}
