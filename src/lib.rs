//! burstshell - line-oriented command shell for camera firmware.
//!
//! A [`shell::CommandRegistry`] maps case-insensitive command names to
//! handlers. Input arrives as lines (directly, or byte by byte through the
//! [`console::Tty`] editor); replies are written to a [`console::Output`].
//! The shipped `burst` command configures burst capture on anything that
//! implements [`camera::Camera`].
//!
//! ```ignore
//! let cam = camera::shared(SimCamera::default());
//! let registry = shell::builtin_registry(Some(cam), CommandHistory::shared())?;
//! let mut out = BufferOutput::new();
//! registry.dispatch("burst frames 5", &mut out);
//! assert_eq!(out.as_str(), "OK\r\n");
//! ```

#![no_std]

#[macro_use]
extern crate log;

extern crate alloc;

pub mod camera;
pub mod config;
pub mod console;
pub mod error;
pub mod hal;
pub mod shell;

#[cfg(test)]
mod tests;

pub use error::{ShellError, ShellResult};
