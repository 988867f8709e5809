//! HAL (Hardware Abstraction Layer) module.
//!
//! Only the locking primitive is needed by the shell: everything that talks
//! to real hardware sits behind the [`crate::camera::Camera`] trait.

pub mod spin;

pub use spin::{Mutex, MutexGuard, RawSpin};
