//! Shell configuration constants.

pub mod shell;
