//! Console module - reply output, line editing and logging.

pub mod logger;
pub mod output;
pub mod tty;

pub use logger::init as init_logger;
pub use output::{BufferOutput, Output, WriterOutput};
pub use tty::Tty;
