//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod blink;
pub mod console;
pub mod sense;

pub use blink::blink_task;
pub use console::console_task;
pub use sense::sense_task;
