//! Library half of the ramp-up course.
//!
//! Each lesson binary under `src/bin/` walks through a language topic and
//! prints as it goes. The pieces worth testing live here so the lessons stay
//! readable and the behavior stays checked.

pub mod cleanup;
pub mod clock;
pub mod collections;
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod mailbox;
pub mod pipeline;
pub mod receivers;
pub mod senders;
pub mod text;

pub use error::{LessonError, Result};
