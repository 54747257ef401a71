//! View projection
//!
//! Derives what the widget renders from a task store snapshot. Nothing here
//! holds state of its own.

mod projection;

pub use projection::*;
