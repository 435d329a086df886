//! Platform abstraction layer
//!
//! Window, keyboard and clock live outside the crate. The game only sees
//! an [`InputSource`] that yields one [`TickInput`](crate::sim::TickInput)
//! per frame.

pub mod input;

pub use input::{InputSource, ScriptedInput};
