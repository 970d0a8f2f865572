//! Middleware modules.

pub mod error;
pub mod panic;

pub use panic::CatchPanic;
