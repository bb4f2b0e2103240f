//! Logging for penframe.
//!
//! Call sites write `crate::log::debug!` / `crate::log::warn!` with tracing's
//! field syntax. Drag sessions log begin and end, the snap solver logs each
//! axis engaging or releasing a guide, and pattern generation logs its
//! primitive count (debug) or a degenerate spec (warn).
//!
//! With the `tracing` feature off the macros swallow their arguments, so
//! the per-move solver path carries no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
