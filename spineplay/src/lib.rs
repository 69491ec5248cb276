//! Playback control and named animation events over a Spine-style runtime.
//!
//! This crate is runtime-agnostic glue. The host engine owns skeleton data,
//! track state and the per-frame update loop, and is reached through the
//! [`SkeletonHost`] trait. [`SkeletonView`] wraps one host skeleton and
//! multiplexes the host's single-slot completion/frame-event callbacks into
//! independently removable named listeners.

#![forbid(unsafe_code)]

mod error;
mod events;
mod host;
mod playback;
mod scripted;

pub use error::*;
pub use events::*;
pub use host::*;
pub use playback::*;
pub use scripted::*;


#[cfg(test)]
mod playback_tests;
