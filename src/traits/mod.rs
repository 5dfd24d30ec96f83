//! Trait definitions for the host collaborators.
//!
//! This module defines the seams between the cab controller and the
//! simulator it runs in, so the controller can be driven by the real host or
//! by the mocks in [`crate::hal`].
//!
//! # Submodules
//!
//! - `sound`: sound start/stop requests
//! - `notice`: on-screen messages
//! - `host`: camera query, update check, and the [`CabHost`] bundle

pub mod host;
pub mod notice;
pub mod sound;

pub use host::*;
pub use notice::*;
pub use sound::*;
