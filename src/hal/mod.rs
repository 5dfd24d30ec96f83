//! Host implementations of the collaborator traits.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`]. The simulator binding itself lives in the
//! host; only the test double ships here.
//!
//! # Available Implementations
//!
//! - `mock`: Recording host for tests and scenario replay

pub mod mock;

pub use mock::*;
