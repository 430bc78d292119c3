//! Test utilities for Assignhub services.
//!
//! Import from `[dev-dependencies]` only.

pub mod auth;
