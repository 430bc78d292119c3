//! Ambient plumbing shared by Assignhub services: tracing setup, HTTP layers and
//! the liveness handler.

pub mod health;
pub mod middleware;
pub mod tracing;
