//! Auth types shared across Assignhub services.
//!
//! Provides token issuing and verification, the `webToken` cookie builders, the
//! cookie gate used by the auth middleware, and the `IdentityClaim` extractor.

pub mod cookie;
pub mod gate;
pub mod identity;
pub mod token;
