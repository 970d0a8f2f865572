//! # Launchpad Shared
//!
//! Wire types shared between the server and anything that talks to it
//! (the landing page script, integration tests, external tooling).

pub mod response;

pub use response::SignupResponse;
