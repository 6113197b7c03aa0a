//! Common code across BlueGuard clients: the auth wire contract, the HTTP
//! client that speaks it, and the lifecycle of a login attempt.

/// Talk to the auth backend.
pub mod auth;

/// The lifecycle of a single login attempt.
pub mod submission;
pub use submission::Submission;
