/// Things that can go wrong in the API
pub mod error;
pub use error::Error;

/// Log into the server
pub mod login;

/// Client for the auth API
pub mod client;
pub use client::Client;
