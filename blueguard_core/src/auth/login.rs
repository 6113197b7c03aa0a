use serde::{Deserialize, Serialize};

/// The request to log into the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    /// Email to use for login.
    pub email: String,

    /// Plaintext password to use for login.
    pub password: String,
}

/// Result of logging in.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resp {
    /// Bearer token for future requests.
    pub token: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/auth/login";
