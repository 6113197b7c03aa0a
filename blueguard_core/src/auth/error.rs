use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Shown when the server rejects a login without saying why.
pub const FALLBACK_MESSAGE: &str = "login failed";

/// Errors that can happen during a login round trip. All of them end up in
/// front of the user as a single string (their `Display`); callers don't
/// branch on the variant.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't reach the server at all, or the connection dropped while
    /// reading the response.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The server turned the login down. `detail` is the server's own
    /// explanation, when the error body carried one.
    #[error("{}", .detail.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Http {
        /// Server-supplied error text, if any.
        detail: Option<String>,
    },

    /// The server said the login succeeded but sent a body we couldn't
    /// understand.
    #[error("unexpected response from server: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn http_error_displays_server_detail() {
        let err = Error::Http {
            detail: Some("invalid credentials".to_owned()),
        };

        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn http_error_without_detail_falls_back() {
        let err = Error::Http { detail: None };

        assert_eq!(err.to_string(), FALLBACK_MESSAGE);
    }
}
