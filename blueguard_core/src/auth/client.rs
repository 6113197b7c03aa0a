use super::error::{self, Error};
use super::login;
use serde::Deserialize;
use url::Url;

/// Client for the auth API
#[derive(Debug, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://blueguard.example.com`.
    pub server: String,
}

/// Body shape of the server's error responses.
#[derive(Debug, Deserialize)]
struct ErrorResp {
    /// Human-readable explanation of the rejection.
    detail: Option<String>,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// Log into the server. Issues exactly one request; nothing is retried
    /// and no timeout is enforced beyond the transport's own.
    ///
    /// ## Errors
    ///
    /// - `Error::UrlParse` if the configured server isn't a valid base URL
    /// - `Error::Network` if the request couldn't be sent or the body
    ///   couldn't be read
    /// - `Error::Http` if the server answered with a non-2xx status; carries
    ///   the body's `detail` field when there was one
    /// - `Error::Parse` if a success response's body wasn't the JSON we
    ///   expect
    pub async fn login(
        &self,
        http: &reqwest::Client,
        req: &login::Req,
    ) -> error::Result<login::Resp> {
        let url = Url::parse(&self.server)?.join(login::PATH)?;

        let resp = http.post(url).json(req).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            // The error body is best-effort: an empty or non-JSON body just
            // means the server didn't explain itself.
            let detail = serde_json::from_str::<ErrorResp>(&body)
                .ok()
                .and_then(|err| err.detail);

            Err(Error::Http { detail })
        }
    }
}
