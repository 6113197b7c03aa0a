use super::Action;
use blueguard_core::auth::{login, Client};

/// Connections to external services that effects use. We keep these around
/// to have some level of connection sharing for the app as a whole.
pub struct EffectContext {
    /// an HTTP client with reqwest
    http: reqwest::Client,
}

impl EffectContext {
    /// Get a new `EffectContext`
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug)]
pub enum Effect {
    /// Present credentials to the backend
    LogIn {
        /// Which attempt this is, so the answer can be matched up later
        seq: u64,

        /// The backend to talk to
        client: Client,

        /// The credentials to present
        req: login::Req,
    },
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the
    /// next `Action` the application needs to handle. Failures ride along
    /// inside the action; nothing here panics the event loop.
    pub async fn run(self, conn: &EffectContext) -> Action {
        match self {
            Self::LogIn { seq, client, req } => {
                tracing::info!(seq, server = %client.server, "logging in");

                let result = client.login(&conn.http, &req).await;

                // The token never goes to the log, only the outcome.
                match &result {
                    Ok(_) => tracing::info!(seq, "login accepted"),
                    Err(problem) => tracing::error!(seq, %problem, "login failed"),
                }

                Action::LoginResolved { seq, result }
            }
        }
    }
}
