use crate::auth::{error, login};

/// Where a login attempt is in its lifecycle. Exactly one of these holds at
/// a time; rendering and submit gating both key off it. This replaces the
/// usual pile of independent `loading`/`message` flags so that impossible
/// combinations (in flight *and* showing a result) can't be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    /// Nothing has been submitted yet.
    #[default]
    Idle,

    /// A request has been issued and we're waiting for the answer.
    InFlight,

    /// The server accepted the credentials.
    Succeeded(String),

    /// The attempt failed; the string is shown to the user as-is.
    Failed(String),
}

impl Submission {
    /// Start a new attempt, clearing any prior message. Returns `false`
    /// without changing anything when an attempt is already in flight: a
    /// second submit must not issue a second request.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::InFlight) {
            return false;
        }

        *self = Self::InFlight;
        true
    }

    /// Settle the in-flight attempt. This always leaves `InFlight`, whatever
    /// the outcome. A resolution arriving when nothing is in flight belongs
    /// to a superseded attempt and is dropped.
    pub fn resolve(&mut self, result: error::Result<login::Resp>) {
        if !matches!(self, Self::InFlight) {
            return;
        }

        *self = match result {
            // NOTE: this puts the bearer token into visible UI text. It
            // mirrors what the portal page currently shows and has to change
            // before anyone relies on this flow in production.
            Ok(resp) => Self::Succeeded(format!("Access granted. Token: {}", resp.token)),
            Err(err) => Self::Failed(err.to_string()),
        };
    }

    /// Whether an attempt is currently in flight.
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// The message to show the user, if any, and whether it's good news.
    pub fn message(&self) -> Option<(&str, bool)> {
        match self {
            Self::Idle | Self::InFlight => None,
            Self::Succeeded(text) => Some((text, true)),
            Self::Failed(text) => Some((text, false)),
        }
    }
}
