use blueguard_core::auth::{error, login};
use crossterm::event::KeyEvent;

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// A login attempt came back from the server
    LoginResolved {
        /// Which attempt this answers. Answers to superseded attempts get
        /// dropped instead of clobbering newer state.
        seq: u64,

        /// What the server said
        result: error::Result<login::Resp>,
    },

    /// Something bad happened; display it to the user
    Problem(String),
}
