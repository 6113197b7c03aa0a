use blueguard_core::{auth::Client, Submission};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::process::ExitCode;

/// Things that can happen to this app
pub mod action;
pub use action::Action;

/// Side effects and the context they run in
pub mod effect;
pub use effect::{Effect, EffectContext};

/// The email/password form itself
mod login_form;
use login_form::LoginForm;

/// The "functional core" of the app.
pub struct App {
    /// The form the user is filling in
    form: LoginForm,

    /// Where the current login attempt stands
    submission: Submission,

    /// Client for the configured backend
    client: Client,

    /// Number of the latest attempt, so answers to superseded attempts can
    /// be recognized and dropped.
    seq: u64,

    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// Exit code to finish with, once the user asks to leave
    exiting: Option<ExitCode>,
}

impl App {
    /// Create a new instance of the app, pointed at the given backend.
    pub fn new(server: String) -> Self {
        Self {
            form: LoginForm::default(),
            submission: Submission::Idle,
            client: Client::new(server),
            seq: 0,
            status_line: None,
            exiting: None,
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ]);
        let [header_area, body_area, status_area] = vertical.areas(frame.area());

        let header = Paragraph::new(vec![
            Line::from("BlueGuard".bold()),
            Line::from("Cybersecurity Access Portal".dark_gray()),
        ]);
        frame.render_widget(header, header_area);

        // Login card, centered. The browser page hangs a 3D scene next to
        // this; here the card is the whole show.
        let card_vert = Layout::vertical([Constraint::Length(10)]).flex(Flex::Center);
        let card_horiz = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center);
        let [card_area] = card_vert.areas(body_area);
        let [card_area] = card_horiz.areas(card_area);

        let rows = Layout::vertical(Constraint::from_lengths([6, 3, 1]));
        let [fields_area, message_area, footer_area] = rows.areas(card_area);

        self.form.render(frame, fields_area);

        if let Some((text, good)) = self.submission.message() {
            let style = if good {
                Style::new().fg(Color::Green)
            } else {
                Style::new().fg(Color::Red)
            };

            frame.render_widget(
                Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
                message_area,
            );
        } else if self.submission.in_flight() {
            frame.render_widget(
                Paragraph::new("Verifying…").dark_gray(),
                message_area,
            );
        }

        frame.render_widget(
            Paragraph::new(format!("Server: {}", self.client.server)).dark_gray(),
            footer_area,
        );

        let status = Paragraph::new(match &self.status_line {
            Some(line) => line.as_str(),
            None => "Enter submits • Tab switches fields • Esc quits",
        });

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side
    /// effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => self.handle_key(key),

            Action::LoginResolved { seq, result } => {
                if seq != self.seq {
                    tracing::debug!(seq, current = self.seq, "dropping stale login result");
                    return vec![];
                }

                self.submission.resolve(result);

                vec![]
            }

            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }
        }
    }

    /// Handle a keypress, producing any side effects
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        match key.code {
            KeyCode::Esc => {
                self.exiting = Some(ExitCode::SUCCESS);

                vec![]
            }
            KeyCode::Enter => self.submit(),
            KeyCode::F(2) => {
                self.form.toggle_show_password();

                vec![]
            }
            _ => {
                self.form.handle_event(key);

                vec![]
            }
        }
    }

    /// Kick off a login attempt, unless one is already in flight or the form
    /// is incomplete.
    fn submit(&mut self) -> Vec<Effect> {
        let Some(req) = self.form.finish() else {
            self.status_line = Some("Email and password are both required".to_owned());
            return vec![];
        };

        // Submitting is disabled while a request is in flight.
        if !self.submission.begin() {
            return vec![];
        }

        self.status_line = None;
        self.seq += 1;

        vec![Effect::LogIn {
            seq: self.seq,
            client: self.client.clone(),
            req,
        }]
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        self.exiting
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use blueguard_core::auth::{error, login, Error};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new("http://127.0.0.1:8000".to_owned())
    }

    fn fill_form(app: &mut App) {
        for c in "user@example.com".chars() {
            app.handle(Action::Key(key(KeyCode::Char(c))));
        }
        app.handle(Action::Key(key(KeyCode::Tab)));
        for c in "cyber@123".chars() {
            app.handle(Action::Key(key(KeyCode::Char(c))));
        }
    }

    fn ok_resp(token: &str) -> error::Result<login::Resp> {
        Ok(login::Resp {
            token: token.to_owned(),
        })
    }

    #[test]
    fn enter_submits_the_form() {
        let mut app = app();
        fill_form(&mut app);

        let effects = app.handle(Action::Key(key(KeyCode::Enter)));

        assert_eq!(effects.len(), 1);
        let Effect::LogIn { seq, req, .. } = &effects[0];
        assert_eq!(*seq, 1);
        assert_eq!(req.email, "user@example.com");
        assert_eq!(req.password, "cyber@123");
        assert!(app.submission.in_flight());
    }

    #[test]
    fn an_incomplete_form_does_not_submit() {
        let mut app = app();

        let effects = app.handle(Action::Key(key(KeyCode::Enter)));

        assert!(effects.is_empty());
        assert!(!app.submission.in_flight());
        assert!(app.status_line.is_some());
    }

    #[test]
    fn enter_while_in_flight_issues_no_second_request() {
        let mut app = app();
        fill_form(&mut app);

        let first = app.handle(Action::Key(key(KeyCode::Enter)));
        let second = app.handle(Action::Key(key(KeyCode::Enter)));

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn a_resolved_login_settles_the_submission() {
        let mut app = app();
        fill_form(&mut app);
        app.handle(Action::Key(key(KeyCode::Enter)));

        app.handle(Action::LoginResolved {
            seq: 1,
            result: ok_resp("abc123"),
        });

        let (text, good) = app.submission.message().unwrap();
        assert!(good);
        assert!(text.contains("abc123"));
    }

    #[test]
    fn a_stale_resolution_is_dropped() {
        let mut app = app();
        fill_form(&mut app);

        // First attempt resolves with a failure…
        app.handle(Action::Key(key(KeyCode::Enter)));
        app.handle(Action::LoginResolved {
            seq: 1,
            result: Err(Error::Http { detail: None }),
        });

        // …the user resubmits, and then a leftover answer for the first
        // attempt shows up late. It must not touch the new attempt.
        app.handle(Action::Key(key(KeyCode::Enter)));
        app.handle(Action::LoginResolved {
            seq: 1,
            result: ok_resp("stale"),
        });

        assert!(app.submission.in_flight());

        app.handle(Action::LoginResolved {
            seq: 2,
            result: ok_resp("fresh"),
        });

        let (text, _) = app.submission.message().unwrap();
        assert!(text.contains("fresh"));
    }

    #[test]
    fn escape_asks_to_exit() {
        let mut app = app();

        app.handle(Action::Key(key(KeyCode::Esc)));

        // `ExitCode` has no `PartialEq`, so just check that we're leaving.
        assert!(app.should_exit().is_some());
    }
}
