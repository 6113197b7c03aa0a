use blueguard_core::auth::login;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// A form for entering login information
#[derive(Debug, Default)]
pub struct LoginForm {
    /// Which field we're editing
    active: Field,

    /// Email to log in with
    email: Input,

    /// What's your password? (Masked unless toggled)
    password: Input,

    /// Render the password as typed instead of masked
    show_password: bool,
}

/// Which field has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Field {
    #[default]
    Email,
    Password,
}

impl Field {
    /// The other field. With two fields, tab and shift-tab agree.
    fn other(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

impl LoginForm {
    #[expect(clippy::cast_possible_truncation)]
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let fields = Layout::vertical(Constraint::from_lengths([3, 3]));
        let [email_area, password_area] = fields.areas(area);

        let width = area.width.saturating_sub(3); // -2 for the border, -1 for the cursor

        let border_style = Style::default().fg(Color::Cyan);

        // EMAIL
        {
            let email_input_scroll = self.email.visual_scroll(width as usize);

            let email_field = Paragraph::new(self.email.value())
                .scroll((0, email_input_scroll as u16))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("E-mail")
                        .border_style(border_style),
                );

            frame.render_widget(email_field, email_area);

            if matches!(self.active, Field::Email) {
                frame.set_cursor_position((
                    email_area.x
                        + (self.email.visual_cursor().max(email_input_scroll)
                            - email_input_scroll) as u16
                        + 1, // +1 column for the border
                    email_area.y + 1, // +1 row for the border/title
                ));
            }
        }

        // PASSWORD
        {
            let password_input_scroll = self.password.visual_scroll(width as usize);

            let shown = if self.show_password {
                self.password.value().to_owned()
            } else {
                "*".repeat(self.password.value().len())
            };

            let password_field = Paragraph::new(shown)
                .scroll((0, password_input_scroll as u16))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(if self.show_password {
                            "Password (F2 hides)"
                        } else {
                            "Password (F2 shows)"
                        })
                        .border_style(border_style),
                );

            frame.render_widget(password_field, password_area);

            if matches!(self.active, Field::Password) {
                frame.set_cursor_position((
                    password_area.x
                        + (self.password.visual_cursor().max(password_input_scroll)
                            - password_input_scroll) as u16
                        + 1, // +1 column for the border
                    password_area.y + 1, // +1 row for the border/title
                ));
            }
        }
    }

    pub fn handle_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.active = self.active.other();
            }
            _ => {
                let event = Event::Key(key);

                match self.active {
                    Field::Email => self.email.handle_event(&event),
                    Field::Password => self.password.handle_event(&event),
                };
            }
        }
    }

    /// Flip password masking.
    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// The credentials as currently entered, or `None` while either field is
    /// still empty. This stands in for the browser form's `required` checks;
    /// no other validation happens client-side.
    pub fn finish(&self) -> Option<login::Req> {
        if self.email.value().is_empty() || self.password.value().is_empty() {
            return None;
        }

        Some(login::Req {
            email: self.email.to_string(),
            password: self.password.to_string(),
        })
    }
}
