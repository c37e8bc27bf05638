// SPDX-License-Identifier: MPL-2.0
//! Contact form with client-side validation and a simulated submission.
//!
//! Submissions never leave the process. The form walks a small state machine
//! over its status line: `Idle` → a rejection (spam, missing fields, invalid
//! email) or `Sending`, and `Sending` → `Sent` once the fixed delay elapses.
//! The `website` field is a honeypot: it has no visible input, so any content
//! in it marks the submission as automated. It is a cosmetic filter, not a
//! real defense.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{button, text, text_input, Column, Container, Text},
    Color, Element, Length,
};
use std::time::Duration;

/// How long the simulated send takes before reporting success.
pub const SEND_DELAY: Duration = Duration::from_millis(900);

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Spam,
    MissingFields,
    InvalidEmail,
}

/// Where the status line currently is in the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Rejected(Rejection),
    Sending,
    Sent,
}

impl Status {
    /// i18n key of the status message, if one is shown.
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            Status::Idle => None,
            Status::Rejected(Rejection::Spam) => Some("form-status-spam"),
            Status::Rejected(Rejection::MissingFields) => Some("form-status-missing-fields"),
            Status::Rejected(Rejection::InvalidEmail) => Some("form-status-invalid-email"),
            Status::Sending => Some("form-status-sending"),
            Status::Sent => Some("form-status-sent"),
        }
    }

    /// Color of the status line.
    pub fn color(self, scheme: &ColorScheme) -> Color {
        match self {
            Status::Idle | Status::Sending => scheme.text_muted,
            Status::Rejected(_) => scheme.error,
            Status::Sent => scheme.success,
        }
    }
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    WebsiteChanged(String),
    Submit,
    /// The simulated send delay elapsed.
    SendCompleted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Schedule a [`SendCompleted`](Message::SendCompleted) after
    /// [`SEND_DELAY`].
    ScheduleSend,
}

/// Form field values and the status line.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot. Never rendered as an input; only automation fills it.
    pub website: String,
    status: Status,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Event::None
            }
            Message::WebsiteChanged(value) => {
                self.website = value;
                Event::None
            }
            Message::Submit => self.submit(),
            Message::SendCompleted => {
                if self.status == Status::Sending {
                    self.status = Status::Sent;
                    self.clear_fields();
                }
                Event::None
            }
        }
    }

    fn submit(&mut self) -> Event {
        if !self.website.is_empty() {
            self.status = Status::Rejected(Rejection::Spam);
            return Event::None;
        }

        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            self.status = Status::Rejected(Rejection::MissingFields);
            return Event::None;
        }

        if !is_valid_email(email) {
            self.status = Status::Rejected(Rejection::InvalidEmail);
            return Event::None;
        }

        self.status = Status::Sending;
        Event::ScheduleSend
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.website.clear();
    }
}

/// Rudimentary `local@domain.tld` shape check: no whitespace, exactly one
/// `@`, and a dot with something on both sides after it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub scheme: &'a ColorScheme,
}

/// Render the form fields, submit button, and status line.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name_input = text_input(&ctx.i18n.tr("form-name-label"), &ctx.state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM);

    let email_input = text_input(&ctx.i18n.tr("form-email-label"), &ctx.state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM);

    let message_input = text_input(&ctx.i18n.tr("form-message-label"), &ctx.state.message)
        .on_input(Message::MessageChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM);

    let submit = button(Text::new(ctx.i18n.tr("form-submit")).size(typography::BODY_LG))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(name_input)
        .push(email_input)
        .push(message_input)
        .push(submit);

    if let Some(key) = ctx.state.status().message_key() {
        let color = ctx.state.status().color(ctx.scheme);
        let status_line = Text::new(ctx.i18n.tr(key))
            .size(typography::BODY)
            .style(move |_theme: &iced::Theme| text::Style { color: Some(color) });
        column = column.push(status_line);
    }

    Container::new(column).width(Length::Fill).into()
}
