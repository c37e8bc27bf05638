// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact_form;
use crate::ui::header;
use crate::ui::notifications;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Form(contact_form::Message),
    /// The page scrollable moved; carries the new vertical offset.
    PageScrolled(f32),
    /// The window was resized.
    WindowResized(Size),
    /// Animation heartbeat.
    Tick(Instant),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub lang: Option<String>,
    /// Optional portfolio content file to load instead of the default lookup.
    pub content_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
