// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the update loop from outside the widget tree: window
//! resize events (the page geometry depends on the window size) and a
//! periodic tick that advances animations and notification timers.

use super::Message;
use crate::anim;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick cadence while only notification timers need servicing.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes native window events into application messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates the periodic tick subscription.
///
/// Runs at animation cadence while anything animates, drops to a slow
/// heartbeat while toasts are waiting to expire, and goes silent otherwise.
pub fn create_tick_subscription(
    animating: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if animating {
        time::every(anim::TICK_INTERVAL).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
