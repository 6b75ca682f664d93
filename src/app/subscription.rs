// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Runs the periodic tick only while time-based feed state is pending
/// (heart pulse auto-hide, advance settling), so an idle feed costs
/// nothing.
pub fn create(app: &App) -> Subscription<Message> {
    if app.coordinator.needs_tick() {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
