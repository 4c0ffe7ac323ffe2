// SPDX-License-Identifier: MPL-2.0
//! The two notification lists and the operations that change them.

use super::dedup::find_duplicate;
use super::notification::{Notification, NotificationId};
use serde::{Deserialize, Serialize};

/// Success and error/warning notifications, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsState {
    error_notifications: Vec<Notification>,
    success_notifications: Vec<Notification>,
}

impl NotificationsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn success_notifications(&self) -> &[Notification] {
        &self.success_notifications
    }

    #[must_use]
    pub fn error_notifications(&self) -> &[Notification] {
        &self.error_notifications
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.success_notifications.is_empty() && self.error_notifications.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn push_success(&mut self, notification: Notification) {
        self.success_notifications.push(notification);
    }

    /// Appends an error, folding in an earlier entry with the same key.
    ///
    /// Returns the count carried by the appended entry.
    pub(crate) fn add_error(&mut self, mut notification: Notification) -> u32 {
        if let Some(index) = find_duplicate(&self.error_notifications, &notification) {
            let previous = self.error_notifications.remove(index);
            notification.set_count(previous.count().saturating_add(1));
            tracing::debug!(
                replaced = %previous.id(),
                id = %notification.id(),
                count = notification.count(),
                "collapsed duplicate error notification"
            );
        }
        let count = notification.count();
        self.error_notifications.push(notification);
        count
    }

    /// Returns `true` if an entry was removed.
    pub(crate) fn remove_error(&mut self, id: NotificationId) -> bool {
        remove_by_id(&mut self.error_notifications, id)
    }

    /// Returns `true` if an entry was removed.
    pub(crate) fn remove_success(&mut self, id: NotificationId) -> bool {
        remove_by_id(&mut self.success_notifications, id)
    }

    pub(crate) fn clear_errors(&mut self) {
        self.error_notifications.clear();
    }
}

fn remove_by_id(list: &mut Vec<Notification>, id: NotificationId) -> bool {
    let before = list.len();
    list.retain(|n| n.id() != id);
    list.len() < before
}
