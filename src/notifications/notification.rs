// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! Serialized field names follow the camelCase shape the web UI renders from
//! (`timeAdded`, `isWarning`, `successMessage`, ...).

use super::error_object::ErrorObject;
use crate::config::PERSISTENT_TIMEOUT_SENTINEL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identifier of a notification: its creation time in Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl NotificationId {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How long a notification stays up before the UI may dismiss it.
///
/// Advisory only: the store never removes anything on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", from = "i64")]
pub enum Timeout {
    After(Duration),
    /// Stays until the user dismisses it.
    Persistent,
}

impl Timeout {
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Timeout::After(d) => Some(d),
            Timeout::Persistent => None,
        }
    }

    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, Timeout::Persistent)
    }
}

impl From<Timeout> for i64 {
    fn from(timeout: Timeout) -> Self {
        match timeout {
            Timeout::After(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
            Timeout::Persistent => PERSISTENT_TIMEOUT_SENTINEL,
        }
    }
}

impl From<i64> for Timeout {
    fn from(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(ms) => Timeout::After(Duration::from_millis(ms)),
            Err(_) => Timeout::Persistent,
        }
    }
}

/// What the notification says. Exactly one per notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    SuccessMessage(String),
    ErrorMessage(String),
    ErrorObject(ErrorObject),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    timeout: Timeout,
    time_added: NotificationId,
    show: bool,
    /// Occurrences folded into this entry.
    count: u32,
    is_warning: bool,
    #[serde(flatten)]
    payload: Payload,
}

impl Notification {
    /// Creates a visible notification seen once.
    pub(crate) fn new(payload: Payload, timeout: Timeout, time_added: NotificationId) -> Self {
        Self {
            timeout,
            time_added,
            show: true,
            count: 1,
            is_warning: false,
            payload,
        }
    }

    #[must_use]
    pub(crate) fn into_warning(mut self) -> Self {
        self.is_warning = true;
        self
    }

    pub(crate) fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.time_added
    }

    /// Creation time in Unix milliseconds.
    #[must_use]
    pub fn time_added(&self) -> i64 {
        self.time_added.as_millis()
    }

    #[must_use]
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    #[must_use]
    pub fn show(&self) -> bool {
        self.show
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.is_warning
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        match &self.payload {
            Payload::SuccessMessage(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.payload {
            Payload::ErrorMessage(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_object(&self) -> Option<&ErrorObject> {
        match &self.payload {
            Payload::ErrorObject(error) => Some(error),
            _ => None,
        }
    }

    /// Whether the UI may dismiss this notification at `now_millis`.
    #[must_use]
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        match self.timeout.duration() {
            Some(d) => {
                let age = now_millis.saturating_sub(self.time_added());
                u128::try_from(age).is_ok_and(|age| age >= d.as_millis())
            }
            None => false,
        }
    }
}
