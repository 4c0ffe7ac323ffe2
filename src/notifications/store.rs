// SPDX-License-Identifier: MPL-2.0
//! Action and mutation layers over [`NotificationsState`].
//!
//! UI code calls actions (`show_error`, `show_success`, ...) or dispatches an
//! [`Action`]. Actions apply policy and then commit a [`Mutation`], the only
//! path that changes state.

use super::clock::{Clock, SystemClock};
use super::error_object::ErrorObject;
use super::notification::{Notification, NotificationId, Payload, Timeout};
use super::state::NotificationsState;
use crate::config::Config;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// High-level requests from UI components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ResetNotificationsState,
    ShowSuccess(String),
    ShowErrorMessage(String),
    ShowError(ErrorObject),
    ShowWarningMessage(String),
    DeleteNotification(NotificationId),
    DeleteSuccessNotification(NotificationId),
    ClearErrorNotifications,
}

impl Action {
    /// Builds an action from its UI-facing name and a JSON payload.
    ///
    /// Message actions take a string, `showError` takes an error snapshot,
    /// deletions take the numeric `timeAdded`. Payload-less actions ignore it.
    pub fn from_named(name: &str, payload: serde_json::Value) -> Result<Self> {
        let action = match name {
            "resetNotificationsState" => Action::ResetNotificationsState,
            "showSuccess" => Action::ShowSuccess(decode(name, payload)?),
            "showErrorMessage" => Action::ShowErrorMessage(decode(name, payload)?),
            "showError" => Action::ShowError(decode(name, payload)?),
            "showWarningMessage" => Action::ShowWarningMessage(decode(name, payload)?),
            "deleteNotification" => Action::DeleteNotification(decode(name, payload)?),
            "deleteSuccessNotification" => {
                Action::DeleteSuccessNotification(decode(name, payload)?)
            }
            "clearErrorNotifications" => Action::ClearErrorNotifications,
            other => return Err(Error::UnknownAction(other.to_string())),
        };
        Ok(action)
    }
}

fn decode<T: DeserializeOwned>(name: &str, payload: serde_json::Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| Error::Payload(format!("{name}: {e}")))
}

/// State changes. Committing one never applies policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ResetNotificationsState,
    SetSuccess(String),
    SetErrorMessage(String),
    SetErrorObject(ErrorObject),
    SetWarningMessage(String),
    DeleteSuccessNotification(NotificationId),
    DeleteNotification(NotificationId),
    ClearErrorNotifications,
}

impl Mutation {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::ResetNotificationsState => "resetNotificationsState",
            Mutation::SetSuccess(_) => "setSuccess",
            Mutation::SetErrorMessage(_) => "setErrorMessage",
            Mutation::SetErrorObject(_) => "setErrorObject",
            Mutation::SetWarningMessage(_) => "setWarningMessage",
            Mutation::DeleteSuccessNotification(_) => "deleteSuccessNotification",
            Mutation::DeleteNotification(_) => "deleteNotification",
            Mutation::ClearErrorNotifications => "clearErrorNotifications",
        }
    }
}

/// Owns the notification lists for one UI instance.
#[derive(Debug)]
pub struct NotificationStore<C = SystemClock> {
    state: NotificationsState,
    config: Config,
    clock: C,
    /// Last stamp handed out; keeps ids strictly increasing.
    last_stamp: Option<i64>,
}

impl NotificationStore<SystemClock> {
    /// Creates an empty store with default settings and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for NotificationStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NotificationStore<C> {
    #[must_use]
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            state: NotificationsState::default(),
            config,
            clock,
            last_stamp: None,
        }
    }

    // ---------------------------------------------------------------------
    // Getters
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn success_notifications(&self) -> &[Notification] {
        self.state.success_notifications()
    }

    #[must_use]
    pub fn error_notifications(&self) -> &[Notification] {
        self.state.error_notifications()
    }

    #[must_use]
    pub fn state(&self) -> &NotificationsState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Actions
    // ---------------------------------------------------------------------

    pub fn reset_state(&mut self) {
        self.commit(Mutation::ResetNotificationsState);
    }

    /// Shows a success banner. Successes are never collapsed.
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.commit(Mutation::SetSuccess(message.into()));
    }

    pub fn show_error_message(&mut self, message: impl Into<String>) {
        self.commit(Mutation::SetErrorMessage(message.into()));
    }

    /// Shows an HTTP error unless its status is suppressed (401 by default).
    ///
    /// Returns `false` when the error was dropped.
    pub fn show_error(&mut self, error: ErrorObject) -> bool {
        if let Some(status) = error.http_status() {
            if self.config.is_suppressed(status) {
                tracing::debug!(status, url = error.request_url(), "suppressed error notification");
                return false;
            }
        }
        self.commit(Mutation::SetErrorObject(error));
        true
    }

    /// Shows a warning. Warnings live in the error list.
    pub fn show_warning_message(&mut self, message: impl Into<String>) {
        self.commit(Mutation::SetWarningMessage(message.into()));
    }

    /// Removes the error or warning with this id. Returns `false` if absent.
    pub fn delete_notification(&mut self, id: NotificationId) -> bool {
        let before = self.state.error_notifications().len();
        self.commit(Mutation::DeleteNotification(id));
        self.state.error_notifications().len() < before
    }

    /// Removes the success notification with this id. Returns `false` if absent.
    pub fn delete_success_notification(&mut self, id: NotificationId) -> bool {
        let before = self.state.success_notifications().len();
        self.commit(Mutation::DeleteSuccessNotification(id));
        self.state.success_notifications().len() < before
    }

    pub fn clear_error_notifications(&mut self) {
        self.commit(Mutation::ClearErrorNotifications);
    }

    /// Routes an action to its handler.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ResetNotificationsState => self.reset_state(),
            Action::ShowSuccess(message) => self.show_success(message),
            Action::ShowErrorMessage(message) => self.show_error_message(message),
            Action::ShowError(error) => {
                self.show_error(error);
            }
            Action::ShowWarningMessage(message) => self.show_warning_message(message),
            Action::DeleteNotification(id) => {
                self.delete_notification(id);
            }
            Action::DeleteSuccessNotification(id) => {
                self.delete_success_notification(id);
            }
            Action::ClearErrorNotifications => self.clear_error_notifications(),
        }
    }

    /// Dispatches by action name with a JSON payload.
    pub fn dispatch_named(&mut self, name: &str, payload: serde_json::Value) -> Result<()> {
        let action = Action::from_named(name, payload)?;
        self.dispatch(action);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Applies a mutation to the state.
    pub fn commit(&mut self, mutation: Mutation) {
        tracing::trace!(mutation = mutation.name(), "commit");
        match mutation {
            Mutation::ResetNotificationsState => self.state.reset(),
            Mutation::SetSuccess(message) => {
                let timeout = Timeout::After(self.config.success_timeout());
                let notification = self.create(Payload::SuccessMessage(message), timeout);
                self.state.push_success(notification);
            }
            Mutation::SetErrorMessage(message) => {
                let notification = self.create(Payload::ErrorMessage(message), Timeout::Persistent);
                self.state.add_error(notification);
            }
            Mutation::SetErrorObject(error) => {
                let notification = self.create(Payload::ErrorObject(error), Timeout::Persistent);
                self.state.add_error(notification);
            }
            Mutation::SetWarningMessage(message) => {
                let notification = self
                    .create(Payload::ErrorMessage(message), Timeout::Persistent)
                    .into_warning();
                self.state.add_error(notification);
            }
            Mutation::DeleteSuccessNotification(id) => {
                self.state.remove_success(id);
            }
            Mutation::DeleteNotification(id) => {
                self.state.remove_error(id);
            }
            Mutation::ClearErrorNotifications => self.state.clear_errors(),
        }
    }

    fn create(&mut self, payload: Payload, timeout: Timeout) -> Notification {
        Notification::new(payload, timeout, self.next_id())
    }

    /// Clock time, bumped past the previous stamp when the clock has not moved.
    fn next_id(&mut self) -> NotificationId {
        let now = self.clock.now_millis();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        NotificationId::from_millis(stamp)
    }
}
