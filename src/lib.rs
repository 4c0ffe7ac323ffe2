// SPDX-License-Identifier: MPL-2.0
//! `notify_store` keeps the success, error and warning banners of a web UI.
//!
//! The store is an owned value held by the UI composition root. UI code calls
//! actions on it, reads the two lists back for rendering, and serializes the
//! state to JSON in the shape the front end expects.

pub mod config;
pub mod error;
pub mod notifications;
pub mod paths;

pub use error::{Error, Result};
pub use notifications::{
    Action, ErrorObject, Mutation, Notification, NotificationId, NotificationStore,
    NotificationsState,
};
