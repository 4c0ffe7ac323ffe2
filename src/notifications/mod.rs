// SPDX-License-Identifier: MPL-2.0
//! Success, error and warning banners for a web UI.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record and its payload
//! - [`error_object`] - Typed snapshot of a failed HTTP request
//! - [`state`] - `NotificationsState`, the two ordered lists
//! - [`store`] - `NotificationStore` with action and mutation dispatch
//! - [`clock`] - Time sources for notification ids
//!
//! # Usage
//!
//! ```
//! use notify_store::notifications::NotificationStore;
//!
//! let mut store = NotificationStore::new();
//! store.show_error_message("Connection lost");
//! store.show_error_message("Connection lost");
//!
//! assert_eq!(store.error_notifications().len(), 1);
//! assert_eq!(store.error_notifications()[0].count(), 2);
//! ```
//!
//! # Behavior
//!
//! - Successes auto-dismiss after ~3s and are never collapsed
//! - Errors and warnings stay until dismissed
//! - A repeated error replaces the earlier one and bumps its count
//! - HTTP 401 errors are dropped (session expiry is handled elsewhere)

pub mod clock;
mod dedup;
pub mod error_object;
pub mod notification;
pub mod state;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error_object::{ApiError, ErrorObject, ErrorResponse, RequestConfig, ResponseBody};
pub use notification::{Notification, NotificationId, Payload, Timeout};
pub use state::NotificationsState;
pub use store::{Action, Mutation, NotificationStore};
