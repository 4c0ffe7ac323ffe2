// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for notification settings.
//!
//! # Categories
//!
//! - **Success**: auto-dismiss timing for success banners
//! - **Errors**: which HTTP statuses never reach the error list

// ==========================================================================
// Success Defaults
// ==========================================================================

/// Auto-dismiss delay for success notifications (in milliseconds).
pub const DEFAULT_SUCCESS_TIMEOUT_MS: u64 = 3000;

/// Serialized timeout value meaning "stay until dismissed".
pub const PERSISTENT_TIMEOUT_SENTINEL: i64 = -1;

// ==========================================================================
// Error Defaults
// ==========================================================================

/// HTTP status reported when the session has expired.
pub const SESSION_EXPIRED_STATUS: u16 = 401;

/// Statuses whose errors are dropped instead of shown.
pub const DEFAULT_SUPPRESSED_STATUSES: &[u16] = &[SESSION_EXPIRED_STATUS];
