// SPDX-License-Identifier: MPL-2.0
//! Duplicate detection for error notifications.
//!
//! Two error notifications are "the same" when their composite keys are
//! equal field by field. An absent field only matches another absent field.
//! `is_warning` is not part of the key.

use super::notification::Notification;

/// Fields that decide whether two error notifications collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DedupKey<'a> {
    request_body: Option<&'a str>,
    request_url: Option<&'a str>,
    body_status: Option<u16>,
    error_code: Option<&'a str>,
    message: Option<&'a str>,
}

impl<'a> DedupKey<'a> {
    pub(crate) fn of(notification: &'a Notification) -> Self {
        let error = notification.error_object();
        Self {
            request_body: error.and_then(|e| e.request_body()),
            request_url: error.and_then(|e| e.request_url()),
            body_status: error.and_then(|e| e.body_status()),
            error_code: error.and_then(|e| e.error_code()),
            message: notification.error_message(),
        }
    }
}

/// Position of the first entry matching `incoming`'s key.
pub(crate) fn find_duplicate(existing: &[Notification], incoming: &Notification) -> Option<usize> {
    let key = DedupKey::of(incoming);
    existing.iter().position(|n| DedupKey::of(n) == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::error_object::ErrorObject;
    use crate::notifications::notification::{NotificationId, Payload, Timeout};

    fn message(text: &str, at: i64) -> Notification {
        Notification::new(
            Payload::ErrorMessage(text.into()),
            Timeout::Persistent,
            NotificationId::from_millis(at),
        )
    }

    fn object(error: ErrorObject, at: i64) -> Notification {
        Notification::new(
            Payload::ErrorObject(error),
            Timeout::Persistent,
            NotificationId::from_millis(at),
        )
    }

    fn bad_request() -> ErrorObject {
        ErrorObject::new()
            .with_status(400)
            .with_request("/clients", Some("{\"id\":1}".into()))
            .with_body(Some(400), Some("invalid".into()))
    }

    #[test]
    fn same_message_matches() {
        let list = vec![message("A", 1), message("B", 2)];
        assert_eq!(find_duplicate(&list, &message("B", 3)), Some(1));
    }

    #[test]
    fn different_message_does_not_match() {
        let list = vec![message("A", 1)];
        assert_eq!(find_duplicate(&list, &message("a", 2)), None);
    }

    #[test]
    fn empty_list_has_no_duplicate() {
        assert_eq!(find_duplicate(&[], &message("A", 1)), None);
    }

    #[test]
    fn identical_error_objects_match() {
        let list = vec![object(bad_request(), 1)];
        assert_eq!(find_duplicate(&list, &object(bad_request(), 2)), Some(0));
    }

    #[test]
    fn http_status_line_is_not_part_of_the_key() {
        let list = vec![object(bad_request(), 1)];
        let other_line = bad_request().with_status(502);
        assert_eq!(find_duplicate(&list, &object(other_line, 2)), Some(0));
    }

    #[test]
    fn request_body_mismatch_breaks_match() {
        let list = vec![object(bad_request(), 1)];
        let other = bad_request().with_request("/clients", Some("{\"id\":2}".into()));
        assert_eq!(find_duplicate(&list, &object(other, 2)), None);
    }

    #[test]
    fn present_versus_absent_field_breaks_match() {
        let list = vec![object(bad_request(), 1)];
        let no_code = bad_request().with_body(Some(400), None);
        assert_eq!(find_duplicate(&list, &object(no_code, 2)), None);
    }

    #[test]
    fn error_object_never_matches_plain_message() {
        let list = vec![message("Network Error", 1)];
        let network = ErrorObject::new().with_message("Network Error");
        assert_eq!(find_duplicate(&list, &object(network, 2)), None);
    }

    #[test]
    fn empty_error_objects_match_each_other() {
        let list = vec![object(ErrorObject::new(), 1)];
        assert_eq!(find_duplicate(&list, &object(ErrorObject::new(), 2)), Some(0));
    }

    #[test]
    fn warning_flag_is_ignored() {
        let list = vec![message("Disk almost full", 1).into_warning()];
        assert_eq!(find_duplicate(&list, &message("Disk almost full", 2)), Some(0));
    }
}
