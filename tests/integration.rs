// SPDX-License-Identifier: MPL-2.0
use notify_store::config::{self, Config, ErrorsConfig, SuccessConfig};
use notify_store::notifications::{ManualClock, Timeout};
use notify_store::{Action, ErrorObject, NotificationId, NotificationStore, NotificationsState};
use serde_json::json;
use std::time::Duration;
use tempfile::tempdir;

fn api_error(code: &str) -> ErrorObject {
    ErrorObject::from_value(json!({
        "message": "Request failed with status code 400",
        "response": {
            "status": 400,
            "config": { "url": "/api/clients", "data": "{\"member\":\"GOV\"}" },
            "data": { "status": 400, "error": { "code": code } }
        }
    }))
    .expect("valid error snapshot")
}

#[test]
fn duplicate_api_errors_collapse_to_latest() {
    let clock = ManualClock::new(1_000);
    let mut store = NotificationStore::with_clock(Config::default(), clock.clone());

    store.show_error(api_error("validation_failure"));
    clock.advance(2_000);
    store.show_error(api_error("validation_failure"));

    let errors = store.error_notifications();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].count(), 2);
    assert_eq!(errors[0].time_added(), 3_000);

    store.show_error(api_error("conflict"));
    assert_eq!(store.error_notifications().len(), 2);
}

#[test]
fn session_expiry_is_silent() {
    let mut store = NotificationStore::new();
    store.show_error_message("Already here");
    let before = store.state().clone();

    let expired = ErrorObject::from_json(r#"{ "response": { "status": 401 } }"#)
        .expect("valid error snapshot");
    store.dispatch(Action::ShowError(expired));

    assert_eq!(store.state(), &before);
}

#[test]
fn ui_session_round_trip() {
    let clock = ManualClock::new(10);
    let mut store = NotificationStore::with_clock(Config::default(), clock.clone());

    store.show_success("Client added");
    clock.advance(1);
    store.show_warning_message("Certificate expires soon");
    clock.advance(1);
    store.show_error_message("Backup failed");

    let warning_id = store.error_notifications()[0].id();
    assert!(store.delete_notification(warning_id));
    assert!(!store.delete_notification(NotificationId::from_millis(-5)));

    store.clear_error_notifications();
    assert!(store.error_notifications().is_empty());
    assert_eq!(store.success_notifications().len(), 1);

    store.reset_state();
    assert_eq!(store.state(), &NotificationsState::default());
}

#[test]
fn state_json_matches_front_end_shape() {
    let clock = ManualClock::new(1_700_000_000_000);
    let mut store = NotificationStore::with_clock(Config::default(), clock);
    store.show_warning_message("Check settings");

    let json = serde_json::to_value(store.state()).expect("serialization should succeed");
    assert_eq!(
        json,
        json!({
            "errorNotifications": [{
                "timeout": -1,
                "timeAdded": 1_700_000_000_000_i64,
                "show": true,
                "count": 1,
                "isWarning": true,
                "errorMessage": "Check settings"
            }],
            "successNotifications": []
        })
    );
}

#[test]
fn settings_file_drives_store_policy() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = Config {
        success: SuccessConfig {
            timeout_ms: Some(1_500),
        },
        errors: ErrorsConfig {
            suppressed_statuses: vec![401, 403],
        },
    };
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut store = NotificationStore::with_clock(loaded, ManualClock::new(0));
    store.show_success("Done");
    assert!(!store.show_error(ErrorObject::new().with_status(403)));

    assert_eq!(
        store.success_notifications()[0].timeout(),
        Timeout::After(Duration::from_millis(1_500))
    );
    assert!(store.error_notifications().is_empty());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn named_dispatch_covers_every_action() {
    let clock = ManualClock::new(100);
    let mut store = NotificationStore::with_clock(Config::default(), clock.clone());

    let calls = [
        ("showSuccess", json!("Saved")),
        ("showErrorMessage", json!("Failed")),
        ("showWarningMessage", json!("Careful")),
        ("showError", json!({ "message": "Network Error" })),
    ];
    for (name, payload) in calls {
        store.dispatch_named(name, payload).expect("known action");
        clock.advance(1);
    }
    assert_eq!(store.success_notifications().len(), 1);
    assert_eq!(store.error_notifications().len(), 3);

    store
        .dispatch_named("deleteSuccessNotification", json!(100))
        .expect("known action");
    assert!(store.success_notifications().is_empty());

    store
        .dispatch_named("clearErrorNotifications", serde_json::Value::Null)
        .expect("known action");
    assert!(store.error_notifications().is_empty());
}

#[test]
fn gateway_error_page_still_reaches_error_list() {
    let mut store = NotificationStore::with_clock(Config::default(), ManualClock::new(0));

    store
        .dispatch_named(
            "showError",
            json!({
                "message": "Request failed with status code 502",
                "response": {
                    "status": 502,
                    "config": { "url": "/api/x" },
                    "data": "<html>Bad Gateway</html>"
                }
            }),
        )
        .expect("html body should be accepted");

    let errors = store.error_notifications();
    assert_eq!(errors.len(), 1);
    let error = errors[0].error_object().expect("error payload");
    assert_eq!(error.http_status(), Some(502));
    assert_eq!(error.request_url(), Some("/api/x"));
    assert_eq!(error.error_code(), None);
}
