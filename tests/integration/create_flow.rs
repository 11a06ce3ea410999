//! Reconciliation runs through the HTTP client

use mockito::{Matcher, Server};
use monitor_sync::commands::create;
use monitor_sync::reconcile::{ReconcileMode, ReconcileOptions};
use monitor_sync::sources::{SourceSelection, INFRASTRUCTURE_DIR, MONITORS_DIR};
use serde_json::json;
use tempfile::TempDir;

use super::helpers::{client_for, write_definition};

#[test]
fn test_existing_monitor_updated_new_monitor_created() {
    let temp = TempDir::new().unwrap();
    write_definition(&temp.path().join(MONITORS_DIR).join("cpu.yaml"), "cpu-high");
    write_definition(
        &temp.path().join(INFRASTRUCTURE_DIR).join("disk.yaml"),
        "disk-full",
    );

    let mut server = Server::new();
    let list = server
        .mock("GET", "/api/v1/monitor")
        .with_status(200)
        .with_body(json!([{"id": 42, "name": "cpu-high"}]).to_string())
        .expect(2)
        .create();
    let update = server
        .mock("PUT", "/api/v1/monitor/42")
        .match_body(Matcher::PartialJson(json!({
            "name": "cpu-high",
            "type": "metric alert",
            "tags": ["team:infra"],
            "options": {"notify_no_data": false}
        })))
        .with_status(200)
        .with_body(json!({"id": 42, "name": "cpu-high"}).to_string())
        .expect(1)
        .create();
    let create_call = server
        .mock("POST", "/api/v1/monitor")
        .match_body(Matcher::PartialJson(json!({"name": "disk-full"})))
        .with_status(200)
        .with_body(json!({"id": 77, "name": "disk-full"}).to_string())
        .expect(1)
        .create();

    let selection = SourceSelection {
        monitors: true,
        infrastructure: true,
        ..Default::default()
    };
    let summary = create::run(
        &client_for(&server),
        &selection,
        ReconcileOptions::default(),
        temp.path(),
    )
    .unwrap();

    list.assert();
    update.assert();
    create_call.assert();
    assert_eq!(summary.created, 1);
    assert_eq!(summary.updated, 1);
}

#[test]
fn test_nothing_to_process_makes_no_requests() {
    let temp = TempDir::new().unwrap();
    let mut server = Server::new();
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create();

    let selection = SourceSelection {
        monitors: true,
        infrastructure: true,
        ..Default::default()
    };
    let result = create::run(
        &client_for(&server),
        &selection,
        ReconcileOptions::default(),
        temp.path(),
    );

    assert!(result.is_err());
    any.assert();
}

#[test]
fn test_silenced_run_sends_wildcard_mute() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("one.yaml");
    write_definition(&file, "one");

    let mut server = Server::new();
    let _list = server
        .mock("GET", "/api/v1/monitor")
        .with_status(200)
        .with_body("[]")
        .create();
    let create_call = server
        .mock("POST", "/api/v1/monitor")
        .match_body(Matcher::PartialJson(
            json!({"options": {"silenced": {"*": null}}}),
        ))
        .with_status(200)
        .with_body(json!({"id": 1, "name": "one"}).to_string())
        .create();

    let selection = SourceSelection {
        configs: vec![file],
        ..Default::default()
    };
    let options = ReconcileOptions {
        silence: true,
        ..Default::default()
    };
    create::run(&client_for(&server), &selection, options, temp.path()).unwrap();

    create_call.assert();
}

#[test]
fn test_diff_mode_leaves_matching_monitor_alone() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("cpu.yaml");
    write_definition(&file, "cpu-high");

    let mut server = Server::new();
    let _list = server
        .mock("GET", "/api/v1/monitor")
        .with_status(200)
        .with_body(
            json!([{
                "id": 42,
                "name": "cpu-high",
                "type": "metric alert",
                "query": "avg(last_5m):avg:system.cpu.user{*} > 90",
                "message": "cpu-high fired",
                "tags": ["team:infra"],
                "options": {"notify_no_data": false, "include_tags": true}
            }])
            .to_string(),
        )
        .create();
    let update = server
        .mock("PUT", "/api/v1/monitor/42")
        .expect(0)
        .create();

    let selection = SourceSelection {
        configs: vec![file],
        ..Default::default()
    };
    let options = ReconcileOptions {
        mode: ReconcileMode::Diff,
        ..Default::default()
    };
    let summary = create::run(&client_for(&server), &selection, options, temp.path()).unwrap();

    update.assert();
    assert_eq!(summary.unchanged, 1);
}

#[test]
fn test_remote_failure_stops_the_run() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.yaml");
    let second = temp.path().join("b.yaml");
    write_definition(&first, "a");
    write_definition(&second, "b");

    let mut server = Server::new();
    let _list = server
        .mock("GET", "/api/v1/monitor")
        .with_status(200)
        .with_body("[]")
        .create();
    let create_call = server
        .mock("POST", "/api/v1/monitor")
        .with_status(400)
        .with_body(json!({"errors": ["Invalid query"]}).to_string())
        .expect(1)
        .create();

    let selection = SourceSelection {
        configs: vec![first, second],
        ..Default::default()
    };
    let err = create::run(
        &client_for(&server),
        &selection,
        ReconcileOptions::default(),
        temp.path(),
    )
    .unwrap_err();

    create_call.assert();
    assert!(format!("{err:#}").contains("Invalid query"));
}
