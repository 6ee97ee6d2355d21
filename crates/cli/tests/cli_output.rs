//! End-to-end tests for the `cafe-cli` binary.
//!
//! Each test runs the built binary from an empty temporary directory, so no
//! `.env` file is picked up, and checks its exit code and output streams.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::process::Output;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::process::Command;

const CAFE_CLI: &str = env!("CARGO_BIN_EXE_cafe-cli");

async fn run(cwd: &Path, args: &[&str], extra_env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(CAFE_CLI);
    command
        .args(args)
        .current_dir(cwd)
        .env("DATABASE_URL", "")
        .env("RUST_LOG", "info")
        .env("LOG_FORMAT", "text")
        .env("NO_COLOR", "1");
    for (key, value) in extra_env {
        command.env(key, value);
    }
    command.output().await.expect("spawn cafe-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

async fn echo_register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({ "received": body })))
}

async fn spawn_auth_service() -> String {
    let router = Router::new().route("/auth/register", post(echo_register));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{addr}")
}

// =============================================================================
// Failure path
// =============================================================================

#[tokio::test]
async fn test_failed_task_logs_to_stderr_and_exits_one() {
    let temp = tempfile::tempdir().unwrap();

    let output = run(temp.path(), &["db", "ping"], &[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "stdout: {}", stdout(&output));
    let err = stderr(&output);
    assert!(err.contains("Task failed"), "stderr: {err}");
    assert!(err.contains("DATABASE_URL"), "stderr: {err}");
    assert_eq!(err.matches("Task failed").count(), 1);
}

#[tokio::test]
async fn test_register_without_contact_fails_before_sending() {
    let temp = tempfile::tempdir().unwrap();

    let output = run(temp.path(), &["register"], &[]).await;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("either --email or --phone is required"), "stderr: {err}");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_register_phone_only_sends_no_email() {
    let temp = tempfile::tempdir().unwrap();
    let base = spawn_auth_service().await;

    let output = run(
        temp.path(),
        &["register", "--phone", "9841000000"],
        &[("REGISTRATION_BASE_URL", base.as_str())],
    )
    .await;

    let err = stderr(&output);
    assert_eq!(output.status.code(), Some(0), "stderr: {err}");
    assert!(err.contains("Status: 201 Created"), "stderr: {err}");
    assert!(err.contains(r#""phone":"9841000000""#), "stderr: {err}");
    assert!(err.contains(r#""shopName":"Test Cafe""#), "stderr: {err}");
    assert!(!err.contains(r#""email""#), "stderr: {err}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_unreachable_target_fails() {
    let temp = tempfile::tempdir().unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let output = run(
        temp.path(),
        &["register", "--email", "owner@example.com"],
        &[("REGISTRATION_BASE_URL", base.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Registration request failed"));
}
