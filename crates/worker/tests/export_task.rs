//! Integration tests for the export tick against a stub product service.
//!
//! Each test serves a canned reply on an ephemeral port so transport and
//! conversion behaviour can be exercised without a database.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use catalog_core::rpc::{ProductCall, SERVICE_PATH};
use catalog_worker::client::{CatalogClient, ClientError};
use catalog_worker::task::{ExportError, ExportTask};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Serve `body` with `status` for every POST to the service path.
///
/// The stub only answers calls that deserialize as `GetAllProducts`.
async fn stub_service(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().route(
        SERVICE_PATH,
        post(move |axum::Json(call): axum::Json<ProductCall>| async move {
            assert_eq!(call, ProductCall::GetAllProducts);
            (status, body)
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn task_for(addr: SocketAddr, dir: &Path) -> ExportTask {
    ExportTask::new(
        CatalogClient::new(format!("http://{addr}{SERVICE_PATH}")),
        dir.to_path_buf(),
    )
}

fn files(dir: &Path) -> Vec<PathBuf> {
    let mut out: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    out.sort();
    out
}

const TWO_PRODUCTS: &str = r#"{"data":[
    {"id":1,"item_id":"I1","size_label":"S","barcode":"B1","color":"Mavi","price":"5.00"},
    {"id":2,"item_id":"I2","size_label":"L","barcode":"B2","color":"Kýrmýzý","price":"10.00"}
]}"#;

// ---------------------------------------------------------------------------
// Test: successful tick
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tick_writes_snapshot_into_fresh_directory() {
    let addr = stub_service(StatusCode::OK, TWO_PRODUCTS).await;
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("json");

    let outcome = task_for(addr, &dir).try_run().await.unwrap();

    assert!(outcome.converted);
    assert_eq!(outcome.product_count, 2);
    assert_eq!(files(&dir), vec![outcome.path.clone()]);

    let name = outcome.path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("products_") && name.ends_with(".json"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&outcome.path).unwrap()).unwrap();
    assert_eq!(json["products"].as_array().unwrap().len(), 2);
    assert_eq!(json["products"][1]["color"], "Kýrmýzý");
}

#[tokio::test]
async fn tick_replaces_previous_exports() {
    let addr = stub_service(StatusCode::OK, TWO_PRODUCTS).await;
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    std::fs::write(dir.join("products_20200101_000000.json"), "{}").unwrap();
    std::fs::write(dir.join("products_20200101_000200.json"), "{}").unwrap();

    let outcome = task_for(addr, dir).try_run().await.unwrap();

    assert_eq!(files(dir), vec![outcome.path]);
}

// ---------------------------------------------------------------------------
// Test: conversion failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unconvertible_reply_writes_error_record() {
    let addr = stub_service(StatusCode::OK, "<Envelope>not json</Envelope>").await;
    let tmp = tempfile::tempdir().unwrap();

    let outcome = task_for(addr, tmp.path()).try_run().await.unwrap();

    assert!(!outcome.converted);
    assert_eq!(outcome.product_count, 0);
    assert_eq!(files(tmp.path()), vec![outcome.path.clone()]);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&outcome.path).unwrap()).unwrap();
    assert_eq!(json["raw_input"], "<Envelope>not json</Envelope>");
    assert!(json["error"].is_string());
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: transport failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_aborts_tick_and_keeps_previous_file() {
    let addr = stub_service(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#).await;
    let tmp = tempfile::tempdir().unwrap();
    let previous = tmp.path().join("products_20200101_000000.json");
    std::fs::write(&previous, "{}").unwrap();

    let result = task_for(addr, tmp.path()).try_run().await;

    assert_matches!(
        result,
        Err(ExportError::Transport(ClientError::Rpc { status: 500, .. }))
    );
    assert_eq!(files(tmp.path()), vec![previous]);
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("json");
    let task = task_for(addr, &dir);

    assert_matches!(
        task.try_run().await,
        Err(ExportError::Transport(ClientError::Request(_)))
    );
    assert!(!dir.exists());

    // The scheduled entry point swallows the same failure.
    task.run_once().await;
    assert!(!dir.exists());
}
