//! HTTP tests for the `/jobs` resource.

mod common;

use axum::http::{Request, StatusCode};
use common::*;
use snickers::infrastructure::storage::Storage;
use snickers::modules::job::model::Job;
use snickers::modules::preset::model::Preset;

const CREATE_BODY: &str =
    r#"{"source": "http://flv.io/src.mp4", "destination": "s3://l@p:google.com", "preset": "presetName"}"#;

#[tokio::test]
async fn test_list_jobs_content_type() {
    let (app, _store) = test_app();

    let response = send(&app, get("/jobs")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), JSON_UTF8);
}

#[tokio::test]
async fn test_list_jobs_empty_is_array() {
    let (app, _store) = test_app();

    let response = send(&app, get("/jobs")).await;
    let body = body_to_string(response.into_body()).await;

    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_list_jobs_returns_stored_jobs() {
    let (app, store) = test_app();
    store.store_job(Job::with_id("123")).await.unwrap();
    store.store_job(Job::with_id("321")).await.unwrap();

    let response = send(&app, get("/jobs")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_string(response.into_body()).await;
    let first = r#"{"id":"123","source":"","destination":"","preset":{"video":{},"audio":{}},"status":"","progress":""}"#;
    let second = r#"{"id":"321","source":"","destination":"","preset":{"video":{},"audio":{}},"status":"","progress":""}"#;
    let either_order = [
        format!("[{},{}]", first, second),
        format!("[{},{}]", second, first),
    ];
    assert!(either_order.contains(&body), "unexpected body: {}", body);
}

#[tokio::test]
async fn test_clear_database_empties_listing() {
    let (app, store) = test_app();
    store.store_job(Job::with_id("123")).await.unwrap();
    store.clear_database().await.unwrap();

    let response = send(&app, get("/jobs")).await;
    let body = body_to_string(response.into_body()).await;

    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_create_job() {
    let (app, store) = test_app();
    store.store_preset(Preset::named("presetName")).await.unwrap();

    let response = send(&app, post("/jobs", CREATE_BODY)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), JSON_UTF8);

    let jobs = store.get_jobs().await.unwrap();
    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert_eq!(job.source, "http://flv.io/src.mp4");
    assert_eq!(job.destination, "s3://l@p:google.com");
    assert_eq!(job.preset.name, "presetName");
    assert!(!job.id.is_empty());

    let body = body_to_string(response.into_body()).await;
    let returned: Job = serde_json::from_str(&body).unwrap();
    assert_eq!(&returned, job);
}

#[tokio::test]
async fn test_create_job_snapshots_preset() {
    let (app, store) = test_app();
    let mut preset = Preset::named("presetName");
    preset.video.insert("codec".into(), "h264".into());
    store.store_preset(preset).await.unwrap();

    send(&app, post("/jobs", CREATE_BODY)).await;

    // Replacing the preset later leaves the job's copy alone
    store.store_preset(Preset::named("presetName")).await.unwrap();

    let jobs = store.get_jobs().await.unwrap();
    assert_eq!(jobs[0].preset.video.get("codec").map(String::as_str), Some("h264"));
}

#[tokio::test]
async fn test_create_job_assigns_distinct_ids() {
    let (app, store) = test_app();
    store.store_preset(Preset::named("presetName")).await.unwrap();

    send(&app, post("/jobs", CREATE_BODY)).await;
    send(&app, post("/jobs", CREATE_BODY)).await;

    let jobs = store.get_jobs().await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_ne!(jobs[0].id, jobs[1].id);
}

#[tokio::test]
async fn test_create_job_unknown_preset() {
    let (app, store) = test_app();

    let response = send(&app, post("/jobs", CREATE_BODY)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), JSON_UTF8);
    let body = body_to_string(response.into_body()).await;
    assert_eq!(body, r#"{"error": "retrieving preset: preset not found"}"#);
    assert!(store.get_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_job_malformed_body() {
    let (app, store) = test_app();

    let response = send(&app, post("/jobs", "{not json")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), JSON_UTF8);
    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("invalid request body"));
    assert!(store.get_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_job_accepts_json_content_type() {
    let (app, store) = test_app();
    store.store_preset(Preset::named("presetName")).await.unwrap();

    let request = Request::post("/jobs")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(CREATE_BODY))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.get_jobs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_job_by_id() {
    let (app, store) = test_app();
    let job = Job {
        id: "123-123-123".into(),
        source: "http://source.here.mp4".into(),
        destination: "s3://ae@ae.com".into(),
        preset: Preset::default(),
        status: "created".into(),
        progress: "0%".into(),
    };
    store.store_job(job.clone()).await.unwrap();

    let response = send(&app, get("/jobs/123-123-123")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), JSON_UTF8);
    let body = body_to_string(response.into_body()).await;
    assert_eq!(body, serde_json::to_string(&job).unwrap());
}

#[tokio::test]
async fn test_get_job_not_found() {
    let (app, _store) = test_app();

    let response = send(&app, get("/jobs/missing")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&response), JSON_UTF8);
    let body = body_to_string(response.into_body()).await;
    assert_eq!(body, r#"{"error": "job not found"}"#);
}

#[tokio::test]
async fn test_unsupported_method_returns_error_envelope() {
    let (app, _store) = test_app();

    for uri in ["/jobs", "/jobs/1"] {
        let request = Request::delete(uri).body(axum::body::Body::empty()).unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(content_type(&response), JSON_UTF8);
        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "method not allowed");
    }
}

#[tokio::test]
async fn test_get_job_invalid_path_returns_error_envelope() {
    let (app, _store) = test_app();

    let response = send(&app, get("/jobs/%FF")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), JSON_UTF8);
    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}
