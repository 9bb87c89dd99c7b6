//! Status mapping and redaction of error responses.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::Value;

const TRACE: &str = "00000000-0000-0000-0000-000000000000";

async fn render(error: Error) -> (StatusCode, Option<String>, Value) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_follows_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_hide_their_message() {
    let (status, header, body) = render(Error::internal("password=hunter2").with_trace_id(TRACE)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE));
    assert_eq!(body.get("message").and_then(Value::as_str), Some(REDACTED_MESSAGE));
    assert_eq!(body.get("code").and_then(Value::as_str), Some("internal_error"));
    assert_eq!(body.get("traceId").and_then(Value::as_str), Some(TRACE));
}

#[rstest]
#[actix_web::test]
async fn other_errors_keep_their_message() {
    let (status, header, body) = render(Error::service_unavailable("database offline")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(header, None);
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("database offline")
    );
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("service_unavailable")
    );
}
