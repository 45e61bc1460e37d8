//! Tests for raw GraphQL query execution
//!
//! These tests run `execute_query` against a local mockito server and check the
//! request it sends as well as how responses and failures are surfaced.

use mockito::Matcher;
use serde_json::json;

use monday_insight::monday::MondayApiError;
use monday_insight::types::{ApiEndpoint, QueryVariables};
use test_util::{TEST_API_KEY, create_test_endpoint, create_test_monday_client};

const BOARDS_QUERY: &str = "query ($ids: [ID!]) { boards (ids: $ids) { id name } }";

/// The parsed body is returned untouched and the request carries auth and variables
#[tokio::test]
async fn test_execute_query_returns_parsed_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", TEST_API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "query": BOARDS_QUERY,
            "variables": {"ids": [123]}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"boards": [{"id": "123", "name": "Roadmap"}]}}"#)
        .create_async()
        .await;

    let client = create_test_monday_client();
    let endpoint = create_test_endpoint(&server);

    let mut variables = QueryVariables::new();
    variables.insert("ids".to_string(), json!([123]));

    let result = client
        .execute_query(&endpoint, BOARDS_QUERY, Some(variables))
        .await
        .expect("query should succeed");

    assert_eq!(
        result,
        json!({"data": {"boards": [{"id": "123", "name": "Roadmap"}]}})
    );
    mock.assert_async().await;
}

/// Missing or empty variables are left out of the request body
#[tokio::test]
async fn test_execute_query_omits_empty_variables() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({"query": BOARDS_QUERY})))
        .with_status(200)
        .with_body(r#"{"data": {"boards": []}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = create_test_monday_client();
    let endpoint = create_test_endpoint(&server);

    client
        .execute_query(&endpoint, BOARDS_QUERY, None)
        .await
        .expect("query without variables should succeed");
    client
        .execute_query(&endpoint, BOARDS_QUERY, Some(QueryVariables::new()))
        .await
        .expect("query with empty variables should succeed");

    mock.assert_async().await;
}

/// GraphQL errors in a 200 response are not treated as failures
#[tokio::test]
async fn test_execute_query_passes_graphql_errors_through() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "errors": [{"message": "Field 'nope' doesn't exist on type 'Board'"}],
        "account_id": 1
    });
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = create_test_monday_client();
    let endpoint = create_test_endpoint(&server);

    let result = client
        .execute_query(&endpoint, "query { boards { nope } }", None)
        .await
        .expect("GraphQL errors are returned to the caller as data");
    assert_eq!(result, body);
}

/// A non-2xx status surfaces as a transport error carrying status and body
#[tokio::test]
async fn test_execute_query_non_success_status_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = create_test_monday_client();
    let endpoint = create_test_endpoint(&server);

    let error = client
        .execute_query(&endpoint, BOARDS_QUERY, None)
        .await
        .expect_err("HTTP 500 must fail");

    assert!(error.is_transport(), "unexpected error: {:?}", error);
    assert_eq!(error.status(), Some(500));
    match error {
        MondayApiError::Transport { body, .. } => {
            assert_eq!(body.as_deref(), Some("Internal Server Error"))
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

/// Unauthorized requests are transport errors as well
#[tokio::test]
async fn test_execute_query_unauthorized_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(401)
        .with_body(r#"{"errors": [{"message": "Not Authenticated"}]}"#)
        .create_async()
        .await;

    let client = create_test_monday_client();
    let endpoint = create_test_endpoint(&server);

    let error = client
        .execute_query(&endpoint, BOARDS_QUERY, None)
        .await
        .expect_err("HTTP 401 must fail");
    assert_eq!(error.status(), Some(401));
}

/// A body that is not JSON surfaces as a decode error
#[tokio::test]
async fn test_execute_query_invalid_json_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = create_test_monday_client();
    let endpoint = create_test_endpoint(&server);

    let error = client
        .execute_query(&endpoint, BOARDS_QUERY, None)
        .await
        .expect_err("non-JSON body must fail");
    assert!(error.is_decode(), "unexpected error: {:?}", error);
}

/// Nothing listening on the endpoint is a transport error without a status
#[tokio::test]
async fn test_execute_query_connection_failure_is_transport_error() {
    let client = create_test_monday_client();
    let endpoint = ApiEndpoint::new(TEST_API_KEY, "http://127.0.0.1:1");

    let error = client
        .execute_query(&endpoint, BOARDS_QUERY, None)
        .await
        .expect_err("connection failure must fail");
    assert!(error.is_transport(), "unexpected error: {:?}", error);
    assert_eq!(error.status(), None);
}
