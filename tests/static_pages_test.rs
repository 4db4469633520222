mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::app;
use tower::util::ServiceExt;

#[tokio::test]
async fn html_pages_are_served() {
    for uri in ["/", "/app", "/content-creator"] {
        let response = app(None)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "page {}", uri);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert!(content_type.starts_with("text/html"), "page {}", uri);
    }
}
