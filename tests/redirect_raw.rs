//! Redirect behavior for requests that bypass client-side URL handling.

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use redirector::routes::app_router;

#[tokio::test]
async fn test_path_and_query_pass_through_byte_exact() {
    let ctx = common::create_test_state();
    ctx.store
        .set_destination("blog.example.org", "site.example.io");

    let response = common::send(
        app_router(ctx.state),
        common::get("blog.example.org", "/Some%20Dir/Page.HTML/?q=%2Fa&Q=B"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://site.example.io/Some%20Dir/Page.HTML/?q=%2Fa&Q=B"
    );
}

#[tokio::test]
async fn test_trailing_slash_is_not_rewritten() {
    let ctx = common::create_test_state();
    ctx.store
        .set_destination("blog.example.org", "site.example.io");

    let response = common::send(
        app_router(ctx.state),
        common::get("blog.example.org", "/archive/"),
    )
    .await;

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://site.example.io/archive/"
    );
}

#[tokio::test]
async fn test_empty_query_has_no_separator() {
    let ctx = common::create_test_state();
    ctx.store
        .set_destination("blog.example.org", "site.example.io");

    let response = common::send(
        app_router(ctx.state),
        common::get("blog.example.org", "/page?"),
    )
    .await;

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://site.example.io/page"
    );
}

#[tokio::test]
async fn test_host_port_is_part_of_the_key() {
    let ctx = common::create_test_state();
    ctx.store
        .set_destination("blog.example.org", "site.example.io");
    ctx.store
        .set_destination("blog.example.org:8080", "staging.example.io");

    let response = common::send(
        app_router(ctx.state.clone()),
        common::get("blog.example.org:8080", "/"),
    )
    .await;

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://staging.example.io/"
    );
}

#[tokio::test]
async fn test_https_is_forced_for_absolute_form_requests() {
    let ctx = common::create_test_state();
    ctx.store
        .set_destination("blog.example.org", "site.example.io");

    let request = Request::builder()
        .uri("http://blog.example.org/a?b=1")
        .body(Body::empty())
        .unwrap();

    let response = common::send(app_router(ctx.state), request).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://site.example.io/a?b=1"
    );
}

#[tokio::test]
async fn test_absolute_form_authority_overrides_host_header() {
    let ctx = common::create_test_state();
    ctx.store.set_destination("a.example.com", "dest-a.example.io");
    ctx.store.set_destination("b.example.com", "dest-b.example.io");

    let request = Request::builder()
        .uri("http://a.example.com/x")
        .header("host", "b.example.com")
        .body(Body::empty())
        .unwrap();

    let response = common::send(app_router(ctx.state), request).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://dest-a.example.io/x"
    );
    assert_eq!(ctx.metrics.redirects_for("a.example.com"), 1);
    assert_eq!(ctx.metrics.redirects_for("b.example.com"), 0);
}

#[tokio::test]
async fn test_missing_host_is_not_found() {
    let ctx = common::create_test_state();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = common::send(app_router(ctx.state), request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    assert_eq!(ctx.metrics.unknown_domain(), 1);
    assert_eq!(ctx.metrics.total_redirects(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_count_exactly() {
    let ctx = common::create_test_state();
    ctx.store
        .set_destination("blog.example.org", "site.example.io");
    let app = app_router(ctx.state);

    let mut tasks = Vec::new();
    for i in 0..50 {
        let app = app.clone();
        let host = if i % 2 == 0 {
            "blog.example.org"
        } else {
            "unknown.example.com"
        };
        tasks.push(tokio::spawn(async move {
            common::send(app, common::get(host, "/")).await.status()
        }));
    }

    for task in tasks {
        let status = task.await.unwrap();
        assert!(
            status == StatusCode::TEMPORARY_REDIRECT || status == StatusCode::NOT_FOUND
        );
    }

    assert_eq!(ctx.metrics.redirects_for("blog.example.org"), 25);
    assert_eq!(ctx.metrics.unknown_domain(), 25);
}
