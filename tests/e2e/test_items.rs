use crate::e2e::helpers;

use helpers::{TestContext, SEEDED_ITEMS};
use hyper::StatusCode;
use jsonresp::domain::catalog::Item;
use jsonresp::{ApiError, CodecError, PageDetails};
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_first_page_with_next_cursor(ctx: &TestContext) {
    let response = ctx.client.get("/api/items").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "application/json");

    let paged = response.paged::<Vec<Item>>().unwrap();
    assert_eq!(paged.data.len(), 3);
    assert_eq!(paged.data[0].name, "Espresso");
    assert_eq!(
        paged.page,
        Some(PageDetails {
            prev: String::new(),
            next: "3".to_string(),
            total_size: SEEDED_ITEMS,
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_follow_cursors_across_pages(ctx: &TestContext) {
    let mut names = Vec::new();
    let mut path = "/api/items".to_string();

    loop {
        let response = ctx.client.get(&path).await.unwrap();
        response.assert_status(StatusCode::OK);

        let paged = response.paged::<Vec<Item>>().unwrap();
        names.extend(paged.data.into_iter().map(|item| item.name));

        let page = paged.page.expect("paged responses carry page details");
        if page.next.is_empty() {
            break;
        }
        path = format!("/api/items?page={}", page.next);
    }

    assert_eq!(names.len() as i64, SEEDED_ITEMS);
    assert_eq!(names.last().map(String::as_str), Some("Lungo"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_cap_requested_page_size(ctx: &TestContext) {
    let response = ctx.client.get("/api/items?page=2&size=50").await.unwrap();

    let paged = response.paged::<Vec<Item>>().unwrap();
    assert_eq!(paged.data.len(), 5);

    let page = paged.page.unwrap();
    assert_eq!(page.prev, "0");
    assert_eq!(page.next, "7");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_single_item_without_page(ctx: &TestContext) {
    let listed = ctx.client.get("/api/items?size=1").await.unwrap();
    let first = listed.data::<Vec<Item>>().unwrap().remove(0);

    let response = ctx
        .client
        .get(&format!("/api/items/{}", first.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let paged = response.paged::<Item>().unwrap();
    assert_eq!(paged.data, first);
    assert!(paged.page.is_none());
    assert!(response.json().get("page").is_none());
    assert!(response.json().get("error").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_missing_item_as_error_envelope(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/items/00000000-0000-0000-0000-000000000000")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_header("content-type", "application/json");

    let err = response.data::<Item>().unwrap_err();
    assert!(err.is(&ApiError::new(404, "")));
    assert_eq!(err.api_error(), Some(&ApiError::new(404, "item not found")));
    assert_eq!(err.to_string(), "item not found (404 Not Found)");

    let body = response.json();
    assert!(body.get("data").is_none());
    assert!(body.get("page").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_cursor(ctx: &TestContext) {
    let response = ctx.client.get("/api/items?page=abc").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        Some(ApiError::new(400, "invalid input: invalid page cursor 'abc'"))
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_unknown_routes_with_error_envelope(ctx: &TestContext) {
    let response = ctx.client.get("/api/unknown").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    let err = response.paged::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, CodecError::Server(_)));
    assert_eq!(response.error(), Some(ApiError::new(404, "no such route")));
}
