use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use feedback_service::domain::feedback::Feedback;
use feedback_service::dto::feedback::{FeedbackPage, MessageResponse};
use feedback_service::repository::DieselRepository;
use feedback_service::routes::feedback::configure;

mod common;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .configure(configure),
        )
        .await
    };
}

fn seeded(filename: &str) -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new(filename);
    let repo = test_db.repository();
    common::seed(&repo);
    (test_db, repo)
}

#[actix_web::test]
async fn test_list_returns_page_envelope() {
    let (_db, repo) = seeded("routes_list_envelope.db");
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/feedback?page=1&pageSize=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalRecords"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    assert!(body["data"][0]["customerId"].is_number());
}

#[actix_web::test]
async fn test_list_without_query_uses_defaults() {
    let (_db, repo) = seeded("routes_list_defaults.db");
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/feedback").to_request();
    let page: FeedbackPage = test::call_and_read_body_json(&app, req).await;

    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 1000);
    assert_eq!(page.total_records, 3);
    assert_eq!(page.data.len(), 3);
}

#[actix_web::test]
async fn test_filter_by_rating() {
    let (_db, repo) = seeded("routes_filter_by_rating.db");
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/feedback/filter")
        .set_json(json!({ "rating": 5 }))
        .to_request();
    let page: FeedbackPage = test::call_and_read_body_json(&app, req).await;

    assert_eq!(page.total_records, 1);
    assert_eq!(page.data[0].rating, 5);
}

#[actix_web::test]
async fn test_filter_without_matches_is_not_found() {
    let (_db, repo) = seeded("routes_filter_no_matches.db");
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/feedback/filter")
        .set_json(json!({ "comment": "terrible" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(
        body.message,
        "No feedback entries match the specified criteria."
    );
}

#[actix_web::test]
async fn test_create_returns_location_and_record() {
    let test_db = common::TestDb::new("routes_create.db");
    let app = init_app!(test_db.repository());

    let req = test::TestRequest::post()
        .uri("/api/feedback")
        .set_json(json!({ "customerId": 9, "productId": 4, "rating": 5, "comment": "Love it" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let created: Feedback = test::read_body_json(resp).await;
    assert_eq!(location, Some(format!("/api/feedback/{}", created.id)));
    assert_eq!(created.comment.as_deref(), Some("Love it"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/feedback/{}", created.id))
        .to_request();
    let fetched: Feedback = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_create_rejects_rating_outside_scale() {
    let test_db = common::TestDb::new("routes_create_invalid.db");
    let app = init_app!(test_db.repository());

    let req = test::TestRequest::post()
        .uri("/api/feedback")
        .set_json(json!({ "customerId": 1, "productId": 1, "rating": 6 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_show_missing_feedback_is_not_found() {
    let (_db, repo) = seeded("routes_show_missing.db");
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/feedback/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Feedback with ID 99 not found.");
}

#[actix_web::test]
async fn test_update_existing_and_missing() {
    let (_db, repo) = seeded("routes_update.db");
    let app = init_app!(repo);
    let body = json!({ "customerId": 1, "productId": 1, "rating": 2, "comment": "Changed my mind" });

    let req = test::TestRequest::put()
        .uri("/api/feedback/1")
        .set_json(&body)
        .to_request();
    let updated: Feedback = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.rating, 2);
    assert_eq!(updated.comment.as_deref(), Some("Changed my mind"));

    let req = test::TestRequest::put()
        .uri("/api/feedback/42")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let message: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(message.message, "Feedback with ID 42 not found.");
}

#[actix_web::test]
async fn test_delete_then_delete_again() {
    let (_db, repo) = seeded("routes_delete.db");
    let app = init_app!(repo);

    let req = test::TestRequest::delete().uri("/api/feedback/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/api/feedback/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
