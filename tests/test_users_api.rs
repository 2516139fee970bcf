//! End-to-end tests for the user API over the full route table.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, App, Error};
use serde_json::{json, Value};

use userbox::error::ErrorResponse;
use userbox::models::{User, UserListResponse};
use userbox::{lifecycle, routes};

async fn test_app(
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(lifecycle::bootstrap())
            .app_data(lifecycle::json_config())
            .configure(routes::configure),
    )
    .await
}

async fn create<S, B>(app: &S, body: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
{
    let req = test::TestRequest::post().uri("/users").set_json(&body).to_request();
    test::call_service(app, req).await
}

#[actix_web::test]
async fn test_create_returns_normalized_record() {
    let app = test_app().await;

    let resp = create(&app, json!({"name": "  Alice ", "email": "Alice@Example.COM"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user: User = test::read_body_json(resp).await;
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.id.is_empty());
}

#[actix_web::test]
async fn test_create_then_get_round_trip() {
    let app = test_app().await;

    let resp = create(&app, json!({"name": "Bob", "email": "bob@example.com"})).await;
    let created: User = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: User = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_get_is_idempotent() {
    let app = test_app().await;

    let resp = create(&app, json!({"name": "Carol", "email": "carol@example.com"})).await;
    let created: User = test::read_body_json(resp).await;

    for _ in 0..3 {
        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let fetched: User = test::read_body_json(resp).await;
        assert_eq!(fetched, created);
    }

    // Store size unchanged by reads
    let req = test::TestRequest::get().uri("/users").to_request();
    let list: UserListResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.count, 1);
}

#[actix_web::test]
async fn test_get_unknown_id_is_404_with_id_in_message() {
    let app = test_app().await;

    let req = test::TestRequest::get().uri("/users/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "USER_NOT_FOUND");
    assert!(body.message.contains("does-not-exist"));
}

#[actix_web::test]
async fn test_create_missing_fields() {
    let app = test_app().await;

    for body in [json!({}), json!({"name": "Alice"}), json!({"email": "a@b.com"})] {
        let resp = create(&app, body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "MISSING_FIELDS");
    }
}

#[actix_web::test]
async fn test_create_whitespace_name_rejected() {
    let app = test_app().await;

    let resp = create(&app, json!({"name": "  ", "email": "a@b.com"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "INVALID_NAME");
}

#[actix_web::test]
async fn test_create_email_validation_is_loose_but_real() {
    let app = test_app().await;

    let resp = create(&app, json!({"name": "A", "email": "not-an-email"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "INVALID_EMAIL");

    // One dot in the domain is enough
    let resp = create(&app, json!({"name": "A", "email": "a@b.c"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_duplicate_email_differing_only_by_case_conflicts() {
    let app = test_app().await;

    let resp = create(&app, json!({"name": "A", "email": "A@x.com"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = create(&app, json!({"name": "B", "email": "a@x.com"})).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "EMAIL_EXISTS");

    // Failed create committed nothing
    let req = test::TestRequest::get().uri("/users").to_request();
    let list: UserListResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.count, 1);
}

#[actix_web::test]
async fn test_list_contains_exactly_the_created_users() {
    let app = test_app().await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let resp = create(
            &app,
            json!({"name": format!("User {}", i), "email": format!("user{}@x.com", i)}),
        )
        .await;
        let user: User = test::read_body_json(resp).await;
        ids.push(user.id);
    }

    let req = test::TestRequest::get().uri("/users").to_request();
    let list: UserListResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.count, 4);
    assert_eq!(list.users.len(), 4);
    for id in &ids {
        assert!(list.users.iter().any(|u| &u.id == id));
    }
}

#[actix_web::test]
async fn test_unmatched_route_reports_method_and_path() {
    let app = test_app().await;

    let req = test::TestRequest::delete().uri("/users/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "ROUTE_NOT_FOUND");
    assert!(body.message.contains("DELETE"));
    assert!(body.message.contains("/users/42"));
}

#[actix_web::test]
async fn test_empty_body_counts_as_missing_fields() {
    let app = test_app().await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "MISSING_FIELDS");
}

#[actix_web::test]
async fn test_malformed_json_hits_the_500_boundary() {
    let app = test_app().await;

    // Both outright garbage and truncated JSON: only a fully empty body gets
    // the missing-fields treatment.
    for payload in ["{not json", r#"{"name":"#] {
        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "INTERNAL_ERROR");
    }
}

#[actix_web::test]
async fn test_healthcheck() {
    let app = test_app().await;

    let req = test::TestRequest::get().uri("/healthz").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}
