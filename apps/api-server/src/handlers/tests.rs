use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::Utc;
use sea_orm::{DatabaseBackend, DbConn, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use uuid::Uuid;

use papyr_infra::database::entity::{post, user};

use super::configure_routes;
use crate::config::SiteSettings;
use crate::middleware::error::json_error_handler;
use crate::state::AppState;

fn post_row(id: Uuid, slug: &str) -> post::Model {
    post::Model {
        id,
        title: "Hello World".to_owned(),
        slug: slug.to_owned(),
        content: "First post".to_owned(),
        tags: "news, rust".to_owned(),
        media: "cover.jpg".to_owned(),
        is_published: true,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn empty_db() -> DbConn {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn state(db: DbConn) -> web::Data<AppState> {
    web::Data::new(AppState::new(db, SiteSettings::default()))
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(state(empty_db()))
            .configure(configure_routes),
    )
    .await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/health").to_request(),
    )
    .await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["enableStore"], true);
}

#[actix_web::test]
async fn test_show_post_by_slug_splits_tags() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_row(id, "hello-world")]])
        .into_connection();
    let app = test::init_service(App::new().app_data(state(db)).configure(configure_routes)).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/posts/hello-world")
            .to_request(),
    )
    .await;

    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["tags"], json!(["news", "rust"]));
    assert_eq!(body["isPublished"], true);
}

#[actix_web::test]
async fn test_unknown_slug_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();
    let app = test::init_service(App::new().app_data(state(db)).configure(configure_routes)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/posts/missing").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_put_uses_path_id() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .append_query_results([vec![post_row(id, "hello-world")]])
        .into_connection();
    let app = test::init_service(App::new().app_data(state(db)).configure(configure_routes)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({
            "id": Uuid::new_v4(),
            "title": "Hello World",
            "content": "First post",
            "tags": "news, rust",
            "isPublished": true
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["id"], id.to_string());
}

#[actix_web::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let app = test::init_service(App::new().app_data(state(db)).configure(configure_routes)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_disabled_section_is_forbidden() {
    let site = SiteSettings {
        enable_events: false,
        ..SiteSettings::default()
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(empty_db(), site)))
            .configure(configure_routes),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/events/published").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], 403);
    assert_eq!(body["detail"], "The events section is disabled");
}

#[actix_web::test]
async fn test_create_user_requires_password() {
    let app = test::init_service(
        App::new()
            .app_data(state(empty_db()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "email": "ada@example.com", "firstName": "Ada" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_put_creating_user_requires_password() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();
    let app = test::init_service(App::new().app_data(state(db)).configure(configure_routes)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", Uuid::new_v4()))
        .set_json(json!({ "email": "ada@example.com", "firstName": "Ada" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["detail"], "Password is required");
}

#[actix_web::test]
async fn test_malformed_body_is_problem_details() {
    let app = test::init_service(
        App::new()
            .app_data(state(empty_db()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["title"], "Bad Request");
}
