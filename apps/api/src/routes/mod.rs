pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::document::handlers as document;
use crate::editor::handlers as editor;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Committed document
        .route("/api/v1/document", get(document::handle_get_document))
        .route(
            "/api/v1/document/basic",
            patch(document::handle_set_basic_field),
        )
        .route(
            "/api/v1/document/contact",
            patch(document::handle_set_contact_field),
        )
        .route(
            "/api/v1/document/:list/reorder",
            post(document::handle_reorder),
        )
        .route(
            "/api/v1/document/:list/:id",
            delete(document::handle_delete_entry),
        )
        // Section editors
        .route("/api/v1/editors/:list", get(editor::handle_get_editor))
        .route(
            "/api/v1/editors/:list/fields",
            patch(editor::handle_set_field),
        )
        .route(
            "/api/v1/editors/:list/current-item",
            put(editor::handle_set_current_item),
        )
        .route(
            "/api/v1/editors/:list/items",
            post(editor::handle_submit_item),
        )
        .route(
            "/api/v1/editors/:list/items/:id",
            delete(editor::handle_delete_item),
        )
        .route(
            "/api/v1/editors/:list/items/:id/edit",
            post(editor::handle_begin_item_edit),
        )
        .route(
            "/api/v1/editors/:list/edit/:entry_id",
            post(editor::handle_begin_edit),
        )
        .route("/api/v1/editors/:list/submit", post(editor::handle_submit))
        .route("/api/v1/editors/:list/cancel", post(editor::handle_cancel))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{Config, StorageBackend};
    use crate::ids::SequentialIds;
    use crate::storage::MemoryKvStore;
    use crate::workspace::Workspace;

    fn test_app() -> Router {
        let workspace = Workspace::open(
            Arc::new(MemoryKvStore::new()),
            Arc::new(SequentialIds::default()),
        );
        let config = Config {
            port: 0,
            rust_log: "debug".to_string(),
            storage: StorageBackend::Memory,
        };
        build_router(AppState::new(workspace, config))
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn add_skill(app: &Router, name: &str) -> String {
        call(
            app,
            Method::PATCH,
            "/api/v1/editors/skillsInfo/fields",
            Some(json!({ "field": "category", "value": name })),
        )
        .await;
        let (status, body) = call(app, Method::POST, "/api/v1/editors/skillsInfo/submit", None).await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = call(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[tokio::test]
    async fn test_get_empty_document() {
        let app = test_app();
        let (status, body) = call(&app, Method::GET, "/api/v1/document", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["educationInfo"], json!([]));
        assert_eq!(body["basicInfo"]["firstName"], "");
    }

    #[tokio::test]
    async fn test_set_basic_field() {
        let app = test_app();
        let (status, body) = call(
            &app,
            Method::PATCH,
            "/api/v1/document/basic",
            Some(json!({ "field": "occupation", "value": "Engineer" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["basicInfo"]["occupation"], "Engineer");
    }

    #[tokio::test]
    async fn test_unknown_contact_field_is_rejected() {
        let app = test_app();
        let (status, body) = call(
            &app,
            Method::PATCH,
            "/api/v1/document/contact",
            Some(json!({ "field": "fax", "value": "123" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_education_submit_flow() {
        let app = test_app();
        for (field, value) in [
            ("institution", json!("MIT")),
            ("degreeProgram", json!("CS")),
            ("startingYear", json!("2020-01")),
            ("onGoing", json!(true)),
        ] {
            let (status, _) = call(
                &app,
                Method::PATCH,
                "/api/v1/editors/educationInfo/fields",
                Some(json!({ "field": field, "value": value })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        call(
            &app,
            Method::POST,
            "/api/v1/editors/educationInfo/items",
            Some(json!({ "content": "Dean's list" })),
        )
        .await;

        let (status, body) = call(&app, Method::POST, "/api/v1/editors/educationInfo/submit", None).await;

        assert_eq!(status, StatusCode::OK);
        let education = &body["document"]["educationInfo"];
        assert_eq!(education.as_array().unwrap().len(), 1);
        assert_eq!(education[0]["id"], body["id"]);
        assert_eq!(education[0]["onGoing"], true);
        assert_eq!(education[0]["additionalInfo"][0]["content"], "Dean's list");

        let (_, editor) = call(&app, Method::GET, "/api/v1/editors/educationInfo", None).await;
        assert_eq!(editor["mode"]["state"], "idle");
    }

    #[tokio::test]
    async fn test_submit_without_category_is_rejected() {
        let app = test_app();
        let (status, _) = call(&app, Method::POST, "/api/v1/editors/skillsInfo/submit", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, doc) = call(&app, Method::GET, "/api/v1/document", None).await;
        assert_eq!(doc["skillsInfo"], json!([]));
    }

    #[tokio::test]
    async fn test_reorder_and_delete() {
        let app = test_app();
        let first = add_skill(&app, "Design").await;
        let second = add_skill(&app, "Tools").await;

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/document/skillsInfo/reorder",
            Some(json!({ "sourceIndex": 1, "destIndex": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], true);
        assert_eq!(body["document"]["skillsInfo"][0]["id"], second.as_str());

        let (_, body) = call(
            &app,
            Method::POST,
            "/api/v1/document/skillsInfo/reorder",
            Some(json!({ "sourceIndex": -1, "destIndex": 0 })),
        )
        .await;
        assert_eq!(body["changed"], false);

        let uri = format!("/api/v1/document/skillsInfo/{first}");
        let (status, body) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], true);
        assert_eq!(body["document"]["skillsInfo"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_flow_replaces_entry() {
        let app = test_app();
        let id = add_skill(&app, "Design").await;

        let uri = format!("/api/v1/editors/skillsInfo/edit/{id}");
        let (status, editor) = call(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(editor["mode"]["state"], "editing");
        assert_eq!(editor["draft"]["category"], "Design");

        call(
            &app,
            Method::PATCH,
            "/api/v1/editors/skillsInfo/fields",
            Some(json!({ "field": "category", "value": "Visual Design" })),
        )
        .await;
        let (_, body) = call(&app, Method::POST, "/api/v1/editors/skillsInfo/submit", None).await;

        assert_eq!(body["id"], id.as_str());
        let skills = body["document"]["skillsInfo"].as_array().unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0]["category"], "Visual Design");
    }

    #[tokio::test]
    async fn test_sub_item_edit_and_delete() {
        let app = test_app();
        call(
            &app,
            Method::PUT,
            "/api/v1/editors/otherInfo/current-item",
            Some(json!({ "content": "English" })),
        )
        .await;
        let (_, editor) = call(
            &app,
            Method::POST,
            "/api/v1/editors/otherInfo/items",
            Some(json!({})),
        )
        .await;
        let item_id = editor["draft"]["items"][0]["id"].as_str().unwrap().to_string();

        let uri = format!("/api/v1/editors/otherInfo/items/{item_id}/edit");
        let (_, editor) = call(&app, Method::POST, &uri, None).await;
        assert_eq!(editor["editingItemId"], item_id.as_str());
        assert_eq!(editor["draft"]["currentItem"], "English");

        let uri = format!("/api/v1/editors/otherInfo/items/{item_id}");
        let (_, editor) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(editor["editingItemId"], Value::Null);
        assert_eq!(editor["draft"]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_deleting_unknown_item_keeps_editor_idle() {
        let app = test_app();
        let (status, editor) =
            call(&app, Method::DELETE, "/api/v1/editors/skillsInfo/items/missing", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(editor["mode"]["state"], "idle");

        let (_, editor) = call(&app, Method::GET, "/api/v1/editors/skillsInfo", None).await;
        assert_eq!(editor["mode"]["state"], "idle");
    }

    #[tokio::test]
    async fn test_cancel_resets_editor() {
        let app = test_app();
        call(
            &app,
            Method::PATCH,
            "/api/v1/editors/experienceInfo/fields",
            Some(json!({ "field": "company", "value": "Acme" })),
        )
        .await;
        let (status, editor) = call(&app, Method::POST, "/api/v1/editors/experienceInfo/cancel", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(editor["mode"]["state"], "idle");
        assert_eq!(editor["draft"]["company"], "");
    }

    #[tokio::test]
    async fn test_unknown_list_is_not_found() {
        let app = test_app();
        let (status, body) = call(&app, Method::GET, "/api/v1/editors/hobbies", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_edit_unknown_entry_is_not_found() {
        let app = test_app();
        let (status, _) = call(&app, Method::POST, "/api/v1/editors/skillsInfo/edit/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
