use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BasicField, ContactField, Document, ListName};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldUpdate<V> {
    pub field: String,
    pub value: V,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub source_index: i64,
    pub dest_index: i64,
}

#[derive(Debug, Serialize)]
pub struct ChangeResponse {
    pub changed: bool,
    pub document: Document,
}

/// Unknown list names are treated as missing resources.
pub fn parse_list(raw: &str) -> Result<ListName, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("List '{raw}' not found")))
}

/// GET /api/v1/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<Document> {
    let workspace = state.workspace.lock().await;
    Json(workspace.document().clone())
}

/// PATCH /api/v1/document/basic
pub async fn handle_set_basic_field(
    State(state): State<AppState>,
    Json(req): Json<FieldUpdate<String>>,
) -> Result<Json<Document>, AppError> {
    let field: BasicField = req.field.parse()?;
    let document = state
        .with_workspace(move |ws| {
            ws.store_mut().set_basic_field(field, req.value)?;
            Ok(ws.document().clone())
        })
        .await?;
    Ok(Json(document))
}

/// PATCH /api/v1/document/contact
pub async fn handle_set_contact_field(
    State(state): State<AppState>,
    Json(req): Json<FieldUpdate<String>>,
) -> Result<Json<Document>, AppError> {
    let field: ContactField = req.field.parse()?;
    let document = state
        .with_workspace(move |ws| {
            ws.store_mut().set_contact_field(field, req.value)?;
            Ok(ws.document().clone())
        })
        .await?;
    Ok(Json(document))
}

/// DELETE /api/v1/document/:list/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path((list, id)): Path<(String, String)>,
) -> Result<Json<ChangeResponse>, AppError> {
    let list = parse_list(&list)?;
    let response = state
        .with_workspace(move |ws| {
            let changed = ws.store_mut().delete(list, &id)?;
            Ok(ChangeResponse {
                changed,
                document: ws.document().clone(),
            })
        })
        .await?;
    Ok(Json(response))
}

/// POST /api/v1/document/:list/reorder
pub async fn handle_reorder(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ChangeResponse>, AppError> {
    let list = parse_list(&list)?;
    let response = state
        .with_workspace(move |ws| {
            let changed = ws
                .store_mut()
                .reorder(list, req.source_index, req.dest_index)?;
            Ok(ChangeResponse {
                changed,
                document: ws.document().clone(),
            })
        })
        .await?;
    Ok(Json(response))
}
