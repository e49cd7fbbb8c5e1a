use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::document::handlers::{parse_list, FieldUpdate};
use crate::editor::EditorSnapshot;
use crate::errors::AppError;
use crate::models::{Document, FieldValue};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: String,
    pub document: Document,
}

/// GET /api/v1/editors/:list
pub async fn handle_get_editor(
    State(state): State<AppState>,
    Path(list): Path<String>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| Ok(ws.editor(list).snapshot()?))
        .await?;
    Ok(Json(snapshot))
}

/// PATCH /api/v1/editors/:list/fields
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Json(req): Json<FieldUpdate<FieldValue>>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| {
            let editor = ws.editor_mut(list);
            editor.set_field_by_name(&req.field, req.value)?;
            Ok(editor.snapshot()?)
        })
        .await?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/editors/:list/current-item
pub async fn handle_set_current_item(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Json(req): Json<ContentRequest>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| {
            let editor = ws.editor_mut(list);
            editor.set_current_item(req.content.unwrap_or_default())?;
            Ok(editor.snapshot()?)
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/editors/:list/items
/// Without `content`, commits whatever is in the pending item input.
pub async fn handle_submit_item(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Json(req): Json<ContentRequest>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| {
            let editor = ws.editor_mut(list);
            editor.submit_sub_item(req.content)?;
            Ok(editor.snapshot()?)
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/editors/:list/items/:id/edit
pub async fn handle_begin_item_edit(
    State(state): State<AppState>,
    Path((list, id)): Path<(String, String)>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| {
            let editor = ws.editor_mut(list);
            editor.begin_sub_item_edit(&id)?;
            Ok(editor.snapshot()?)
        })
        .await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/editors/:list/items/:id
pub async fn handle_delete_item(
    State(state): State<AppState>,
    Path((list, id)): Path<(String, String)>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| {
            let editor = ws.editor_mut(list);
            editor.delete_sub_item(&id)?;
            Ok(editor.snapshot()?)
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/editors/:list/edit/:entry_id
pub async fn handle_begin_edit(
    State(state): State<AppState>,
    Path((list, entry_id)): Path<(String, String)>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| {
            ws.begin_edit(list, &entry_id)?;
            Ok(ws.editor(list).snapshot()?)
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/editors/:list/submit
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(list): Path<String>,
) -> Result<Json<SubmitResponse>, AppError> {
    let list = parse_list(&list)?;
    let response = state
        .with_workspace(move |ws| {
            let id = ws.submit(list)?;
            Ok(SubmitResponse {
                id,
                document: ws.document().clone(),
            })
        })
        .await?;
    Ok(Json(response))
}

/// POST /api/v1/editors/:list/cancel
pub async fn handle_cancel(
    State(state): State<AppState>,
    Path(list): Path<String>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let list = parse_list(&list)?;
    let snapshot = state
        .with_workspace(move |ws| {
            let editor = ws.editor_mut(list);
            editor.cancel()?;
            Ok(editor.snapshot()?)
        })
        .await?;
    Ok(Json(snapshot))
}
