use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::router::RelayState;
use crate::service::mock_fs;
use crate::types::files::{
    FileContentResponse, FileListResponse, FileRecord, FileUpdate, NewFile, ParentQuery,
    PathQuery,
};
use crate::RelayError;

/// GET /files?path=/ -> mock terminal `ls`.
pub async fn list_mock_dir_handler(Query(query): Query<PathQuery>) -> Json<FileListResponse> {
    let items = mock_fs::list_dir(&query.path);
    Json(FileListResponse {
        path: query.path,
        items,
    })
}

/// GET /files/content?path=... -> mock terminal `cat`.
pub async fn mock_file_content_handler(
    Query(query): Query<PathQuery>,
) -> Result<Json<FileContentResponse>, RelayError> {
    let content = mock_fs::read_file(&query.path)
        .ok_or_else(|| RelayError::FileNotFound(query.path.clone()))?;
    Ok(Json(FileContentResponse {
        path: query.path,
        content: content.to_string(),
    }))
}

pub async fn create_file_handler(
    State(state): State<RelayState>,
    Json(file): Json<NewFile>,
) -> Json<FileRecord> {
    Json(state.files.create(file).await)
}

pub async fn list_files_handler(
    State(state): State<RelayState>,
    Query(query): Query<ParentQuery>,
) -> Json<Vec<FileRecord>> {
    Json(state.files.list(query.parent_id.as_deref()).await)
}

pub async fn read_file_handler(
    State(state): State<RelayState>,
    Path(file_id): Path<String>,
) -> Result<Json<FileRecord>, RelayError> {
    Ok(Json(state.files.get(&file_id).await?))
}

pub async fn update_file_handler(
    State(state): State<RelayState>,
    Path(file_id): Path<String>,
    Json(patch): Json<FileUpdate>,
) -> Result<Json<FileRecord>, RelayError> {
    Ok(Json(state.files.update(&file_id, patch).await?))
}
