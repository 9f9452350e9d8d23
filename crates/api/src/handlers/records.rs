use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::{
    dto::{
        CreateRecordRequest, DeleteRecordQuery, DeleteResponse, RecordResponse, ResolveResponse,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/dns", post(create_record))
        .route("/api/dns/{hostname}/records", get(list_records))
        .route(
            "/api/dns/{hostname}",
            get(resolve_hostname).delete(delete_record),
        )
}

async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let record = state
        .create_record
        .execute(req.hostname, req.record_type, req.value)
        .await?;

    Ok((StatusCode::CREATED, Json(RecordResponse::from_domain(record))))
}

async fn list_records(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let records = state.get_records.execute(&hostname).await?;

    debug!(hostname = %hostname, count = records.len(), "records listed");

    Ok(Json(
        records.into_iter().map(RecordResponse::from_domain).collect(),
    ))
}

async fn resolve_hostname(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let addresses = state.resolve_hostname.execute(&hostname).await?;

    Ok(Json(ResolveResponse {
        hostname,
        addresses,
    }))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
    Query(query): Query<DeleteRecordQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state
        .delete_record
        .execute(hostname, query.record_type, query.value)
        .await?;

    Ok(Json(DeleteResponse {
        status: "deleted".to_string(),
    }))
}
