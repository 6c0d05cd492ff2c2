use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::db;
use crate::db::models::{DiaryEntry, NewDiaryEntry};
use crate::error::AppResult;
use crate::extractors::{ApiJson, ApiPath};
use crate::routes::{Created, Success};
use crate::state::AppState;

// GET takes a plant id, DELETE an entry id; both share the one path shape.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/diary", post(create_entry))
        .route("/api/diary/{id}", get(list_entries).delete(delete_entry))
}

async fn list_entries(
    State(state): State<AppState>,
    ApiPath(plant_id): ApiPath<i64>,
) -> AppResult<Json<Vec<DiaryEntry>>> {
    let conn = state.db.get()?;
    Ok(Json(db::diary::list_for_plant(&conn, plant_id)?))
}

async fn create_entry(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<NewDiaryEntry>,
) -> AppResult<Json<Created>> {
    let conn = state.db.get()?;
    let id = db::diary::insert(&conn, &entry)?;
    Ok(Json(Created { id }))
}

async fn delete_entry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Success>> {
    let conn = state.db.get()?;
    db::diary::delete(&conn, id)?;
    Ok(Success::json())
}
