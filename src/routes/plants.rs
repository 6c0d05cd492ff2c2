use axum::extract::State;
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::db;
use crate::db::models::{GrowthLog, NewGrowthLog, NewPlant, Plant};
use crate::error::AppResult;
use crate::extractors::{ApiJson, ApiPath};
use crate::routes::{Created, Success};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/plants", get(list_plants).post(create_plant))
        .route("/api/plants/{id}", delete(delete_plant))
        .route(
            "/api/plants/{id}/growth",
            get(list_growth).post(create_growth),
        )
}

async fn list_plants(State(state): State<AppState>) -> AppResult<Json<Vec<Plant>>> {
    let conn = state.db.get()?;
    Ok(Json(db::plants::list(&conn)?))
}

async fn create_plant(
    State(state): State<AppState>,
    ApiJson(plant): ApiJson<NewPlant>,
) -> AppResult<Json<Created>> {
    let conn = state.db.get()?;
    let id = db::plants::insert(&conn, &plant)?;
    Ok(Json(Created { id }))
}

async fn delete_plant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Success>> {
    let conn = state.db.get()?;
    db::plants::delete_with_diary(&conn, id)?;
    tracing::info!("Deleted plant {} and its diary", id);
    Ok(Success::json())
}

async fn list_growth(
    State(state): State<AppState>,
    ApiPath(plant_id): ApiPath<i64>,
) -> AppResult<Json<Vec<GrowthLog>>> {
    let conn = state.db.get()?;
    Ok(Json(db::plants::list_growth(&conn, plant_id)?))
}

async fn create_growth(
    State(state): State<AppState>,
    ApiPath(plant_id): ApiPath<i64>,
    ApiJson(log): ApiJson<NewGrowthLog>,
) -> AppResult<Json<Created>> {
    let conn = state.db.get()?;
    let id = db::plants::insert_growth(&conn, plant_id, &log)?;
    Ok(Json(Created { id }))
}
