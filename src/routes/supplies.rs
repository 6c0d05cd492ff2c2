use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db;
use crate::db::models::Supply;
use crate::error::AppResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/supplies", get(list_supplies))
}

async fn list_supplies(State(state): State<AppState>) -> AppResult<Json<Vec<Supply>>> {
    let conn = state.db.get()?;
    Ok(Json(db::supplies::list(&conn)?))
}
