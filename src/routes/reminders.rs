use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db;
use crate::db::models::{NewReminder, Reminder};
use crate::error::AppResult;
use crate::extractors::ApiJson;
use crate::routes::Created;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/reminders", get(list_reminders).post(create_reminder))
}

async fn list_reminders(State(state): State<AppState>) -> AppResult<Json<Vec<Reminder>>> {
    let conn = state.db.get()?;
    Ok(Json(db::reminders::list(&conn)?))
}

async fn create_reminder(
    State(state): State<AppState>,
    ApiJson(reminder): ApiJson<NewReminder>,
) -> AppResult<Json<Created>> {
    let conn = state.db.get()?;
    let id = db::reminders::insert(&conn, &reminder)?;
    Ok(Json(Created { id }))
}
