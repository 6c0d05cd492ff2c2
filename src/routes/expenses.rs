use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db;
use crate::db::models::{Expense, NewExpense};
use crate::error::AppResult;
use crate::extractors::ApiJson;
use crate::routes::Created;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/expenses", get(list_expenses).post(create_expense))
}

async fn list_expenses(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let conn = state.db.get()?;
    Ok(Json(db::expenses::list(&conn)?))
}

async fn create_expense(
    State(state): State<AppState>,
    ApiJson(expense): ApiJson<NewExpense>,
) -> AppResult<Json<Created>> {
    let conn = state.db.get()?;
    let id = db::expenses::insert(&conn, &expense)?;
    Ok(Json(Created { id }))
}
