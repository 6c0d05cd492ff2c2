use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db;
use crate::db::models::{NewBookmark, NewSavedNews, NewsBookmark, SavedNews};
use crate::error::AppResult;
use crate::extractors::ApiJson;
use crate::routes::Created;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/news/saved", get(list_saved).post(save_news))
        .route(
            "/api/news/bookmarks",
            get(list_bookmarks).post(create_bookmark),
        )
}

async fn list_saved(State(state): State<AppState>) -> AppResult<Json<Vec<SavedNews>>> {
    let conn = state.db.get()?;
    Ok(Json(db::news::list_saved(&conn)?))
}

async fn save_news(
    State(state): State<AppState>,
    ApiJson(news): ApiJson<NewSavedNews>,
) -> AppResult<Json<Created>> {
    let conn = state.db.get()?;
    let id = db::news::insert_saved(&conn, &news)?;
    Ok(Json(Created { id }))
}

async fn list_bookmarks(State(state): State<AppState>) -> AppResult<Json<Vec<NewsBookmark>>> {
    let conn = state.db.get()?;
    Ok(Json(db::news::list_bookmarks(&conn)?))
}

async fn create_bookmark(
    State(state): State<AppState>,
    ApiJson(bookmark): ApiJson<NewBookmark>,
) -> AppResult<Json<Created>> {
    let conn = state.db.get()?;
    let id = db::news::insert_bookmark(&conn, &bookmark)?;
    Ok(Json(Created { id }))
}
