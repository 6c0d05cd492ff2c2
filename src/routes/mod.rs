pub mod community;
pub mod diary;
pub mod expenses;
pub mod frontend;
pub mod news;
pub mod plants;
pub mod realtime;
pub mod reminders;
pub mod supplies;

use axum::extract::DefaultBodyLimit;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Response for inserts: the storage-assigned row id.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn json() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Every `/api` route plus the realtime socket.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(plants::router())
        .merge(supplies::router())
        .merge(news::router())
        .merge(diary::router())
        .merge(community::router())
        .merge(expenses::router())
        .merge(reminders::router())
        .merge(realtime::router())
}

/// The complete application, ready to serve.
pub fn build_router(state: AppState) -> Router {
    let mut app = api_router();

    match state.config.frontend.dist_dir.as_deref() {
        Some(dir) if dir.is_dir() => {
            tracing::info!("Serving front-end from {}", dir.display());
            app = app.fallback_service(frontend::service(dir));
        }
        Some(dir) => {
            tracing::warn!(
                "Front-end directory {} does not exist, not serving it",
                dir.display()
            );
        }
        None => {}
    }

    app.layer(DefaultBodyLimit::max(state.config.server.body_limit_bytes()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
