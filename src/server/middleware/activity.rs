use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::state::AppState;

/// Counts every request served, for `/stats`.
pub async fn track_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.activity.record_request();

    next.run(request).await
}
