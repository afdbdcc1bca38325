use axum::{Json, extract::State};

use crate::projects::Project;
use crate::startup::AppState;

/// Serves the whole catalog, unfiltered and in definition order. The request
/// carries no usable input; query parameters are ignored.
pub async fn list_projects(State(app): State<AppState>) -> Json<Vec<Project>> {
    Json(app.projects)
}
