use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{expenses, state::AppState, users};

pub fn app(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(users::routes::routes(app_state.clone()))
        .merge(expenses::routes::routes(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
