use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_get))
        .route("/login", get(handlers::login_get).post(handlers::login_post))
        .route("/logout", post(handlers::logout_post))
        .route("/settings/admins", get(handlers::admins_list))
        .route("/settings/admins/viewer", post(handlers::admins_add_viewer))
        .route(
            "/settings/presets/gke",
            get(handlers::preset_gke_get).post(handlers::preset_gke_post),
        )
        .route("/settings/presets/gke/close", post(handlers::preset_gke_close))
        .route(
            "/wizard/cluster",
            get(handlers::wizard_cluster_get).post(handlers::wizard_cluster_post),
        )
        .route("/wizard/cluster/generate-name", post(handlers::wizard_generate_name))
        .route("/wizard/summary", get(handlers::wizard_summary_get))
        // Serve static files with cache-control header
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .with_state(state)
}
