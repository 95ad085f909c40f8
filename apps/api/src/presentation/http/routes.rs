use super::{
    handlers::{admin, auth, content, dashboard, health},
    middleware::admin::require_admin,
    middleware::rate_limit::rate_limit_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Room for the non-file form fields on top of the media size limit.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route(
            "/upload",
            get(admin::upload_form).post(admin::upload_content),
        )
        .route("/admin/edit/{id}", get(admin::edit_form))
        .route("/admin/update", post(admin::update_content))
        .route("/admin/delete/{id}", get(admin::delete_content))
        .layer(DefaultBodyLimit::max(
            state.config.max_upload_bytes + FORM_OVERHEAD_BYTES,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let interaction_routes = Router::new()
        .route("/like/{id}", post(content::like_content))
        .route("/comment/{id}", post(content::add_comment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Browsing
        .route("/", get(dashboard::dashboard))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/view/{id}", get(content::view_content))
        .route("/comments/{id}", get(content::get_comments))
        // Accounts
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
        .merge(interaction_routes)
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
