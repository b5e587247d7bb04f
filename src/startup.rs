use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{handlers, middleware, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    // Entry routes
    let entry_routes = Router::new()
        .route("/", get(handlers::entries_handler::get_entries))
        .route("/", post(handlers::entries_handler::create_entry))
        // Must come before /{id} to prevent route shadowing
        .route("/today", get(handlers::entries_handler::get_today))
        .route("/by-date", get(handlers::entries_handler::get_by_date))
        .route("/{id}", put(handlers::entries_handler::update_entry))
        .route(
            "/{id}/attachments",
            post(handlers::attachments_handler::attach_reference),
        )
        .route(
            "/{id}/attachments",
            delete(handlers::attachments_handler::detach_reference),
        )
        .route(
            "/{id}/voice-note",
            put(handlers::attachments_handler::set_voice_note),
        );

    // Goal routes
    let goal_routes = Router::new()
        .route("/", get(handlers::goals_handler::get_goals))
        .route("/", post(handlers::goals_handler::add_goal))
        .route("/generate", post(handlers::goals_handler::generate_goals))
        .route("/{id}", delete(handlers::goals_handler::delete_goal))
        .route(
            "/{id}/completion",
            put(handlers::goals_handler::set_goal_completion),
        );

    // History routes
    let history_routes = Router::new()
        .route(
            "/medications",
            get(handlers::history_handler::get_medication_names),
        )
        .route(
            "/medications/suggestions",
            get(handlers::history_handler::get_medication_suggestions),
        )
        .route("/chores", get(handlers::history_handler::get_chore_names))
        .route(
            "/chores/suggestions",
            get(handlers::history_handler::get_chore_suggestions),
        )
        .route(
            "/chores/{name}",
            delete(handlers::history_handler::delete_chore_name),
        )
        .route(
            "/work-tasks",
            get(handlers::history_handler::get_work_task_names),
        )
        .route(
            "/work-tasks/suggestions",
            get(handlers::history_handler::get_work_task_suggestions),
        )
        .route(
            "/work-tasks/{name}",
            delete(handlers::history_handler::delete_work_task_name),
        );

    // Settings routes
    let settings_routes = Router::new()
        .route("/timezone", get(handlers::settings_handler::get_timezone))
        .route("/timezone", put(handlers::settings_handler::update_timezone));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api/entries", entry_routes)
        .nest("/api/goals", goal_routes)
        .nest("/api/history", history_routes)
        .nest("/api/settings", settings_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
