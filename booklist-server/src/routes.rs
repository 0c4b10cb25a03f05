//! Page and API routes

use crate::config::CorsOrigins;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when nothing is configured
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            let allowed: Vec<HeaderValue> = list.iter().filter_map(|s| s.parse().ok()).collect();
            AllowOrigin::list(allowed)
        }
        CorsOrigins::LocalDev => {
            AllowOrigin::list(DEV_ORIGINS.into_iter().map(HeaderValue::from_static))
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/books", get(handlers::get_books))
        .route("/search", post(handlers::search_books))
        .route("/my-books", post(handlers::add_book))
        .route("/my-books/new", post(handlers::create_book))
        .route("/status/:id/toggle", post(handlers::toggle_status));

    let page_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search_page))
        .route("/my-books", post(handlers::add_book_page))
        .route("/my-books/new", post(handlers::new_book_page))
        .route("/status/:id/toggle", post(handlers::toggle_status_page));

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
