//! Route table.
//!
//! ```text
//! POST   /proverbs       → create_proverb
//! GET    /proverbs       → list_proverbs
//! GET    /proverbs/{id}  → get_proverb
//! PUT    /proverbs/{id}  → update_proverb
//! DELETE /proverbs/{id}  → delete_proverb
//! ```

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::handlers::{
    create_proverb, delete_proverb, get_proverb, list_proverbs, route_not_found, update_proverb,
};
use crate::http::AppState;

/// Build the proverb routes bound to `state`.
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/proverbs", post(create_proverb).get(list_proverbs))
        .route(
            "/proverbs/{id}",
            get(get_proverb).put(update_proverb).delete(delete_proverb),
        )
        .fallback(route_not_found)
        .with_state(state)
}
