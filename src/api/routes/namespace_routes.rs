//! Namespace routes (e.g., /api/v1/namespaces/*)

use axum::routing::get;
use axum::Router;

use crate::api::controller::namespace_controller::NamespaceController;
use crate::api::controller::token_controller::TokenController;
use crate::app_state::AppState;

pub fn namespace_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(NamespaceController::get_namespaces).post(NamespaceController::create_namespace),
        )
        .route(
            "/{name}",
            get(NamespaceController::get_namespace).delete(NamespaceController::delete_namespace),
        )
        .route(
            "/{namespace}/serviceaccounts/{name}/token",
            get(TokenController::get_token),
        )
}
