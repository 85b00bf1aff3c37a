//! Cluster routes (e.g., /api/v1/cluster/*)

use axum::{routing::get, Router};

use crate::api::controller::cluster_controller::ClusterController;
use crate::app_state::AppState;

pub fn cluster_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(ClusterController::get_cluster_stats))
        .route("/version", get(ClusterController::get_kubernetes_version))
        .route(
            "/serviceaccounts",
            get(ClusterController::get_service_accounts),
        )
}
