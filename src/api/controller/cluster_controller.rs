//! Cluster controller: dashboard statistics endpoints

use axum::extract::State;
use axum::Json;

use crate::api::dto::portal_dto::ServiceAccountDto;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::inventory::stats_service::InventorySnapshot;
use crate::errors::AppError;

pub struct ClusterController;

impl ClusterController {
    pub async fn get_cluster_stats(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<InventorySnapshot>>, AppError> {
        to_json(state.stats_service.get_cluster_stats().await)
    }

    pub async fn get_kubernetes_version(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Option<String>>>, AppError> {
        to_json(state.stats_service.get_kubernetes_version().await)
    }

    pub async fn get_service_accounts(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<ServiceAccountDto>>>, AppError> {
        to_json(
            state
                .stats_service
                .get_service_accounts()
                .await
                .map(|accounts| accounts.into_iter().map(ServiceAccountDto::from).collect()),
        )
    }
}
