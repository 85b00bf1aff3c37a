//! Namespace controller: provisioning and lookup endpoints

use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::portal_dto::{NamespaceCreateRequest, NamespaceDeleteDto, NamespaceDto};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct NamespaceController;

impl NamespaceController {
    pub async fn get_namespaces(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<NamespaceDto>>>, AppError> {
        to_json(
            state
                .namespace_service
                .list_visible_namespaces()
                .await
                .map(|namespaces| namespaces.into_iter().map(NamespaceDto::from).collect()),
        )
    }

    pub async fn create_namespace(
        State(state): State<AppState>,
        Json(payload): Json<NamespaceCreateRequest>,
    ) -> Result<Json<ApiResponse<NamespaceDto>>, AppError> {
        to_json(
            state
                .namespace_service
                .ensure_namespace(&payload.name)
                .await
                .map(NamespaceDto::from),
        )
    }

    pub async fn get_namespace(
        Path(name): Path<String>,
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<NamespaceDto>>, AppError> {
        to_json(
            state
                .namespace_service
                .get_namespace(&name)
                .await
                .map(NamespaceDto::from),
        )
    }

    pub async fn delete_namespace(
        Path(name): Path<String>,
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<NamespaceDeleteDto>>, AppError> {
        to_json(
            state
                .namespace_service
                .delete_namespace(&name)
                .await
                .map(|outcome| NamespaceDeleteDto::new(name, outcome)),
        )
    }
}
