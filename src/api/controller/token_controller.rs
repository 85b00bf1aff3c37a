//! Token controller: service-account credential endpoint

use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::portal_dto::TokenDto;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::access::token_service::ServiceAccountRef;
use crate::errors::AppError;

pub struct TokenController;

impl TokenController {
    pub async fn get_token(
        Path((namespace, name)): Path<(String, String)>,
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<TokenDto>>, AppError> {
        let account = ServiceAccountRef { name, namespace };
        to_json(
            state
                .token_service
                .resolve_token(&account)
                .await
                .map(|token| TokenDto {
                    token: token.into_string(),
                }),
        )
    }
}
