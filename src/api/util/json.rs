use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::{AppError, ClusterError};

pub fn to_json<T: serde::Serialize>(
    result: Result<T, ClusterError>,
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(AppError::from(err)), // preserves the variant mapping
    }
}
