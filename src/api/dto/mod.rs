pub mod portal_dto;

use serde::Serialize;

/// Uniform envelope for successful API responses.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}
