use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    application::dto::{
        CreateEmailRequest, DeleteContactRequest, EmailResponse, UpdateEmailRequest,
    },
    interface::http::problem::{ApiError, ApiResult},
    state::AppState,
};

pub async fn create_email(
    State(state): State<AppState>,
    Json(request): Json<CreateEmailRequest>,
) -> ApiResult<Json<EmailResponse>> {
    let email = state
        .email_service
        .create_email(request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(email))
}

pub async fn read_email_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EmailResponse>> {
    let email = state
        .email_service
        .read_email_by_id(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(email))
}

pub async fn update_email(
    State(state): State<AppState>,
    Json(request): Json<UpdateEmailRequest>,
) -> ApiResult<Json<EmailResponse>> {
    let email = state
        .email_service
        .update_email(request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(email))
}

pub async fn delete_email(
    State(state): State<AppState>,
    Json(request): Json<DeleteContactRequest>,
) -> ApiResult<Json<EmailResponse>> {
    let email = state
        .email_service
        .delete_email(request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(email))
}
