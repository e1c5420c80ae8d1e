use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    application::dto::{
        CreatePhoneRequest, DeleteContactRequest, PhoneResponse, UpdatePhoneRequest,
    },
    interface::http::problem::{ApiError, ApiResult},
    state::AppState,
};

pub async fn create_phone(
    State(state): State<AppState>,
    Json(request): Json<CreatePhoneRequest>,
) -> ApiResult<Json<PhoneResponse>> {
    let phone = state
        .phone_service
        .create_phone(request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(phone))
}

pub async fn read_phone_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PhoneResponse>> {
    let phone = state
        .phone_service
        .read_phone_by_id(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(phone))
}

pub async fn update_phone(
    State(state): State<AppState>,
    Json(request): Json<UpdatePhoneRequest>,
) -> ApiResult<Json<PhoneResponse>> {
    let phone = state
        .phone_service
        .update_phone(request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(phone))
}

pub async fn delete_phone(
    State(state): State<AppState>,
    Json(request): Json<DeleteContactRequest>,
) -> ApiResult<Json<PhoneResponse>> {
    let phone = state
        .phone_service
        .delete_phone(request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(phone))
}
