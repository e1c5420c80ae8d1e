use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    application::dto::{
        ContactTypeQuery, CreateCustomerQuery, CustomerResponse, CustomerWithContactsResponse,
        DeleteCustomerRequest, EmailResponse, HealthResponse, ListCustomersQuery, PhoneResponse,
        UpdateCustomerRequest,
    },
    domain::contact::ContactKind,
    interface::http::problem::{ApiError, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn create_customer(
    State(state): State<AppState>,
    Query(query): Query<CreateCustomerQuery>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer = state
        .customer_service
        .create_customer(&query.name)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(customer.into()))
}

pub async fn read_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer = state
        .customer_service
        .read_customer_by_id(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(customer.into()))
}

/// `GET /customer`: a single-element list when `name` is given, otherwise a
/// page of all customers. Absent or out-of-range paging parameters fall back
/// to the configured defaults.
pub async fn read_customers(
    State(state): State<AppState>,
    Query(query): Query<ListCustomersQuery>,
) -> ApiResult<Json<Vec<CustomerResponse>>> {
    if let Some(name) = query.name.as_deref()
        && !name.trim().is_empty()
    {
        let customer = state
            .customer_service
            .read_customer_by_name(name)
            .await
            .map_err(ApiError::from_domain)?;
        return Ok(Json(vec![customer.into()]));
    }

    let defaults = state.paging;
    let page = query
        .page
        .filter(|page| *page >= 0)
        .and_then(|page| u32::try_from(page).ok())
        .unwrap_or(defaults.page);
    let items = query
        .items
        .filter(|items| *items >= 1)
        .and_then(|items| u32::try_from(items).ok())
        .unwrap_or(defaults.items_per_page);

    let customers = state
        .customer_service
        .read_all_customers(page, items)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Json(request): Json<UpdateCustomerRequest>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer = state
        .customer_service
        .update_customer(request.id, &request.name)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(customer.into()))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Json(request): Json<DeleteCustomerRequest>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer = state
        .customer_service
        .delete_customer(request.id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(customer.into()))
}

pub async fn read_all_customer_emails(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<EmailResponse>>> {
    let emails = state
        .email_service
        .find_all_emails_by_customer_id(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(emails))
}

pub async fn read_all_customer_phones(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<PhoneResponse>>> {
    let phones = state
        .phone_service
        .find_all_phones_by_customer_id(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(phones))
}

pub async fn read_all_customer_contacts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CustomerWithContactsResponse>> {
    let contacts = state
        .customer_service
        .read_all_contacts_by_customer_id(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(contacts.into()))
}

pub async fn read_all_customer_contacts_by_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ContactTypeQuery>,
) -> ApiResult<Json<Vec<String>>> {
    // The type string is resolved to the closed enum exactly once, here.
    let kind = ContactKind::parse(&query.kind).map_err(ApiError::from_domain)?;
    let values = state
        .customer_service
        .read_all_contacts_by_customer_id_and_type(id, kind)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(values))
}
