use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        customers_handler::{
            create_customer, delete_customer, healthcheck, read_all_customer_contacts,
            read_all_customer_contacts_by_type, read_all_customer_emails,
            read_all_customer_phones, read_customer_by_id, read_customers, update_customer,
        },
        emails_handler::{create_email, delete_email, read_email_by_id, update_email},
        phones_handler::{create_phone, delete_phone, read_phone_by_id, update_phone},
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route(
            "/customer",
            post(create_customer)
                .get(read_customers)
                .put(update_customer)
                .delete(delete_customer),
        )
        .route("/customer/{id}", get(read_customer_by_id))
        .route("/customer/{id}/allemails", get(read_all_customer_emails))
        .route("/customer/{id}/allphones", get(read_all_customer_phones))
        .route("/customer/{id}/allcontacts", get(read_all_customer_contacts))
        .route(
            "/customer/{id}/allcontactsbytype",
            get(read_all_customer_contacts_by_type),
        )
        .route(
            "/emails",
            post(create_email).put(update_email).delete(delete_email),
        )
        .route("/emails/{id}", get(read_email_by_id))
        .route(
            "/phones",
            post(create_phone).put(update_phone).delete(delete_phone),
        )
        .route("/phones/{id}", get(read_phone_by_id))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
