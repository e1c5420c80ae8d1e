use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    application::{
        customer_service::CustomerService, email_service::EmailService,
        phone_service::PhoneService,
    },
    domain::contact::ContactKind,
    infrastructure::{
        ContactRepository, CustomerRepository,
        in_memory::{InMemoryContactRepository, InMemoryCustomerRepository},
        postgres::{PostgresContactRepository, PostgresCustomerRepository},
    },
};

#[derive(Debug, Clone, Copy)]
pub struct PagingDefaults {
    pub page: u32,
    pub items_per_page: u32,
}

#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    pub email_service: Arc<EmailService>,
    pub phone_service: Arc<PhoneService>,
    pub paging: PagingDefaults,
}

impl AppState {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        emails: Arc<dyn ContactRepository>,
        phones: Arc<dyn ContactRepository>,
        paging: PagingDefaults,
    ) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(
                customers.clone(),
                emails.clone(),
                phones.clone(),
            )),
            email_service: Arc::new(EmailService::new(customers.clone(), emails)),
            phone_service: Arc::new(PhoneService::new(customers, phones)),
            paging,
        }
    }

    /// Store kept entirely in process memory; used by the tests and when no
    /// database is configured.
    pub fn with_in_memory_store(paging: PagingDefaults) -> Self {
        Self::new(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(InMemoryContactRepository::new(ContactKind::Email)),
            Arc::new(InMemoryContactRepository::new(ContactKind::Phone)),
            paging,
        )
    }

    pub fn with_postgres_store(pool: PgPool, paging: PagingDefaults) -> Self {
        Self::new(
            Arc::new(PostgresCustomerRepository::new(pool.clone())),
            Arc::new(PostgresContactRepository::new(
                pool.clone(),
                ContactKind::Email,
            )),
            Arc::new(PostgresContactRepository::new(pool, ContactKind::Phone)),
            paging,
        )
    }
}
