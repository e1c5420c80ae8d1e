use async_trait::async_trait;

use crate::domain::{
    contact::{Contact, NewContact},
    customer::{Customer, NewCustomer},
    errors::DomainError,
};

pub mod in_memory;
pub mod postgres;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;
    /// Case-insensitive exact match on the customer name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Customer>, DomainError>;
    /// Zero-based page of customers in store order.
    async fn list(&self, page: u32, items_per_page: u32) -> Result<Vec<Customer>, DomainError>;
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts a new contact row. The store enforces case-insensitive value
    /// uniqueness, so a racing duplicate insert surfaces as the
    /// ownership-conflict error rather than a second row.
    async fn insert(&self, contact: NewContact) -> Result<Contact, DomainError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, DomainError>;
    /// Case-insensitive lookup by contact value.
    async fn find_by_value(&self, value: &str) -> Result<Option<Contact>, DomainError>;
    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Contact>, DomainError>;
    async fn update(&self, contact: Contact) -> Result<Contact, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
