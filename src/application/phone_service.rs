use std::sync::Arc;

use crate::{
    application::{
        dto::{CreatePhoneRequest, DeleteContactRequest, PhoneResponse, UpdatePhoneRequest},
        resolution::ContactResolver,
    },
    domain::{contact::ContactKind, errors::DomainError},
    infrastructure::{ContactRepository, CustomerRepository},
};

/// Thin orchestration over the contact resolver for phone records.
pub struct PhoneService {
    resolver: ContactResolver,
}

impl PhoneService {
    pub fn new(customers: Arc<dyn CustomerRepository>, phones: Arc<dyn ContactRepository>) -> Self {
        Self {
            resolver: ContactResolver::new(ContactKind::Phone, customers, phones),
        }
    }

    pub async fn create_phone(
        &self,
        request: CreatePhoneRequest,
    ) -> Result<PhoneResponse, DomainError> {
        let contact = self
            .resolver
            .create(&request.phone, request.customer_id)
            .await?;
        Ok(contact.into())
    }

    pub async fn read_phone_by_id(&self, id: i64) -> Result<PhoneResponse, DomainError> {
        Ok(self.resolver.get(id).await?.into())
    }

    pub async fn find_all_phones_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<PhoneResponse>, DomainError> {
        let contacts = self.resolver.list_for_customer(customer_id).await?;
        Ok(contacts.into_iter().map(PhoneResponse::from).collect())
    }

    pub async fn update_phone(
        &self,
        request: UpdatePhoneRequest,
    ) -> Result<PhoneResponse, DomainError> {
        let contact = self
            .resolver
            .update(request.id, &request.phone, request.customer_id)
            .await?;
        Ok(contact.into())
    }

    pub async fn delete_phone(
        &self,
        request: DeleteContactRequest,
    ) -> Result<PhoneResponse, DomainError> {
        Ok(self.resolver.delete(request.id).await?.into())
    }
}
