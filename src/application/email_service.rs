use std::sync::Arc;

use crate::{
    application::{
        dto::{CreateEmailRequest, DeleteContactRequest, EmailResponse, UpdateEmailRequest},
        resolution::ContactResolver,
    },
    domain::{contact::ContactKind, errors::DomainError},
    infrastructure::{ContactRepository, CustomerRepository},
};

/// Thin orchestration over the contact resolver for email records.
pub struct EmailService {
    resolver: ContactResolver,
}

impl EmailService {
    pub fn new(customers: Arc<dyn CustomerRepository>, emails: Arc<dyn ContactRepository>) -> Self {
        Self {
            resolver: ContactResolver::new(ContactKind::Email, customers, emails),
        }
    }

    pub async fn create_email(
        &self,
        request: CreateEmailRequest,
    ) -> Result<EmailResponse, DomainError> {
        let contact = self
            .resolver
            .create(&request.email, request.customer_id)
            .await?;
        Ok(contact.into())
    }

    pub async fn read_email_by_id(&self, id: i64) -> Result<EmailResponse, DomainError> {
        Ok(self.resolver.get(id).await?.into())
    }

    pub async fn find_all_emails_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<EmailResponse>, DomainError> {
        let contacts = self.resolver.list_for_customer(customer_id).await?;
        Ok(contacts.into_iter().map(EmailResponse::from).collect())
    }

    pub async fn update_email(
        &self,
        request: UpdateEmailRequest,
    ) -> Result<EmailResponse, DomainError> {
        let contact = self
            .resolver
            .update(request.id, &request.email, request.customer_id)
            .await?;
        Ok(contact.into())
    }

    pub async fn delete_email(
        &self,
        request: DeleteContactRequest,
    ) -> Result<EmailResponse, DomainError> {
        Ok(self.resolver.delete(request.id).await?.into())
    }
}
