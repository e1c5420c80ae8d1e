use std::sync::Arc;

use tracing::error;

use crate::{
    domain::{
        contact::{Contact, ContactKind, NewContact},
        errors::DomainError,
    },
    infrastructure::{ContactRepository, CustomerRepository},
};

/// The contact-uniqueness-and-ownership resolution core, shared by the email
/// and phone services. Binds one contact repository and the customer
/// repository it cross-references.
pub struct ContactResolver {
    kind: ContactKind,
    customers: Arc<dyn CustomerRepository>,
    contacts: Arc<dyn ContactRepository>,
}

impl ContactResolver {
    pub fn new(
        kind: ContactKind,
        customers: Arc<dyn CustomerRepository>,
        contacts: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            kind,
            customers,
            contacts,
        }
    }

    /// Create-or-return-or-conflict decision for a submitted contact value:
    /// no existing record creates one, an idempotent re-submission returns the
    /// existing record without writing, and a value held by another customer
    /// is rejected.
    pub async fn create(
        &self,
        value: &str,
        claimed_customer_id: Option<i64>,
    ) -> Result<Contact, DomainError> {
        let customer_id = self.require_customer(claimed_customer_id).await?;

        match self.contacts.find_by_value(value).await? {
            Some(existing) if existing.customer_id == customer_id => Ok(existing),
            Some(_) => {
                let err = self.kind.already_owned(value);
                error!(kind = self.kind.as_str(), value, "{err}");
                Err(err)
            }
            None => {
                self.contacts
                    .insert(NewContact {
                        customer_id,
                        value: value.to_string(),
                    })
                    .await
            }
        }
    }

    /// Overwrites the record's owner and value. Unlike create, this does not
    /// re-check ownership of the new value against other customers; the
    /// store's unique index still rejects an exact duplicate.
    pub async fn update(
        &self,
        id: i64,
        new_value: &str,
        claimed_customer_id: Option<i64>,
    ) -> Result<Contact, DomainError> {
        if self.contacts.get_by_id(id).await?.is_none() {
            let err = self.kind.not_found(id);
            error!(kind = self.kind.as_str(), id, "{err}");
            return Err(err);
        }
        let customer_id = self.require_customer(claimed_customer_id).await?;

        self.contacts
            .update(Contact {
                id,
                customer_id,
                value: new_value.to_string(),
            })
            .await
    }

    /// Removes the record and returns its prior state.
    pub async fn delete(&self, id: i64) -> Result<Contact, DomainError> {
        let Some(existing) = self.contacts.get_by_id(id).await? else {
            let err = self.kind.not_found(id);
            error!(kind = self.kind.as_str(), id, "{err}");
            return Err(err);
        };
        self.contacts.delete(id).await?;
        Ok(existing)
    }

    pub async fn get(&self, id: i64) -> Result<Contact, DomainError> {
        self.contacts.get_by_id(id).await?.ok_or_else(|| {
            let err = self.kind.not_found(id);
            error!(kind = self.kind.as_str(), id, "{err}");
            err
        })
    }

    /// All contact rows for the customer, possibly empty; fails first if the
    /// customer itself is unknown.
    pub async fn list_for_customer(&self, customer_id: i64) -> Result<Vec<Contact>, DomainError> {
        if self.customers.get_by_id(customer_id).await?.is_none() {
            let err = DomainError::CustomerNotFound(customer_id);
            error!(customer_id, "{err}");
            return Err(err);
        }
        self.contacts.list_by_customer(customer_id).await
    }

    async fn require_customer(&self, claimed: Option<i64>) -> Result<i64, DomainError> {
        let Some(id) = claimed else {
            error!(
                kind = self.kind.as_str(),
                "contact request carries no customer id"
            );
            return Err(DomainError::CustomerIdMissing);
        };
        if self.customers.get_by_id(id).await?.is_none() {
            let err = DomainError::CustomerNotFound(id);
            error!(customer_id = id, "{err}");
            return Err(err);
        }
        Ok(id)
    }
}
