use std::sync::Arc;

use tracing::error;

use crate::{
    domain::{
        contact::{Contact, ContactKind},
        customer::{Customer, CustomerWithContacts, NewCustomer},
        errors::DomainError,
    },
    infrastructure::{ContactRepository, CustomerRepository},
};

pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
    emails: Arc<dyn ContactRepository>,
    phones: Arc<dyn ContactRepository>,
}

impl CustomerService {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        emails: Arc<dyn ContactRepository>,
        phones: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            customers,
            emails,
            phones,
        }
    }

    /// Returns the existing customer when the name is already taken (compared
    /// case-insensitively), otherwise creates one. Never fails beyond storage
    /// errors.
    pub async fn create_customer(&self, name: &str) -> Result<Customer, DomainError> {
        match self.customers.find_by_name(name).await? {
            Some(existing) => Ok(existing),
            None => {
                self.customers
                    .insert(NewCustomer {
                        name: name.to_string(),
                    })
                    .await
            }
        }
    }

    pub async fn read_customer_by_id(&self, id: i64) -> Result<Customer, DomainError> {
        self.customers.get_by_id(id).await?.ok_or_else(|| {
            let err = DomainError::CustomerNotFound(id);
            error!(customer_id = id, "{err}");
            err
        })
    }

    pub async fn read_customer_by_name(&self, name: &str) -> Result<Customer, DomainError> {
        self.customers.find_by_name(name).await?.ok_or_else(|| {
            let err = DomainError::CustomerByNameNotFound(name.to_string());
            error!(name, "{err}");
            err
        })
    }

    /// Unsorted zero-based page of customers; parameter defaulting happens at
    /// the HTTP boundary.
    pub async fn read_all_customers(
        &self,
        page: u32,
        items_per_page: u32,
    ) -> Result<Vec<Customer>, DomainError> {
        self.customers.list(page, items_per_page).await
    }

    pub async fn update_customer(&self, id: i64, name: &str) -> Result<Customer, DomainError> {
        if self.customers.get_by_id(id).await?.is_none() {
            let err = DomainError::CustomerNotFound(id);
            error!(customer_id = id, "{err}");
            return Err(err);
        }
        self.customers
            .update(Customer {
                id,
                name: name.to_string(),
            })
            .await
    }

    /// Deletes the customer and returns the prior record. Contact rows are
    /// left in place; there is no cascade.
    pub async fn delete_customer(&self, id: i64) -> Result<Customer, DomainError> {
        let Some(existing) = self.customers.get_by_id(id).await? else {
            let err = DomainError::CustomerNotFound(id);
            error!(customer_id = id, "{err}");
            return Err(err);
        };
        self.customers.delete(id).await?;
        Ok(existing)
    }

    /// The customer together with every email and phone value it owns.
    pub async fn read_all_contacts_by_customer_id(
        &self,
        id: i64,
    ) -> Result<CustomerWithContacts, DomainError> {
        let customer = self.read_customer_by_id(id).await?;

        let emails = self.emails.list_by_customer(id).await?;
        let phones = self.phones.list_by_customer(id).await?;

        Ok(CustomerWithContacts {
            id: customer.id,
            name: customer.name,
            emails: emails.into_iter().map(into_value).collect(),
            phones: phones.into_iter().map(into_value).collect(),
        })
    }

    /// Contact values of a single kind. The kind is already a closed enum
    /// here; parsing the request parameter happens once at the boundary.
    pub async fn read_all_contacts_by_customer_id_and_type(
        &self,
        id: i64,
        kind: ContactKind,
    ) -> Result<Vec<String>, DomainError> {
        self.read_customer_by_id(id).await?;

        let rows = match kind {
            ContactKind::Email => self.emails.list_by_customer(id).await?,
            ContactKind::Phone => self.phones.list_by_customer(id).await?,
        };
        Ok(rows.into_iter().map(into_value).collect())
    }
}

fn into_value(contact: Contact) -> String {
    contact.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::contact::NewContact,
        infrastructure::in_memory::{InMemoryContactRepository, InMemoryCustomerRepository},
    };

    fn service() -> CustomerService {
        CustomerService::new(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(InMemoryContactRepository::new(ContactKind::Email)),
            Arc::new(InMemoryContactRepository::new(ContactKind::Phone)),
        )
    }

    #[tokio::test]
    async fn create_customer_is_idempotent_by_name_ignoring_case() {
        let service = service();

        let first = service.create_customer("Vasily Demin").await.unwrap();
        let second = service.create_customer("VASILY DEMIN").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Vasily Demin");
    }

    #[tokio::test]
    async fn read_by_name_is_case_insensitive() {
        let service = service();
        service.create_customer("Alice").await.unwrap();

        let found = service.read_customer_by_name("alice").await.unwrap();
        assert_eq!(found.name, "Alice");

        let err = service.read_customer_by_name("bob").await.unwrap_err();
        assert!(matches!(err, DomainError::CustomerByNameNotFound(name) if name == "bob"));
    }

    #[tokio::test]
    async fn contacts_aggregation_returns_both_lists() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let emails = Arc::new(InMemoryContactRepository::new(ContactKind::Email));
        let phones = Arc::new(InMemoryContactRepository::new(ContactKind::Phone));
        let service = CustomerService::new(customers.clone(), emails.clone(), phones.clone());

        let customer = service.create_customer("Alice").await.unwrap();
        for value in ["a@x.com", "b@x.com"] {
            emails
                .insert(NewContact {
                    customer_id: customer.id,
                    value: value.to_string(),
                })
                .await
                .unwrap();
        }
        for value in ["+101", "+102"] {
            phones
                .insert(NewContact {
                    customer_id: customer.id,
                    value: value.to_string(),
                })
                .await
                .unwrap();
        }

        let all = service
            .read_all_contacts_by_customer_id(customer.id)
            .await
            .unwrap();
        assert_eq!(all.emails.len(), 2);
        assert_eq!(all.phones.len(), 2);

        let only_phones = service
            .read_all_contacts_by_customer_id_and_type(customer.id, ContactKind::Phone)
            .await
            .unwrap();
        assert_eq!(only_phones, vec!["+101".to_string(), "+102".to_string()]);
    }

    #[tokio::test]
    async fn delete_does_not_cascade_to_contacts() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let emails = Arc::new(InMemoryContactRepository::new(ContactKind::Email));
        let phones = Arc::new(InMemoryContactRepository::new(ContactKind::Phone));
        let service = CustomerService::new(customers, emails.clone(), phones);

        let customer = service.create_customer("Alice").await.unwrap();
        let email = emails
            .insert(NewContact {
                customer_id: customer.id,
                value: "a@x.com".to_string(),
            })
            .await
            .unwrap();

        let removed = service.delete_customer(customer.id).await.unwrap();
        assert_eq!(removed, customer);

        let orphan = emails.get_by_id(email.id).await.unwrap();
        assert_eq!(orphan, Some(email));
    }
}
