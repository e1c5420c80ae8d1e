use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        contact::{Contact, ContactKind, NewContact},
        customer::{Customer, NewCustomer},
        errors::DomainError,
    },
    infrastructure::{ContactRepository, CustomerRepository},
};

#[derive(Default)]
struct CustomerTable {
    rows: BTreeMap<i64, Customer>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    state: RwLock<CustomerTable>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let mut table = self.state.write().await;
        table.next_id += 1;
        let created = Customer {
            id: table.next_id,
            name: customer.name,
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Customer>, DomainError> {
        let table = self.state.read().await;
        Ok(table
            .rows
            .values()
            .find(|row| row.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn list(&self, page: u32, items_per_page: u32) -> Result<Vec<Customer>, DomainError> {
        let table = self.state.read().await;
        let offset = page as usize * items_per_page as usize;
        Ok(table
            .rows
            .values()
            .skip(offset)
            .take(items_per_page as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut table = self.state.write().await;
        if !table.rows.contains_key(&customer.id) {
            return Err(DomainError::CustomerNotFound(customer.id));
        }
        table.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }
}

#[derive(Default)]
struct ContactTable {
    rows: BTreeMap<i64, Contact>,
    id_by_value: HashMap<String, i64>,
    next_id: i64,
}

/// One instance per contact kind; `id_by_value` keys are lowercased, standing
/// in for the database's unique index on `LOWER(value)`.
pub struct InMemoryContactRepository {
    kind: ContactKind,
    state: RwLock<ContactTable>,
}

impl InMemoryContactRepository {
    pub fn new(kind: ContactKind) -> Self {
        Self {
            kind,
            state: RwLock::new(ContactTable::default()),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: NewContact) -> Result<Contact, DomainError> {
        // The index check and the insert happen under one write lock, so two
        // concurrent creates for the same value cannot both pass the check.
        let mut table = self.state.write().await;
        let key = contact.value.to_lowercase();
        if table.id_by_value.contains_key(&key) {
            return Err(self.kind.already_owned(&contact.value));
        }

        table.next_id += 1;
        let created = Contact {
            id: table.next_id,
            customer_id: contact.customer_id,
            value: contact.value,
        };
        table.id_by_value.insert(key, created.id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, DomainError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<Contact>, DomainError> {
        let table = self.state.read().await;
        let Some(id) = table.id_by_value.get(&value.to_lowercase()) else {
            return Ok(None);
        };
        Ok(table.rows.get(id).cloned())
    }

    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Contact>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .rows
            .values()
            .filter(|row| row.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn update(&self, contact: Contact) -> Result<Contact, DomainError> {
        let mut table = self.state.write().await;
        let key = contact.value.to_lowercase();
        if let Some(&holder) = table.id_by_value.get(&key)
            && holder != contact.id
        {
            return Err(self.kind.already_owned(&contact.value));
        }

        let Some(existing) = table.rows.get(&contact.id) else {
            return Err(self.kind.not_found(contact.id));
        };
        let old_key = existing.value.to_lowercase();

        table.id_by_value.remove(&old_key);
        table.id_by_value.insert(key, contact.id);
        table.rows.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut table = self.state.write().await;
        let Some(removed) = table.rows.remove(&id) else {
            return Ok(false);
        };
        table.id_by_value.remove(&removed.value.to_lowercase());
        Ok(true)
    }
}
