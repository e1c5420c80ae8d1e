use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    domain::{
        contact::{Contact, ContactKind, NewContact},
        customer::{Customer, NewCustomer},
        errors::DomainError,
    },
    infrastructure::{ContactRepository, CustomerRepository},
};

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let row = sqlx::query("INSERT INTO customers (name) VALUES ($1) RETURNING id, name")
            .bind(customer.name)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row_to_customer(&row))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let maybe_row = sqlx::query("SELECT id, name FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(maybe_row.as_ref().map(row_to_customer))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Customer>, DomainError> {
        let maybe_row =
            sqlx::query("SELECT id, name FROM customers WHERE LOWER(name) = LOWER($1) LIMIT 1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        Ok(maybe_row.as_ref().map(row_to_customer))
    }

    async fn list(&self, page: u32, items_per_page: u32) -> Result<Vec<Customer>, DomainError> {
        let offset = i64::from(page) * i64::from(items_per_page);
        let rows = sqlx::query("SELECT id, name FROM customers ORDER BY id LIMIT $1 OFFSET $2")
            .bind(i64::from(items_per_page))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.iter().map(row_to_customer).collect())
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let maybe_row =
            sqlx::query("UPDATE customers SET name = $2 WHERE id = $1 RETURNING id, name")
                .bind(customer.id)
                .bind(customer.name)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        maybe_row
            .as_ref()
            .map(row_to_customer)
            .ok_or(DomainError::CustomerNotFound(customer.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected() == 1)
    }
}

/// One instance per contact kind; the kind selects the table and value column.
#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
    kind: ContactKind,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool, kind: ContactKind) -> Self {
        Self { pool, kind }
    }

    fn table(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => "emails",
            ContactKind::Phone => "phones",
        }
    }

    fn column(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
        }
    }

    /// The unique index on `LOWER(value)` is the backstop for the
    /// lookup-then-insert race: a duplicate slipping past the service-level
    /// lookup comes back as SQLSTATE 23505 and is reported as the
    /// ownership conflict.
    fn map_write_error(&self, value: &str, error: sqlx::Error) -> DomainError {
        match &error {
            sqlx::Error::Database(db_error)
                if db_error.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                self.kind.already_owned(value)
            }
            _ => storage_error(error),
        }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, contact: NewContact) -> Result<Contact, DomainError> {
        let sql = format!(
            "INSERT INTO {table} (customer_id, {col}) VALUES ($1, $2) \
             RETURNING id, customer_id, {col} AS value",
            table = self.table(),
            col = self.column(),
        );
        let row = sqlx::query(&sql)
            .bind(contact.customer_id)
            .bind(&contact.value)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| self.map_write_error(&contact.value, error))?;

        Ok(row_to_contact(&row))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, DomainError> {
        let sql = format!(
            "SELECT id, customer_id, {col} AS value FROM {table} WHERE id = $1",
            table = self.table(),
            col = self.column(),
        );
        let maybe_row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(maybe_row.as_ref().map(row_to_contact))
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<Contact>, DomainError> {
        let sql = format!(
            "SELECT id, customer_id, {col} AS value FROM {table} \
             WHERE LOWER({col}) = LOWER($1) LIMIT 1",
            table = self.table(),
            col = self.column(),
        );
        let maybe_row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(maybe_row.as_ref().map(row_to_contact))
    }

    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Contact>, DomainError> {
        let sql = format!(
            "SELECT id, customer_id, {col} AS value FROM {table} \
             WHERE customer_id = $1 ORDER BY id",
            table = self.table(),
            col = self.column(),
        );
        let rows = sqlx::query(&sql)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.iter().map(row_to_contact).collect())
    }

    async fn update(&self, contact: Contact) -> Result<Contact, DomainError> {
        let sql = format!(
            "UPDATE {table} SET customer_id = $2, {col} = $3 WHERE id = $1 \
             RETURNING id, customer_id, {col} AS value",
            table = self.table(),
            col = self.column(),
        );
        let maybe_row = sqlx::query(&sql)
            .bind(contact.id)
            .bind(contact.customer_id)
            .bind(&contact.value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| self.map_write_error(&contact.value, error))?;

        maybe_row
            .as_ref()
            .map(row_to_contact)
            .ok_or_else(|| self.kind.not_found(contact.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let sql = format!("DELETE FROM {table} WHERE id = $1", table = self.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected() == 1)
    }
}

fn row_to_customer(row: &PgRow) -> Customer {
    Customer {
        id: row.get::<i64, _>("id"),
        name: row.get::<String, _>("name"),
    }
}

fn row_to_contact(row: &PgRow) -> Contact {
    Contact {
        id: row.get::<i64, _>("id"),
        customer_id: row.get::<i64, _>("customer_id"),
        value: row.get::<String, _>("value"),
    }
}

fn storage_error(error: sqlx::Error) -> DomainError {
    DomainError::storage(error.to_string())
}
