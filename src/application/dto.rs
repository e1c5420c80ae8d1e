use serde::{Deserialize, Serialize};

use crate::domain::{
    contact::Contact,
    customer::{Customer, CustomerWithContacts},
};

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomerQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteCustomerRequest {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListCustomersQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub items: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ContactTypeQuery {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerWithContactsResponse {
    pub id: i64,
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl From<CustomerWithContacts> for CustomerWithContactsResponse {
    fn from(value: CustomerWithContacts) -> Self {
        Self {
            id: value.id,
            name: value.name,
            emails: value.emails,
            phones: value.phones,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailRequest {
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailRequest {
    pub id: i64,
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailResponse {
    pub id: i64,
    pub customer_id: i64,
    pub email: String,
}

impl From<Contact> for EmailResponse {
    fn from(value: Contact) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            email: value.value,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhoneRequest {
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhoneRequest {
    pub id: i64,
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResponse {
    pub id: i64,
    pub customer_id: i64,
    pub phone: String,
}

impl From<Contact> for PhoneResponse {
    fn from(value: Contact) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            phone: value.value,
        }
    }
}

/// Update and delete both address a contact row by id; delete ignores the
/// other fields a client may send along.
#[derive(Debug, Deserialize)]
pub struct DeleteContactRequest {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
