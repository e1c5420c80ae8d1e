#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
}

/// Aggregated view of a customer with every contact value it owns.
#[derive(Debug, Clone)]
pub struct CustomerWithContacts {
    pub id: i64,
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}
