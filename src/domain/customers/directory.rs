//! Customer directory: seeded records selected during checkout.
//! Customer lifecycle (create/update) is owned elsewhere; a sale only picks
//! an existing record.

use std::sync::Arc;

use crate::domain::ids::CustomerId;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub tax_id: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct CustomerDirectory {
    customers: Arc<Vec<Customer>>,
}

impl CustomerDirectory {
    pub fn seeded() -> Self {
        Self {
            customers: Arc::new(seed_customers()),
        }
    }

    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get(&self, customer_id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    /// Case-insensitive substring match on name or tax id.
    pub fn search(&self, term: &str) -> Vec<Customer> {
        let term = term.to_lowercase();
        self.customers
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&term) || c.tax_id.contains(&term))
            .cloned()
            .collect()
    }
}

fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: CustomerId::new(),
            name: "Joao Silva".to_owned(),
            tax_id: "123.456.789-00".to_owned(),
            phone: "(11) 99999-9999".to_owned(),
            email: "joao.silva@email.com".to_owned(),
        },
        Customer {
            id: CustomerId::new(),
            name: "Maria Santos".to_owned(),
            tax_id: "987.654.321-00".to_owned(),
            phone: "(11) 88888-8888".to_owned(),
            email: "maria.santos@email.com".to_owned(),
        },
    ]
}

//-------------------------- Tests -------------------------------
