mod directory;
mod list_customers;

pub use directory::{Customer, CustomerDirectory};
pub use list_customers::{CustomerFilter, list_customers_endpoint};
