pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customers;
pub mod helpers;
pub mod ids;
pub mod orders;
pub mod storefront;
