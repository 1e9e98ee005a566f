//! Route-level page components.

pub mod add_product;
pub mod cart;
pub mod home;
pub mod login;
pub mod manage_orders;
pub mod manage_products;
pub mod order_details;
pub mod orders;
pub mod payment;
pub mod product_details;
pub mod products;
pub mod profile;
pub mod register;
