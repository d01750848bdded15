pub mod cart;
pub mod common;
pub mod user;
