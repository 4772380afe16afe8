pub mod auth;
pub mod product;
pub mod product_profile;
pub mod user;
pub mod user_profile;
#[cfg(test)]
mod user_test;
