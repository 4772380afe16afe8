pub mod auth;
pub mod common;
pub mod product;
pub mod product_profile;
pub mod user;
pub mod user_profile;
