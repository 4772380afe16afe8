use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.user_profile";

pub const PATCHABLE_FIELDS: &[&str] = &["age", "address", "contact_number", "pnn_number"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub user_id: i32,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub pnn_number: String,
}

/// Row of `user_profile LEFT JOIN user`.
#[derive(Clone, Debug, FromRow)]
pub struct UserProfileWithUser {
    pub user_id: i32,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub pnn_number: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}
