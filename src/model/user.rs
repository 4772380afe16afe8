use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

pub const TABLE_NAME: &str = "public.user";

/// Fields a merge-patch may overwrite.
pub const PATCHABLE_FIELDS: &[&str] = &["firstname", "lastname", "email", "password"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

/// Row of `user LEFT JOIN user_profile`.
#[derive(Clone, Debug, FromRow)]
pub struct UserWithProfile {
    pub user_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub pnn_number: Option<String>,
}
