pub mod db;
pub mod merge_patch;
pub mod pagination;
pub mod security;
pub mod sqlx_utils;
#[cfg(test)]
pub mod test_utils;
pub mod utils;
pub mod validation;
