//! Request body checks shared by create and merge-patch update.
//!
//! Every validator walks its predicates in order and stops at the first
//! failure, returning the message that goes back to the client.

use serde_json::Value;

pub type ValidationResult = Result<(), String>;

fn is_present(body: &Value, field: &str) -> bool {
    !matches!(body.get(field), None | Some(Value::Null))
}

fn require_fields(body: &Value, fields: &[&str]) -> ValidationResult {
    if !body.is_object() {
        return Err("Request body must be a JSON object".to_string());
    }
    for field in fields {
        if !is_present(body, field) {
            return Err(format!("{} is required", field));
        }
    }
    Ok(())
}

fn as_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

fn as_i32(body: &Value, field: &str) -> Option<i32> {
    body.get(field)
        .and_then(Value::as_i64)
        .and_then(|val| i32::try_from(val).ok())
}

fn as_f64(body: &Value, field: &str) -> Option<f64> {
    body.get(field).and_then(Value::as_f64)
}

pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty()
        || !digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return false;
    }
    let count = digits.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&count)
}

/// Six digit postal index number, never starting with 0.
pub fn is_valid_pnn(pnn: &str) -> bool {
    pnn.len() == 6 && pnn.chars().all(|c| c.is_ascii_digit()) && !pnn.starts_with('0')
}

pub fn validate_user(body: &Value) -> ValidationResult {
    require_fields(body, &["firstname", "lastname", "email", "password"])?;
    if as_str(body, "firstname").is_none() || as_str(body, "lastname").is_none() {
        return Err("Firstname and lastname must be strings".to_string());
    }
    match as_str(body, "email") {
        Some(email) if is_valid_email(email) => {}
        _ => return Err("Invalid email format".to_string()),
    }
    match as_str(body, "password") {
        Some(password) if password.chars().count() >= 6 => {}
        _ => return Err("Password must be at least 6 characters long".to_string()),
    }
    Ok(())
}

pub fn validate_user_profile(body: &Value) -> ValidationResult {
    require_fields(
        body,
        &["user_id", "age", "address", "contact_number", "pnn_number"],
    )?;
    match as_i32(body, "user_id") {
        Some(val) if val > 0 => {}
        _ => return Err("User ID must be an integer".to_string()),
    }
    match as_i32(body, "age") {
        Some(val) if (0..=150).contains(&val) => {}
        _ => return Err("Age must be an integer between 0 and 150".to_string()),
    }
    match as_str(body, "address") {
        Some(val) if !val.trim().is_empty() => {}
        _ => return Err("Address must be a non-empty string".to_string()),
    }
    match as_str(body, "contact_number") {
        Some(val) if is_valid_phone(val) => {}
        _ => return Err("Invalid contact number".to_string()),
    }
    match as_str(body, "pnn_number") {
        Some(val) if is_valid_pnn(val) => {}
        _ => return Err("Invalid pnn number".to_string()),
    }
    Ok(())
}

pub fn validate_product(body: &Value) -> ValidationResult {
    require_fields(body, &["ProductName", "Category", "Price"])?;
    if as_str(body, "ProductName").is_none() || as_str(body, "Category").is_none() {
        return Err("Productname and category must be strings".to_string());
    }
    match as_f64(body, "Price") {
        Some(val) if val >= 0.0 => {}
        _ => return Err("Price must be a non-negative number".to_string()),
    }
    if is_present(body, "ProductID") {
        match as_i32(body, "ProductID") {
            Some(val) if val > 0 => {}
            _ => return Err("product ID must be integers".to_string()),
        }
    }
    Ok(())
}

pub fn validate_product_profile(body: &Value) -> ValidationResult {
    require_fields(body, &["ProductID", "Ratings", "Color", "Brand"])?;
    match as_i32(body, "ProductID") {
        Some(val) if val > 0 => {}
        _ => return Err("product ID must be integers".to_string()),
    }
    if as_str(body, "Color").is_none() || as_str(body, "Brand").is_none() {
        return Err("color and brand must be a string".to_string());
    }
    match as_f64(body, "Ratings") {
        Some(val) if (0.0..=5.0).contains(&val) => {}
        _ => return Err("Ratings must be a number between 0 and 5".to_string()),
    }
    Ok(())
}
