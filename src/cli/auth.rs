use anyhow::bail;

use crate::{core::security::generate_token, settings::Config};

/// Sign a token the API accepts, without going through `/login`.
pub fn issue_token(config: &Config, firstname: &str) -> anyhow::Result<String> {
    let firstname = firstname.trim();
    if firstname.is_empty() {
        bail!("firstname is required");
    }
    let (token, _) = generate_token(firstname, config)?;
    Ok(token)
}
