use chrono::{Duration, Local};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use poem::Request;
use poem_openapi::{auth::Bearer, SecurityScheme};
use serde::{Deserialize, Serialize};

use crate::settings::Config;

pub struct Keys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl Keys {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub firstname: String,
    pub exp: i64,
}

impl Claims {
    pub fn new(firstname: &str, config: &Config) -> Self {
        let exp = (Local::now() + Duration::minutes(config.jwt_exp as i64)).timestamp();

        Self {
            firstname: firstname.to_string(),
            exp,
        }
    }
}

/// Generate token
pub fn encode_token(claims: &Claims, jwt_secret: &str) -> anyhow::Result<String> {
    let keys = Keys::new(jwt_secret.as_bytes());
    let token = encode(&Header::default(), &claims, &keys.encoding)?;
    Ok(token)
}

/// Extract payload and Validate token
pub fn decode_token(token: &str, jwt_secret: &str) -> anyhow::Result<Claims> {
    let keys = Keys::new(jwt_secret.as_bytes());
    let token_data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(token_data.claims)
}

pub fn generate_token(firstname: &str, config: &Config) -> anyhow::Result<(String, Claims)> {
    let claims = Claims::new(firstname, config);
    let token = encode_token(&claims, &config.jwt_secret)?;
    Ok((token, claims))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserApiKey {
    pub token: Option<String>,
}

/// ApiKey authorization
#[derive(SecurityScheme)]
#[oai(ty = "bearer", checker = "bearer_checker")]
pub struct BearerAuthorization(pub UserApiKey);

pub async fn bearer_checker(_req: &Request, api_key: Bearer) -> Option<UserApiKey> {
    Some(UserApiKey {
        token: Some(api_key.token),
    })
}

#[derive(Debug)]
pub enum TokenError {
    /// no credential was presented
    Missing,
    /// credential was presented but failed signature or expiry checks
    Invalid(anyhow::Error),
}

pub fn get_claims_from_token(
    jwt_token: Option<String>,
    jwt_secret: &str,
) -> Result<Claims, TokenError> {
    let token = match jwt_token {
        Some(val) if !val.trim().is_empty() => val,
        _ => return Err(TokenError::Missing),
    };
    decode_token(token.trim(), jwt_secret).map_err(TokenError::Invalid)
}
