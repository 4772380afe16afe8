use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Object, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct BadRequestResponse {
    pub error: String,
}

impl BadRequestResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct UnauthorizedResponse {
    pub error: String,
}

impl Default for UnauthorizedResponse {
    fn default() -> Self {
        Self {
            error: "Unauthorized".to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct ForbiddenResponse {
    pub error: String,
}

impl Default for ForbiddenResponse {
    fn default() -> Self {
        Self {
            error: "Forbidden".to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct NotFoundResponse {
    pub error: String,
}

impl NotFoundResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Generic 500 body. The underlying error only goes to the log.
#[derive(Object, Deserialize, Serialize)]
pub struct InternalServerErrorResponse {
    pub error: String,
}

impl InternalServerErrorResponse {
    pub fn new(module: &str, function: &str, step: &str, err: &str) -> Self {
        error!(
            module = module,
            function = function,
            step = step,
            "{}",
            err
        );
        Self {
            error: format!("An error occurred while {}", step),
        }
    }

    /// A write that completed but touched no row. `message` is returned as is.
    pub fn not_applied(module: &str, function: &str, message: &str) -> Self {
        error!(module = module, function = function, "{}", message);
        Self {
            error: message.to_string(),
        }
    }
}
