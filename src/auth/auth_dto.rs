use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub login_key: String,
    #[validate(length(min = 4))]
    pub password: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub login_key: String,
    #[validate(length(min = 4))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LogoutRequest {
    #[validate(length(min = 1, max = 255))]
    pub login_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub nickname: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn register_accepts_valid_payload() {
        let payload = RegisterRequest {
            login_key: "u1".to_string(),
            password: "p4ss".to_string(),
            name: "Alice".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn register_rejects_empty_login_key() {
        let payload = RegisterRequest {
            login_key: String::new(),
            password: "p4ss".to_string(),
            name: "Alice".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_rejects_short_password() {
        let payload = RegisterRequest {
            login_key: "u1".to_string(),
            password: "p".to_string(),
            name: "Alice".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn logout_rejects_empty_login_key() {
        let payload = LogoutRequest {
            login_key: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
