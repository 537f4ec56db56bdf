use serde::{Deserialize, Serialize};

/// Grant used by the password login endpoint
pub const PASSWORD_GRANT: &str = "password";

/// "/auth/v1/token?grant_type=password"
pub fn token_path() -> String {
    format!("/auth/v1/token?grant_type={}", PASSWORD_GRANT)
}

pub const SIGNUP_PATH: &str = "/auth/v1/signup";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub data: SignupMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupMetadata {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl SignupRequest {
    /// Empty phone is left out of the body
    pub fn new(email: String, password: String, full_name: String, phone: &str) -> Self {
        let phone = phone.trim();
        Self {
            email,
            password,
            data: SignupMetadata {
                full_name,
                phone: (!phone.is_empty()).then(|| phone.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

impl AuthUser {
    /// Full name when known, otherwise the email
    pub fn display_name(&self) -> String {
        self.user_metadata
            .as_ref()
            .and_then(|m| m.full_name.clone())
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_omits_empty_phone() {
        let request = SignupRequest::new("a@b.c".into(), "secret".into(), "Omar".into(), "  ");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["data"], serde_json::json!({"full_name": "Omar"}));
    }

    #[test]
    fn test_session_parses_and_names_user() {
        let json = r#"{
            "access_token": "tok",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {"id": "u1", "email": "a@b.c", "user_metadata": {"full_name": "Omar"}}
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.user.display_name(), "Omar");

        let anonymous = AuthUser { id: "u2".into(), email: Some("x@y.z".into()), user_metadata: None };
        assert_eq!(anonymous.display_name(), "x@y.z");
    }

    #[test]
    fn test_token_path() {
        assert_eq!(token_path(), "/auth/v1/token?grant_type=password");
    }
}
