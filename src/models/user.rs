use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The two roles the backend knows about. `USER` is the legacy spelling of
/// the customer role and is accepted on decode only.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "CUSTOMER", alias = "USER")]
    Customer,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    // `userType` is the legacy field name; `role` is canonical
    #[serde(alias = "userType")]
    pub role: Role,
}

/// Authenticated principal: profile plus credential token, always persisted
/// and cleared as a pair.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub role: Role,
}

/// `{ success, message?, user?, token? }` envelope from login/register.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// A usable session requires `success`, a user AND a non-empty token.
    /// A "successful" response missing either is a backend bug we refuse to
    /// persist half of.
    pub fn into_session(self) -> Result<Session, ApiError> {
        if !self.success {
            return Err(ApiError::Business {
                status: None,
                message: self
                    .message
                    .unwrap_or_else(|| "Authentication failed".to_string()),
            });
        }
        let user = self.user.ok_or(ApiError::BadResponse)?;
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::BadResponse)?;
        Ok(Session { user, token })
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UsersResponse {
    pub success: bool,
    #[serde(default)]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        serde_json::from_str(
            r#"{"id":1,"fullName":"Alice K","username":"alice","email":"alice@example.com",
                "phoneNumber":"9876543210","role":"ADMIN"}"#,
        )
        .expect("user json")
    }

    #[test]
    fn canonical_role_field_decodes() {
        assert_eq!(sample_user().role, Role::Admin);
    }

    #[test]
    fn legacy_user_type_field_decodes() {
        let user: User = serde_json::from_str(
            r#"{"id":2,"fullName":"Bob","username":"bob","email":"b@x.io","userType":"USER"}"#,
        )
        .expect("legacy json");
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn role_is_emitted_canonically() {
        let json = serde_json::to_string(&sample_user()).expect("serialize");
        assert!(json.contains(r#""role":"ADMIN""#));
        assert!(!json.contains("userType"));
    }

    #[test]
    fn success_with_user_and_token_becomes_session() {
        let response = AuthResponse {
            success: true,
            message: None,
            user: Some(sample_user()),
            token: Some("tok123".to_string()),
        };
        let session = response.into_session().expect("session");
        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.token, "tok123");
    }

    #[test]
    fn missing_or_empty_token_is_a_bad_response() {
        let missing = AuthResponse {
            success: true,
            message: None,
            user: Some(sample_user()),
            token: None,
        };
        assert_eq!(missing.into_session(), Err(ApiError::BadResponse));

        let empty = AuthResponse {
            success: true,
            message: None,
            user: Some(sample_user()),
            token: Some(String::new()),
        };
        assert_eq!(empty.into_session(), Err(ApiError::BadResponse));
    }

    #[test]
    fn envelope_failure_carries_backend_message() {
        let response = AuthResponse {
            success: false,
            message: Some("Invalid credentials".to_string()),
            user: None,
            token: None,
        };
        match response.into_session() {
            Err(ApiError::Business { status, message }) => {
                assert_eq!(status, None);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
