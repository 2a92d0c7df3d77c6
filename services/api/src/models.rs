//! API models for request and response payloads
//!
//! `User` mirrors one row of the `users` table. The request payloads are
//! allow-listed: unknown caller-supplied fields are rejected at the JSON
//! boundary instead of being forwarded to storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for user creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Query parameters for user lookup and update
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_allowed_fields() {
        let payload: CreateUserRequest =
            serde_json::from_str(r#"{"name":"Ada","email":"a@x.com"}"#).unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "a@x.com");
    }

    #[test]
    fn create_request_rejects_unknown_fields() {
        let result = serde_json::from_str::<CreateUserRequest>(
            r#"{"name":"Ada","email":"a@x.com","role":"admin"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_request_requires_name_and_email() {
        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"name":"Ada"}"#).is_err());
        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"email":"a@x.com"}"#).is_err());
    }

    #[test]
    fn user_serializes_generated_fields() {
        let user = User {
            id: Uuid::nil(),
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["email"], "a@x.com");
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());
    }
}
