//! User API request/response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::UserRow;

/// Profile payload pushed from the identity provider
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SyncUserRequest {
    #[validate(length(min = 1, max = 256, message = "Subject must be 1-256 characters"))]
    pub subject: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,
    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SyncUserResponse {
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub subject: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<UserRow> for UserDto {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            subject: row.subject,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_request_validation() {
        let ok: SyncUserRequest = serde_json::from_str(
            r#"{"subject": "user_abc", "email": "ada@example.com"}"#,
        )
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad_email: SyncUserRequest =
            serde_json::from_str(r#"{"subject": "user_abc", "email": "not-an-email"}"#).unwrap();
        assert!(bad_email.validate().is_err());

        let empty_subject: SyncUserRequest =
            serde_json::from_str(r#"{"subject": "", "email": "ada@example.com"}"#).unwrap();
        assert!(empty_subject.validate().is_err());
    }
}
