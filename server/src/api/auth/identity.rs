//! Identity extractors
//!
//! `Identity` rejects with 401 when no valid bearer token is present;
//! `MaybeIdentity` yields `None` instead, for endpoints where a session is
//! optional. With auth disabled every request maps to the `local` subject.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use super::AuthSettings;
use super::jwt::{self, JwtError};
use crate::api::types::ApiError;
use crate::core::constants::DEFAULT_SUBJECT;

/// Verified caller identity
///
/// The subject is always taken from the verified token, never from request
/// parameters.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
}

/// Optional caller identity
///
/// `None` when no Authorization header is present. A header that is present
/// but invalid still rejects with 401.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

fn settings(parts: &Parts) -> Result<&AuthSettings, ApiError> {
    parts.extensions.get::<AuthSettings>().ok_or_else(|| {
        tracing::error!("AuthSettings extension missing from request");
        ApiError::internal("Auth configuration unavailable")
    })
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn verify(token: &str, settings: &AuthSettings) -> Result<Identity, ApiError> {
    let secret = settings
        .secret
        .as_deref()
        .ok_or_else(|| ApiError::internal("Auth secret unavailable"))?;

    let claims = jwt::validate_session_token(token, secret).map_err(|e| match e {
        JwtError::Expired => ApiError::unauthorized("TOKEN_EXPIRED", "Session token has expired"),
        JwtError::InvalidSignature | JwtError::Invalid(_) => {
            ApiError::unauthorized("TOKEN_INVALID", "Invalid session token")
        }
    })?;

    Ok(Identity {
        subject: claims.sub,
    })
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let settings = settings(parts)?;

        if !settings.enabled {
            return Ok(Identity {
                subject: DEFAULT_SUBJECT.to_string(),
            });
        }

        let token = bearer_token(parts).ok_or_else(|| {
            ApiError::unauthorized("AUTH_REQUIRED", "Missing bearer token")
        })?;

        verify(token, settings)
    }
}

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let settings = settings(parts)?;

        if !settings.enabled {
            return Ok(MaybeIdentity(Some(Identity {
                subject: DEFAULT_SUBJECT.to_string(),
            })));
        }

        match bearer_token(parts) {
            None => Ok(MaybeIdentity(None)),
            Some(token) => verify(token, settings).map(|id| MaybeIdentity(Some(id))),
        }
    }
}
