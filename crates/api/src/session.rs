// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The login boundary.
//!
//! Login accepts any syntactically plausible email/password pair and
//! establishes a static in-memory session used only for display. No
//! credential check happens and no authorization is derived from it.

use crate::error::ApiError;
use predial_domain::validate_email;
use serde::Serialize;
use time::OffsetDateTime;

/// Unit label shown for the signed-in user.
const DEFAULT_UNIT: &str = "Regional Superintendency DF";

/// Display identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    /// Display name, derived from the email local part.
    pub name: String,
    /// The email the session was opened with.
    pub email: String,
    /// Unit label.
    pub unit: String,
}

/// A static in-memory session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Opaque session token.
    pub token: String,
    /// Display identity.
    pub user: SessionUser,
    /// When the session was opened.
    pub started_at: OffsetDateTime,
}

/// Derives a presentable name from the email local part, so
/// `joao.silva@...` signs in as "Joao Silva".
fn display_name(email: &str) -> String {
    let local: &str = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Opens a session for any plausible email/password pair.
///
/// # Arguments
///
/// * `email` - Must have a basic email shape
/// * `password` - Must be non-empty; its content is never checked
/// * `now` - Session start time
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the email shape check fails or
/// the password is empty.
pub fn login(email: &str, password: &str, now: OffsetDateTime) -> Result<Session, ApiError> {
    validate_email(email).map_err(|err| ApiError::InvalidInput {
        field: String::from("email"),
        message: err.to_string(),
    })?;
    if password.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("password"),
            message: String::from("Password is required"),
        });
    }

    Ok(Session {
        token: format!("session_{}_{}", now.unix_timestamp(), rand::random::<u64>()),
        user: SessionUser {
            name: display_name(email),
            email: String::from(email),
            unit: String::from(DEFAULT_UNIT),
        },
        started_at: now,
    })
}
