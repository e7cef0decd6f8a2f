//! Authentication request types
//!
//! Credential payloads sent to the backend auth endpoints, and the decoding of
//! their plain confirmation replies.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Extract the confirmation text from an auth reply body.
///
/// The backend answers with a bare string, but a JSON string literal or an
/// object carrying a `message` field are accepted as well.
pub fn confirmation_message(body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(text) = serde_json::from_str::<String>(trimmed) {
        return text;
    }
    if let Ok(MessageBody { message }) = serde_json::from_str::<MessageBody>(trimmed) {
        return message;
    }
    trimmed.to_string()
}
