//! Demonstration payload
//!
//! A small JSON record sealed and reopened end to end, used by
//! `fragseal demo` to show what a share link carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{decrypt, encrypt, Token};
use crate::error::{SealError, SealResult};

/// A sample record carried inside a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRecord {
    pub title: String,
    pub secret: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DemoRecord {
    /// Build the fixed sample record, stamped with the current time
    pub fn sample() -> Self {
        Self {
            title: "Wi-Fi credentials".to_string(),
            secret: "correct-horse-battery-staple".to_string(),
            created_at: Utc::now(),
            note: Some("Only readable with the shared password".to_string()),
        }
    }

    /// Compact JSON form of the record
    pub fn to_json(&self) -> SealResult<String> {
        serde_json::to_string(self)
            .map_err(|e| SealError::Json(format!("Failed to serialize demo record: {}", e)))
    }
}

/// Seal the sample record under `password`
pub fn seal_demo(password: &str) -> SealResult<(DemoRecord, Token)> {
    let record = DemoRecord::sample();
    let token = encrypt(&record.to_json()?, password)?;
    Ok((record, token))
}

/// Open a token produced by [`seal_demo`]
pub fn open_demo(token: &str, password: &str) -> SealResult<DemoRecord> {
    let json = decrypt(token, password)?;
    serde_json::from_str(&json)
        .map_err(|e| SealError::Json(format!("Opened payload is not a demo record: {}", e)))
}

/// Confirm an opened record matches the one that was sealed
pub fn check_round_trip(original: &DemoRecord, opened: &DemoRecord) -> SealResult<()> {
    if original != opened {
        return Err(SealError::Demo(
            "Record changed across a seal/open round trip".to_string(),
        ));
    }
    Ok(())
}
