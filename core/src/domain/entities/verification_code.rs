//! Verification code entity for short-lived, single-use codes.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::purpose::Purpose;

/// Alphabet codes are drawn from: uppercase letters and digits
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of a verification code
pub const CODE_LENGTH: usize = 6;

/// Short-lived verification code bound to an account
///
/// Immutable once issued; the only lifecycle transitions are redemption
/// and passive expiry, both handled by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// The generated code string
    pub code: String,

    /// Workflow the code belongs to
    pub purpose: Purpose,

    /// Account the code was issued for
    pub subject_id: i64,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Generate a new code for an account
    ///
    /// Draws `length` independent uniformly-random characters from
    /// [`CODE_ALPHABET`]. No uniqueness check is made against outstanding
    /// codes; a colliding key overwrites the previous mapping, accepted
    /// given the 36^6 keyspace.
    pub fn generate(purpose: Purpose, subject_id: i64, length: usize, ttl_seconds: u64) -> Self {
        let code = Self::generate_code(length);
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::seconds(ttl_seconds as i64);

        Self {
            code,
            purpose,
            subject_id,
            issued_at,
            expires_at,
        }
    }

    /// Generate a random code string of the given length
    pub fn generate_code(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| {
                let idx = rng.gen_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect()
    }

    /// Storage key for this code
    pub fn storage_key(&self) -> String {
        self.purpose.storage_key(&self.code)
    }

    /// Whether the code's expiry timestamp has passed
    ///
    /// Informational only: expiry is enforced by the store TTL, not by
    /// callers polling this flag.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
