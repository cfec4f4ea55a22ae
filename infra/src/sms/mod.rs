//! SMS verification module
//!
//! The hosted verify provider both delivers and checks phone codes, so
//! the infrastructure side only needs doubles that reproduce its surface:
//! start a verification, check a code.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::Rng;
use tracing::info;

use vg_core::services::account::SmsVerifier;

/// Provider double that issues and checks its own codes
///
/// Used in development and tests. Codes are numeric six-digit strings,
/// one outstanding per phone; a successful check consumes the code the
/// way the hosted provider approves a verification once.
#[derive(Default)]
pub struct MockSmsVerifier {
    codes: Mutex<HashMap<String, String>>,
}

impl MockSmsVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code most recently sent to a phone, if any
    pub fn sent_code(&self, phone: &str) -> Option<String> {
        self.codes.lock().unwrap().get(phone).cloned()
    }
}

#[async_trait]
impl SmsVerifier for MockSmsVerifier {
    async fn start_verification(&self, phone: &str) -> Result<(), String> {
        let code = {
            let mut rng = rand::thread_rng();
            format!("{:06}", rng.gen_range(0..1_000_000u32))
        };

        info!(event = "sms_verification_started", "SMS verification code issued");
        self.codes
            .lock()
            .unwrap()
            .insert(phone.to_string(), code);
        Ok(())
    }

    async fn check_code(&self, phone: &str, code: &str) -> Result<bool, String> {
        let mut codes = self.codes.lock().unwrap();
        match codes.get(phone) {
            Some(sent) if sent == code => {
                codes.remove(phone);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
