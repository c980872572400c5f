// In: src/bridge/stateless_api.rs

use crate::bridge::format::CipherRecord;
use crate::error::RailFenceError;
use crate::kernels::{self, Direction};

/// Runs one kernel over the Unicode scalar values of `text`.
fn transform(direction: Direction, text: &str, rails: usize) -> Result<String, RailFenceError> {
    let input: Vec<char> = text.chars().collect();
    let mut output = Vec::with_capacity(input.len());
    kernels::dispatch(direction, &input, rails, &mut output)?;
    Ok(output.into_iter().collect())
}

/// Encrypts `message` on `rails` rails. Multi-byte characters move as a unit.
pub fn encrypt(message: &str, rails: usize) -> Result<String, RailFenceError> {
    let cipher = transform(Direction::Encode, message, rails)?;
    log_metric!("event" = "encrypt", "rails" = rails, "chars" = cipher.chars().count());
    Ok(cipher)
}

/// Decrypts a ciphertext produced by [`encrypt`] with the same rail count.
pub fn decrypt(cipher: &str, rails: usize) -> Result<String, RailFenceError> {
    let plain = transform(Direction::Decode, cipher, rails)?;
    log_metric!("event" = "decrypt", "rails" = rails, "chars" = plain.chars().count());
    Ok(plain)
}

/// Encrypts `message` and packages the result as a persistable record.
pub fn encrypt_to_record(
    message: &str,
    rails: usize,
    store_length: bool,
) -> Result<CipherRecord, RailFenceError> {
    let record = CipherRecord::new(encrypt(message, rails)?, rails);
    Ok(if store_length {
        record.with_length()
    } else {
        record
    })
}

/// Decrypts a record, rejecting it if its declared length or rails do not fit the cipher.
pub fn decrypt_record(record: &CipherRecord) -> Result<String, RailFenceError> {
    record.check_length()?;
    decrypt(&record.cipher, record.rails)
}

/// The outcome of encrypting a message and decrypting it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    pub plaintext: String,
    pub cipher: String,
    pub decrypted: String,
    pub rails: usize,
}

impl RoundTripReport {
    pub fn is_lossless(&self) -> bool {
        self.plaintext == self.decrypted
    }
}

pub fn round_trip(message: &str, rails: usize) -> Result<RoundTripReport, RailFenceError> {
    let cipher = encrypt(message, rails)?;
    let decrypted = decrypt(&cipher, rails)?;
    let report = RoundTripReport {
        plaintext: message.to_string(),
        cipher,
        decrypted,
        rails,
    };
    if !report.is_lossless() {
        log::warn!("round trip on {} rails did not restore the message", rails);
    }
    Ok(report)
}
