//! Identifier helpers

use bech32::{Bech32m, Hrp};
use uuid7::uuid7;

const ALERT_HRP: Hrp = Hrp::parse_unchecked("alert");

/// Raw uuid7 bytes plus their bech32m rendering.
///
/// The raw bytes are time ordered and are what storage keys use. The bech32m
/// alphabet is not in byte order, so the encoded form is for display only.
pub fn new_alert_id() -> Result<([u8; 16], String), bech32::EncodeError> {
    let id = uuid7();
    let encoded = bech32::encode::<Bech32m>(ALERT_HRP, id.as_bytes())?;
    Ok((*id.as_bytes(), encoded))
}
