//! The two inverse conversions. Both are pure: string in, string or a
//! definite error out. Neither touches process state.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use uuid::Uuid;

use crate::error::{Result, Uuid64Error};

/// Encodes the 16 raw bytes of a UUID as standard padded base64.
///
/// Accepts the hyphenated and the compact 32-digit forms, in any case.
/// Version and variant bits are not validated; any well-formed 16-byte hex
/// identifier converts. The result is always 24 characters ending in `==`.
pub fn uuid_to_base64(input: &str) -> Result<String> {
    let id = Uuid::try_parse(input).map_err(|source| Uuid64Error::Uuid {
        input: input.to_string(),
        source,
    })?;
    Ok(STANDARD.encode(id.as_bytes()))
}

/// Decodes a standard padded base64 string back into canonical UUID text.
///
/// A decode that succeeds but yields anything other than exactly 16 bytes
/// is its own error, reported with the actual byte count.
pub fn base64_to_uuid(input: &str) -> Result<String> {
    let decoded = STANDARD
        .decode(input)
        .map_err(|source| Uuid64Error::Base64 {
            input: input.to_string(),
            source,
        })?;
    let bytes: [u8; 16] = decoded
        .try_into()
        .map_err(|rest: Vec<u8>| Uuid64Error::ByteLength(rest.len()))?;
    Ok(Uuid::from_bytes(bytes).hyphenated().to_string())
}
