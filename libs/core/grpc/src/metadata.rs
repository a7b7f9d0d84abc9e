//! Request metadata helpers
//!
//! Readers for the handful of metadata keys the services care about. All of them are
//! total: a missing, non-ASCII or malformed value reads as `None`.

use std::time::Duration;
use tonic::metadata::MetadataMap;

/// Metadata key carrying the caller's credential.
pub const AUTHORIZATION: &str = "authorization";

/// Metadata key used for request correlation.
pub const REQUEST_ID: &str = "x-request-id";

/// Metadata key carrying the caller's deadline.
pub const GRPC_TIMEOUT: &str = "grpc-timeout";

const BEARER_PREFIX: &str = "bearer ";

/// Extract the bearer credential from `authorization` metadata.
///
/// Accepts both a raw token and the `Bearer <token>` form (scheme matched
/// case-insensitively). Returns `None` when the key is missing or holds no credential.
pub fn bearer_token(metadata: &MetadataMap) -> Option<String> {
    let raw = metadata.get(AUTHORIZATION)?.to_str().ok()?.trim();

    let token = match raw.get(..BEARER_PREFIX.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(BEARER_PREFIX) => {
            raw[BEARER_PREFIX.len()..].trim()
        }
        _ => raw,
    };

    if token.is_empty() || token.eq_ignore_ascii_case("bearer") {
        None
    } else {
        Some(token.to_string())
    }
}

/// Read the `x-request-id` correlation id, if the caller sent one.
pub fn request_id(metadata: &MetadataMap) -> Option<String> {
    let value = metadata.get(REQUEST_ID)?.to_str().ok()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse the `grpc-timeout` header (`<digits><unit>`, at most 8 digits).
///
/// Units follow the gRPC HTTP/2 protocol: `H`ours, `M`inutes, `S`econds,
/// `m`illiseconds, `u`microseconds, `n`anoseconds.
pub fn grpc_timeout(metadata: &MetadataMap) -> Option<Duration> {
    let value = metadata.get(GRPC_TIMEOUT)?.to_str().ok()?;
    parse_grpc_timeout(value)
}

fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    if value.len() < 2 || !value.is_ascii() {
        return None;
    }

    let (digits, unit) = value.split_at(value.len() - 1);
    if digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let amount: u64 = digits.parse().ok()?;

    let duration = match unit {
        "H" => Duration::from_secs(amount * 60 * 60),
        "M" => Duration::from_secs(amount * 60),
        "S" => Duration::from_secs(amount),
        "m" => Duration::from_millis(amount),
        "u" => Duration::from_micros(amount),
        "n" => Duration::from_nanos(amount),
        _ => return None,
    };

    Some(duration)
}
