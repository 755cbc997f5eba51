//! ACS3-HMAC-SHA256 request signing.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

use crate::CdnError;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_ALGORITHM: &str = "ACS3-HMAC-SHA256";

/// Access key pair.
#[derive(Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub access_key_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"[REDACTED]")
            .finish()
    }
}

/// Everything that goes into one request signature.
#[derive(Debug, Clone)]
pub struct SigningInput<'a> {
    pub host: &'a str,
    pub action: &'a str,
    pub version: &'a str,
    /// ISO 8601 UTC, `%Y-%m-%dT%H:%M:%SZ`.
    pub timestamp: &'a str,
    pub nonce: &'a str,
    pub content_type: &'a str,
    pub body: &'a str,
}

/// RFC 3986 encoding: everything but `A-Za-z0-9-_.~` is escaped.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encode parameters as a form body, sorted by key.
pub(crate) fn form_encode<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let sorted: BTreeMap<&str, &str> = params.into_iter().collect();
    sorted
        .into_iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub(crate) fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

/// Headers covered by the signature, lowercase and sorted.
pub(crate) fn signed_header_map(input: &SigningInput<'_>) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("content-type".to_string(), input.content_type.to_string()),
        ("host".to_string(), input.host.to_string()),
        ("x-acs-action".to_string(), input.action.to_string()),
        ("x-acs-content-sha256".to_string(), sha256_hex(input.body)),
        ("x-acs-date".to_string(), input.timestamp.to_string()),
        ("x-acs-signature-nonce".to_string(), input.nonce.to_string()),
        ("x-acs-version".to_string(), input.version.to_string()),
    ])
}

/// Build the canonical request for a `POST /` with an empty query string.
///
/// Returns the canonical request and the `;`-joined signed header list.
pub(crate) fn canonical_request(headers: &BTreeMap<String, String>, body_hash: &str) -> (String, String) {
    let canonical_headers: String = headers
        .iter()
        .map(|(k, v)| format!("{k}:{}\n", v.trim()))
        .collect();
    let signed_headers = headers.keys().cloned().collect::<Vec<_>>().join(";");

    let request = format!("POST\n/\n\n{canonical_headers}\n{signed_headers}\n{body_hash}");
    (request, signed_headers)
}

/// Hex HMAC-SHA256 over the string to sign.
pub(crate) fn signature(secret: &str, canonical_request: &str) -> Result<String, CdnError> {
    let string_to_sign = format!("{SIGNATURE_ALGORITHM}\n{}", sha256_hex(canonical_request));
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| CdnError::Signing(e.to_string()))?;
    mac.update(string_to_sign.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Produce the full header set for a request, `authorization` included.
pub(crate) fn sign(
    credentials: &Credentials,
    input: &SigningInput<'_>,
) -> Result<BTreeMap<String, String>, CdnError> {
    let mut headers = signed_header_map(input);
    let body_hash = headers
        .get("x-acs-content-sha256")
        .cloned()
        .unwrap_or_else(|| sha256_hex(input.body));
    let (request, signed_headers) = canonical_request(&headers, &body_hash);
    let sig = signature(&credentials.access_key_secret, &request)?;

    headers.insert(
        "authorization".to_string(),
        format!(
            "{SIGNATURE_ALGORITHM} Credential={},SignedHeaders={signed_headers},Signature={sig}",
            credentials.access_key_id
        ),
    );
    Ok(headers)
}
