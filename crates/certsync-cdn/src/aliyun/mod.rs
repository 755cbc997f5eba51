//! Alibaba Cloud CDN client.
//!
//! Replaces a domain's HTTPS certificate through the
//! `SetCdnDomainSSLCertificate` action (API version 2018-05-10), signed
//! with ACS3-HMAC-SHA256.

mod api;
mod client;
mod signer;

#[cfg(test)]
mod tests;

pub use client::{AliyunCdnClient, API_VERSION, SET_CERTIFICATE_ACTION};
pub use signer::{percent_encode, Credentials, SigningInput, SIGNATURE_ALGORITHM};
