//! CertificateUploader implementation and response parsing.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::{CdnError, CertificatePair, CertificateUploader, UploadReceipt};

use super::client::{AliyunCdnClient, API_VERSION, FORM_CONTENT_TYPE, SET_CERTIFICATE_ACTION};
use super::signer::{sign, SigningInput};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SuccessBody {
    request_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct ErrorBody {
    request_id: Option<String>,
    code: Option<String>,
    message: Option<String>,
    recommend: Option<String>,
}

/// Turn a non-2xx response into an API error, tolerating non-JSON bodies.
pub(crate) fn parse_api_error(status: u16, body: &str) -> CdnError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => CdnError::Api {
            status,
            code: parsed.code.unwrap_or_else(|| "Unknown".to_string()),
            message: parsed.message.unwrap_or_default(),
            recommend: parsed.recommend,
            request_id: parsed.request_id,
        },
        Err(_) => CdnError::Api {
            status,
            code: "Unknown".to_string(),
            message: body.chars().take(200).collect(),
            recommend: None,
            request_id: None,
        },
    }
}

pub(crate) fn parse_receipt(body: &str) -> Result<UploadReceipt, CdnError> {
    let parsed: SuccessBody =
        serde_json::from_str(body).map_err(|e| CdnError::Parse(e.to_string()))?;
    Ok(UploadReceipt {
        request_id: parsed.request_id,
    })
}

#[async_trait]
impl CertificateUploader for AliyunCdnClient {
    async fn upload(&self, pair: &CertificatePair) -> Result<UploadReceipt, CdnError> {
        let body = self.build_request_body(pair);
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();

        let headers = sign(
            &self.credentials,
            &SigningInput {
                host: &self.config.endpoint,
                action: SET_CERTIFICATE_ACTION,
                version: API_VERSION,
                timestamp: &timestamp,
                nonce: &nonce,
                content_type: FORM_CONTENT_TYPE,
                body: &body,
            },
        )?;

        debug!(domain = %self.config.domain_name, "CDN certificate upload request");

        let mut request = self.http.post(self.url());
        for (name, value) in &headers {
            // reqwest derives Host from the URL
            if name != "host" {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| CdnError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CdnError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &text));
        }

        parse_receipt(&text)
    }
}
