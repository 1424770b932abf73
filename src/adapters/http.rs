use crate::domain::model::FormPayload;
use crate::domain::ports::FormRelay;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::Client;
use url::Url;

/// Posts form payloads as `multipart/form-data`, the way a browser submits a
/// `FormData` body.
#[derive(Debug, Clone, Default)]
pub struct HttpRelay {
    client: Client,
}

impl HttpRelay {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn multipart(payload: &FormPayload) -> Form {
        payload.iter().fold(Form::new(), |form, (name, value)| {
            form.text(name.to_string(), value.to_string())
        })
    }
}

#[async_trait]
impl FormRelay for HttpRelay {
    async fn post_form(&self, endpoint: &Url, payload: &FormPayload) -> Result<()> {
        tracing::debug!(
            "Posting {} fields to form relay: {}",
            payload.len(),
            endpoint
        );

        let response = self
            .client
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(Self::multipart(payload))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Form relay response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(SiteError::RelayStatusError {
                status: status.as_u16(),
            })
        }
    }
}
