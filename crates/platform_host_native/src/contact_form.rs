//! Form-endpoint contact channel with mail-client fallback.

use std::time::Duration;

use platform_host::{mailto_url, ContactChannel, ContactDelivery, ContactFuture, ContactPayload};
use tracing::{info, warn};

/// Contact channel that POSTs JSON to a form endpoint.
///
/// Without an endpoint, or when the endpoint fails, the message is handed to the mail client
/// through a prefilled `mailto:` link instead. Submission itself never fails.
#[derive(Debug, Clone)]
pub struct FormPostContactChannel {
    client: reqwest::Client,
    endpoint: Option<String>,
    recipient: String,
}

impl FormPostContactChannel {
    /// Creates a channel posting to `endpoint` and falling back to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns the client construction error from `reqwest`.
    pub fn new(
        endpoint: Option<String>,
        recipient: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            recipient: recipient.into(),
        })
    }

    /// Fallback delivery for `payload`.
    pub fn mail_client(&self, payload: &ContactPayload, name_label: &str) -> ContactDelivery {
        ContactDelivery::MailClient {
            url: mailto_url(&self.recipient, payload, name_label),
        }
    }

    async fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), String> {
        let response = self
            .client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|err| err.to_string())?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("HTTP {status}"))
        }
    }
}

impl ContactChannel for FormPostContactChannel {
    fn submit<'a>(
        &'a self,
        payload: &'a ContactPayload,
        name_label: &'a str,
    ) -> ContactFuture<'a, Result<ContactDelivery, String>> {
        Box::pin(async move {
            let Some(endpoint) = self.endpoint.as_deref() else {
                return Ok(self.mail_client(payload, name_label));
            };
            match self.post(endpoint, payload).await {
                Ok(()) => {
                    info!(endpoint, "contact message delivered");
                    Ok(ContactDelivery::Delivered)
                }
                Err(err) => {
                    warn!(endpoint, error = %err, "contact endpoint failed; using mail client");
                    Ok(self.mail_client(payload, name_label))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Oi".to_string(),
        }
    }

    #[test]
    fn blank_endpoint_falls_back_to_mail_client() {
        let channel = FormPostContactChannel::new(
            Some("   ".to_string()),
            "owner@example.com",
            Duration::from_secs(5),
        )
        .expect("client");

        match block_on(channel.submit(&payload(), "Nome")).expect("submit") {
            ContactDelivery::MailClient { url } => {
                assert!(url.starts_with("mailto:owner@example.com?subject="));
                assert!(url.contains("Nome%3A%20Ana"));
            }
            other => panic!("unexpected delivery: {other:?}"),
        }
    }
}
