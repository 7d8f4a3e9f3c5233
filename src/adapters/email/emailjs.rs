use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::VerificationEmailSender,
};

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Sends verification codes through an EmailJS template.
///
/// The template receives `to_email`, `to_name` and `verification_code`.
#[derive(Clone)]
pub struct EmailJsSender {
    client: Client,
    send_url: Url,
    service_id: String,
    template_id: String,
    public_key: String,
    private_key: SecretString,
}

impl EmailJsSender {
    pub fn new(
        client: Client,
        api_url: &Url,
        service_id: String,
        template_id: String,
        public_key: String,
        private_key: SecretString,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            send_url: api_url.join(SEND_PATH)?,
            service_id,
            template_id,
            public_key,
            private_key,
        })
    }
}

#[derive(Serialize)]
struct EmailJsReq<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken")]
    access_token: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    to_name: &'a str,
    verification_code: &'a str,
}

#[async_trait]
impl VerificationEmailSender for EmailJsSender {
    async fn send_verification_code(
        &self,
        to_name: &str,
        to_email: &str,
        verification_code: &str,
    ) -> AppResult<()> {
        let body = EmailJsReq {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            access_token: self.private_key.expose_secret(),
            template_params: TemplateParams {
                to_email,
                to_name,
                verification_code,
            },
        };

        let response = self
            .client
            .post(self.send_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(format!("Failed to send email: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::EmailDelivery(format!(
                "Email API returned {status}: {detail}"
            )));
        }

        Ok(())
    }
}
