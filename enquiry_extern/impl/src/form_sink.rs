use std::sync::Arc;

use enquiry_extern_contracts::form_sink::{FormPayload, FormSinkApiService, FormSinkTransportError};
use reqwest::multipart::Form;
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct FormSinkApiServiceImpl {
    config: FormSinkApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct FormSinkApiServiceConfig {
    pub endpoint: Arc<Url>,
}

impl FormSinkApiServiceImpl {
    pub fn new(config: FormSinkApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

impl FormSinkApiService for FormSinkApiServiceImpl {
    #[instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    async fn submit(&self, payload: FormPayload) -> Result<(), FormSinkTransportError> {
        let form = payload
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value));

        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .multipart(form)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        // The hosted form answers with an opaque page; only the transmission
        // itself matters.
        debug!(status = %response.status(), "form submission transmitted");

        Ok(())
    }
}
