use crate::core::{JsonSource, WidgetRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// `JsonSource` over HTTP. Endpoint paths are resolved against `base_url`;
/// absolute endpoint URLs are used as they are.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn resolve(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn get_json(&self, request: &WidgetRequest) -> Result<Value> {
        let url = self.resolve(&request.endpoint)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).query(&request.query).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
