use crate::domain::model::PageContext;
use crate::domain::page::Mount;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One GET request a widget wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRequest {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
}

#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetches and parses the JSON body. The HTTP status is not inspected:
    /// error payloads are part of the widget contract.
    async fn get_json(&self, request: &WidgetRequest) -> Result<Value>;
}

pub trait Widget: Send + Sync {
    fn name(&self) -> &'static str;

    fn mount(&self) -> Mount;

    /// `None` when the page gives this widget nothing to load.
    fn request(&self, context: &PageContext) -> Option<WidgetRequest>;

    fn render(&self, payload: Value) -> String;
}
