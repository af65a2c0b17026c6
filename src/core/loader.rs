use crate::core::comments::CommentsWidget;
use crate::core::whatsapp::WhatsAppWidget;
use crate::core::{JsonSource, PageContext, Widget};
use crate::domain::page::{Page, Region};
use crate::utils::html::render_failure;

/// Loads both widgets of a page against one JSON source.
pub struct PageLoader<S: JsonSource> {
    source: S,
    context: PageContext,
}

impl<S: JsonSource> PageLoader<S> {
    pub fn new(source: S, context: PageContext) -> Self {
        Self { source, context }
    }

    /// Issues both requests concurrently; each widget settles on its own.
    pub async fn load(&self) -> Page {
        let mut page = Page::new(self.context.number.display(), self.context.post_id.is_some());
        tracing::info!("Loading widgets for {}", page.display_number);

        let (whatsapp, comments) = tokio::join!(
            self.load_widget(&WhatsAppWidget),
            self.load_widget(&CommentsWidget)
        );

        if let Some(html) = whatsapp {
            page.whatsapp.settle(html);
        }
        if let (Some(region), Some(html)) = (page.comments.as_mut(), comments) {
            region.settle(html);
        }
        page
    }

    /// Loads one widget into a fresh region.
    pub async fn load_region<W: Widget>(&self, widget: &W) -> Region {
        let mut region = Region::loading(widget.mount());
        if let Some(html) = self.load_widget(widget).await {
            region.settle(html);
        }
        region
    }

    /// `None` when the widget has nothing to request for this page.
    async fn load_widget<W: Widget>(&self, widget: &W) -> Option<String> {
        let request = widget.request(&self.context)?;
        tracing::debug!(
            "Requesting {} widget from {} {:?}",
            widget.name(),
            request.endpoint,
            request.query
        );

        match self.source.get_json(&request).await {
            Ok(payload) => {
                tracing::info!("{} widget loaded", widget.name());
                Some(widget.render(payload))
            }
            Err(e) => {
                tracing::warn!("{} widget failed: {}", widget.name(), e);
                Some(render_failure(Some(&e.to_string())))
            }
        }
    }
}
