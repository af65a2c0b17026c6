use crate::core::{Mount, PageContext, Widget, WidgetRequest, WhatsAppLookup};
use crate::domain::page::WHATSAPP_MOUNT;
use crate::utils::html::{escape_html, render_failure};
use serde_json::Value;

pub const REGISTERED_LABEL: &str = "Registado";
pub const NOT_REGISTERED_LABEL: &str = "Não registado";

#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppWidget;

impl WhatsAppWidget {
    pub fn render_lookup(&self, lookup: &WhatsAppLookup) -> String {
        if lookup.is_error() {
            return render_failure(lookup.detail().as_deref());
        }

        let registered = lookup.is_registered();
        let (status_class, status_text) = if registered {
            ("wa-registered", REGISTERED_LABEL)
        } else {
            ("wa-not-registered", NOT_REGISTERED_LABEL)
        };

        let mut html = String::from(r#"<div class="wa-row">"#);
        if let (true, Some(url)) = (registered, lookup.photo_url()) {
            // a broken photo drops out of the row instead of showing a placeholder
            html += &format!(
                r#"<img class="wa-photo" src="{}" alt="Foto WhatsApp" onerror="this.remove()">"#,
                escape_html(url)
            );
        }
        html += &format!(
            r#"<span class="wa-status {}">{}</span>"#,
            status_class, status_text
        );
        html += "</div>";
        html
    }
}

impl Widget for WhatsAppWidget {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    fn mount(&self) -> Mount {
        WHATSAPP_MOUNT
    }

    fn request(&self, context: &PageContext) -> Option<WidgetRequest> {
        Some(WidgetRequest {
            endpoint: context.endpoints.whatsapp.clone(),
            query: vec![("number".to_string(), context.number.full.clone())],
        })
    }

    fn render(&self, payload: Value) -> String {
        self.render_lookup(&WhatsAppLookup::from_value(payload))
    }
}
