//! Markup helpers shared by both widgets.

use serde_json::Value;
use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

pub const FAILURE_MESSAGE: &str = "Erro ao carregar";
pub const DETAIL_TOGGLE_LABEL: &str = "Show details";

static NEXT_DETAIL_ID: AtomicU64 = AtomicU64::new(1);

/// Escapes `&`, `<`, `>` and `"` for interpolation into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes an untrusted JSON value. Falsy values become the empty string.
pub fn escape_value(value: Option<&Value>) -> String {
    escape_html(&text_of(value))
}

/// JavaScript-style truthiness of an optional JSON value.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(_) => true,
    }
}

/// Coerces a JSON value to display text the way JavaScript's `String()`
/// does, except that falsy values become the empty string.
pub fn text_of(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        _ if !is_truthy(value) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(js_string(other)),
        None => Cow::Borrowed(""),
    }
}

fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        // integral floats print without a fraction, like `String(1.0)`
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        // array elements that are null join as empty strings
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Generic failure message with an optional, collapsible technical detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    detail: Option<String>,
    element_id: String,
    expanded: bool,
}

impl FailureNotice {
    pub fn new(detail: Option<&str>) -> Self {
        let id = NEXT_DETAIL_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            detail: detail.filter(|d| !d.is_empty()).map(str::to_string),
            element_id: format!("err-detail-{}", id),
            expanded: false,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Same effect as clicking the toggle link in the browser.
    pub fn toggle(&mut self) {
        if self.detail.is_some() {
            self.expanded = !self.expanded;
        }
    }

    pub fn render(&self) -> String {
        let mut html = format!(r#"<span class="error-msg">{}</span>"#, FAILURE_MESSAGE);
        if let Some(detail) = &self.detail {
            let class = if self.expanded {
                "error-detail"
            } else {
                "error-detail hidden"
            };
            html += &format!(
                r##" <a href="#" class="error-toggle" onclick="document.getElementById('{id}').classList.toggle('hidden');return false;">{label}</a>"##,
                id = self.element_id,
                label = DETAIL_TOGGLE_LABEL,
            );
            html += &format!(
                r#"<span id="{}" class="{}">{}</span>"#,
                self.element_id,
                class,
                escape_html(detail)
            );
        }
        html
    }
}

pub fn render_failure(detail: Option<&str>) -> String {
    FailureNotice::new(detail).render()
}
