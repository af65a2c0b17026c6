use crate::utils::html::{is_truthy, text_of};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_WHATSAPP_ENDPOINT: &str = "/api/whatsapp";
pub const DEFAULT_COMMENTS_ENDPOINT: &str = "/api/comments";

const PT_PREFIX: &str = "351";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub full: String,
    pub local: String,
    pub is_pt: bool,
}

impl PhoneNumber {
    /// Strips spaces, `+` and `-`, then recognises Portuguese numbers with or
    /// without the country prefix.
    pub fn normalize(raw: &str) -> Self {
        static SEPARATORS: OnceLock<Regex> = OnceLock::new();
        let re = SEPARATORS.get_or_init(|| Regex::new(r"[\s+\-]").expect("valid regex"));
        let cleaned = re.replace_all(raw, "").into_owned();

        let digits = cleaned.chars().count();
        if cleaned.starts_with(PT_PREFIX) && digits == 12 {
            return Self {
                local: cleaned[PT_PREFIX.len()..].to_string(),
                full: cleaned,
                is_pt: true,
            };
        }
        if digits == 9 {
            return Self {
                full: format!("{}{}", PT_PREFIX, cleaned),
                local: cleaned,
                is_pt: true,
            };
        }
        Self {
            full: cleaned.clone(),
            local: cleaned,
            is_pt: false,
        }
    }

    /// `+351 912 345 678` for Portuguese numbers, `+<digits>` otherwise.
    pub fn display(&self) -> String {
        if !self.is_pt {
            return format!("+{}", self.full);
        }
        let chars: Vec<char> = self.full.chars().collect();
        let group = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
        format!(
            "+{} {} {} {}",
            group(0..3),
            group(3..6),
            group(6..9),
            group(9..chars.len())
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub whatsapp: String,
    pub comments: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            whatsapp: DEFAULT_WHATSAPP_ENDPOINT.to_string(),
            comments: DEFAULT_COMMENTS_ENDPOINT.to_string(),
        }
    }
}

/// Values the host page provides once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub number: PhoneNumber,
    pub post_id: Option<String>,
    pub endpoints: Endpoints,
}

impl PageContext {
    pub fn new(raw_number: &str, post_id: Option<String>, endpoints: Endpoints) -> Self {
        Self {
            number: PhoneNumber::normalize(raw_number),
            post_id: post_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            endpoints,
        }
    }
}

/// Body of the WhatsApp status endpoint. Fields are kept as raw JSON since
/// the backend is free to send any shape for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhatsAppLookup {
    #[serde(default)]
    pub registered: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl WhatsAppLookup {
    /// Anything that isn't a JSON object, arrays included, reads as an empty
    /// lookup.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn is_error(&self) -> bool {
        is_truthy(self.error.as_ref())
    }

    pub fn is_registered(&self) -> bool {
        matches!(&self.registered, Some(Value::String(s)) if s.eq_ignore_ascii_case("yes"))
    }

    pub fn photo_url(&self) -> Option<&str> {
        match &self.url {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<String> {
        let text = text_of(self.detail.as_ref());
        (!text.is_empty()).then(|| text.into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub author: String,
    pub date: String,
    pub text: String,
}

impl Comment {
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| text_of(value.get(name)).into_owned();
        Self {
            author: field("author"),
            date: field("date"),
            text: field("text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentsResponse {
    Failed { detail: Option<String> },
    Empty,
    Listed(Vec<Comment>),
}

impl CommentsResponse {
    pub fn from_value(value: &Value) -> Self {
        if is_truthy(value.get("error")) {
            let detail = text_of(value.get("detail"));
            return CommentsResponse::Failed {
                detail: (!detail.is_empty()).then(|| detail.into_owned()),
            };
        }
        match value {
            Value::Array(items) if !items.is_empty() => {
                CommentsResponse::Listed(items.iter().map(Comment::from_value).collect())
            }
            _ => CommentsResponse::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_portuguese_numbers() {
        let local = PhoneNumber::normalize("912 345 678");
        assert_eq!(local.full, "351912345678");
        assert_eq!(local.local, "912345678");
        assert!(local.is_pt);

        let prefixed = PhoneNumber::normalize("+351 912-345-678");
        assert_eq!(prefixed, local);
        assert_eq!(prefixed.display(), "+351 912 345 678");
    }

    #[test]
    fn test_normalize_foreign_number() {
        let n = PhoneNumber::normalize("+44 20 7946 0958");
        assert_eq!(n.full, "442079460958");
        assert!(!n.is_pt);
        assert_eq!(n.display(), "+442079460958");
    }

    #[test]
    fn test_page_context_drops_blank_post_id() {
        let ctx = PageContext::new("912345678", Some("  ".to_string()), Endpoints::default());
        assert_eq!(ctx.post_id, None);

        let ctx = PageContext::new("912345678", Some(" 42 ".to_string()), Endpoints::default());
        assert_eq!(ctx.post_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_registered_is_case_insensitive() {
        let yes = WhatsAppLookup::from_value(json!({"registered": "YES"}));
        assert!(yes.is_registered());

        let no = WhatsAppLookup::from_value(json!({"registered": "no"}));
        assert!(!no.is_registered());

        let odd = WhatsAppLookup::from_value(json!({"registered": true}));
        assert!(!odd.is_registered());

        let missing = WhatsAppLookup::from_value(json!([]));
        assert!(!missing.is_registered());
        assert!(!missing.is_error());
    }

    #[test]
    fn test_comments_response_classification() {
        assert_eq!(CommentsResponse::from_value(&json!([])), CommentsResponse::Empty);
        assert_eq!(CommentsResponse::from_value(&json!({"foo": 1})), CommentsResponse::Empty);
        assert_eq!(CommentsResponse::from_value(&json!("text")), CommentsResponse::Empty);
        assert_eq!(
            CommentsResponse::from_value(&json!({"error": "Erro ao carregar", "detail": "502"})),
            CommentsResponse::Failed {
                detail: Some("502".to_string())
            }
        );

        match CommentsResponse::from_value(&json!([{"author": "Ana", "text": "ok"}])) {
            CommentsResponse::Listed(comments) => {
                assert_eq!(comments.len(), 1);
                assert_eq!(comments[0].author, "Ana");
                assert_eq!(comments[0].date, "");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_array_payload_is_not_a_lookup() {
        let positional = WhatsAppLookup::from_value(json!(["yes", "http://x/p.jpg"]));
        assert!(!positional.is_registered());
        assert!(positional.photo_url().is_none());

        let flagged = WhatsAppLookup::from_value(json!([null, null, true]));
        assert!(!flagged.is_error());
    }

    #[test]
    fn test_normalize_counts_characters() {
        // 9 characters, 10 bytes
        let n = PhoneNumber::normalize("91234567é");
        assert!(n.is_pt);
        assert_eq!(n.full, "35191234567é");
        assert_eq!(n.display(), "+351 912 345 67é");
    }

    #[test]
    fn test_comment_date_is_kept_verbatim() {
        let c = Comment::from_value(&json!({"author": "A", "date": "2024-1-2", "text": ""}));
        assert_eq!(c.date, "2024-1-2");
    }
}
