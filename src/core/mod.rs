pub mod comments;
pub mod loader;
pub mod whatsapp;

pub use crate::domain::model::{CommentsResponse, Endpoints, PageContext, WhatsAppLookup};
pub use crate::domain::page::Mount;
pub use crate::domain::ports::{JsonSource, Widget, WidgetRequest};
pub use crate::utils::error::Result;
