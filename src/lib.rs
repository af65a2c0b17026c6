pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::PageOutput, CliConfig};

pub use adapters::http::HttpSource;
pub use config::WidgetsConfig;
pub use core::{comments::CommentsWidget, loader::PageLoader, whatsapp::WhatsAppWidget};
pub use domain::model::{Endpoints, PageContext, PhoneNumber};
pub use domain::page::{Page, Region};
pub use utils::error::{Result, WidgetError};
