#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::WidgetsConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lookup-widgets")]
#[command(about = "Render the WhatsApp and comments widgets for a phone number page")]
pub struct CliConfig {
    /// Phone number to look up (spaces, `+` and `-` are ignored)
    #[arg(short, long)]
    pub number: Option<String>,

    /// Content identifier whose comments are listed
    #[arg(long)]
    pub post_id: Option<String>,

    /// Base URL relative endpoints are resolved against
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub whatsapp_endpoint: Option<String>,

    #[arg(long)]
    pub comments_endpoint: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the rendered page here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file, if any, and applies the flags on top.
    pub fn resolve(&self) -> Result<WidgetsConfig> {
        let mut config = match &self.config {
            Some(path) => WidgetsConfig::from_file(path)?,
            None => WidgetsConfig::default(),
        };

        if let Some(number) = &self.number {
            config.page.number = Some(number.clone());
        }
        if let Some(post_id) = &self.post_id {
            config.page.post_id = Some(post_id.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.endpoints.base_url = base_url.clone();
        }
        if let Some(endpoint) = &self.whatsapp_endpoint {
            config.endpoints.whatsapp = endpoint.clone();
        }
        if let Some(endpoint) = &self.comments_endpoint {
            config.endpoints.comments = endpoint.clone();
        }
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[page]\nnumber = \"912345678\"\npost_id = \"1\"\n\n[endpoints]\nbase_url = \"https://file.example.pt\""
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "lookup-widgets",
            "--config",
            file.path().to_str().unwrap(),
            "--post-id",
            "2",
            "--whatsapp-endpoint",
            "/wa",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.page.number.as_deref(), Some("912345678"));
        assert_eq!(config.page.post_id.as_deref(), Some("2"));
        assert_eq!(config.endpoints.base_url, "https://file.example.pt");
        assert_eq!(config.endpoints.whatsapp, "/wa");
        assert_eq!(config.endpoints.comments, "/api/comments");
    }

    #[test]
    fn test_flags_without_file() {
        let cli = CliConfig::parse_from(["lookup-widgets", "-n", "+351 912 345 678"]);
        let config = cli.resolve().unwrap();
        let ctx = config.page_context().unwrap();
        assert_eq!(ctx.number.full, "351912345678");
        assert!(ctx.post_id.is_none());
    }
}
