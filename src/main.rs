use clap::Parser;
use lookup_widgets::utils::{logger, validation::Validate};
use lookup_widgets::{CliConfig, HttpSource, PageLoader, PageOutput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lookup-widgets");
    tracing::debug!("Resolved config: {:?}", config);

    let context = match config.validate().and_then(|_| config.page_context()) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let source = HttpSource::new(&config.endpoints.base_url)?;
    let loader = PageLoader::new(source, context);
    let page = loader.load().await;

    if let Err(e) = PageOutput::new(cli.output.clone()).write(&page.to_html()) {
        tracing::error!("❌ Writing the page failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
    if let Some(path) = &cli.output {
        tracing::info!("📁 Page saved to: {}", path);
    }

    Ok(())
}
