use anyhow::Context;
use clap::Parser;
use listing_etl::core::ConfigProvider;
use listing_etl::utils::{logger, validation::Validate};
use listing_etl::{EtlEngine, ListingPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Listing scraper driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "listing-etl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the page limit from config
    #[arg(long)]
    max_pages: Option<u32>,

    /// Show what would be fetched and written without making requests
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based listing ETL");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    // 應用命令列覆蓋設定
    if let Some(max_pages) = args.max_pages {
        config.source.max_pages = Some(max_pages);
        tracing::info!("🔧 Page limit overridden to: {}", max_pages);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        perform_dry_run(&config)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = ListingPipeline::from_config(LocalStorage::default(), &config)
        .context("failed to set up pipeline")?;
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Excel file saved successfully: {}", output_path);
            println!("✅ Excel file saved successfully: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Pipeline: {}", config.pipeline.name);
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }
    println!("  Source: {}", config.base_url());
    println!("  Output: {} (sheet '{}')", config.output_path(), config.sheet_name());
    println!("  Timeout: {:?}", config.request_timeout());
    if let Some(max_pages) = config.max_pages() {
        println!("  Max Pages: {}", max_pages);
    }
    println!();
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Pages:");
    for page in 1..=3 {
        let url = listing_etl::adapters::http::page_url(config.base_url(), page, config.page_param())?;
        println!("  {} -> {}", page, url);
    }
    println!("  ... until a page yields no entries");

    let selectors = config.card_selectors();
    listing_etl::CardExtractor::new(&selectors).context("invalid card selectors")?;
    println!();
    println!("🔄 Selectors:");
    println!("  card: {}", selectors.card);
    println!("  price: {}", selectors.price);
    println!("  description: {}", selectors.description);

    println!();
    println!("✅ Dry run analysis complete.");
    Ok(())
}
