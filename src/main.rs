//! Boletín CLI
//!
//! Command-line interface for the daily digest:
//! - Render the static page
//! - Run the preview server
//! - Print statistics and filter groups
//! - Generate a config file

use anyhow::{bail, Context};
use boletin::api::{serve, AppState};
use boletin::config::{generate_default_config, Config, LoggingConfig};
use boletin::dashboard::Dashboard;
use boletin::date::offset_from_hours;
use boletin::source::{load_feed, load_page, FeedSource, FileFeedSource, HttpFeedSource};
use boletin::stats::StatsPanel;
use boletin::taxonomy::group_filters;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "boletin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Daily digest of the Boletín Oficial")]
#[command(long_about = "Fetches the daily Boletín Oficial feed and renders it as a filterable page with a statistics dashboard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Where to read the feed from; the configured URL when neither is given
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Feed URL
    #[arg(long, conflicts_with = "feed_file")]
    pub feed_url: Option<String>,

    /// Local feed JSON file
    #[arg(long)]
    pub feed_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the static page
    Render {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file (default: site.output, then stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the preview server
    Serve {
        #[command(flatten)]
        source: SourceArgs,
        /// Host to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the day's statistics
    Stats {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the filter buttons grouped by category
    Tags {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Render { source, output } => {
            let feed_source = build_source(&source, &config)?;
            let offset = offset_from_hours(config.feed.utc_offset_hours);
            let page = load_page(feed_source.as_ref(), &config.site.title, offset).await;

            match output.or_else(|| config.site.output.clone()) {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &page.html)
                        .with_context(|| format!("writing {:?}", path))?;
                    tracing::info!("Page written to {:?}", path);
                }
                None => print!("{}", page.html),
            }

            if page.failed {
                bail!("the feed could not be loaded; the error page was rendered");
            }
        }

        Commands::Serve { source, host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let feed_source = build_source(&source, &config)?;
            tracing::info!("Boletín v{} serving {}", env!("CARGO_PKG_VERSION"), feed_source.describe());
            serve(AppState::new(feed_source, &config)).await?;
        }

        Commands::Stats { source, format } => {
            let feed_source = build_source(&source, &config)?;
            let feed = load_feed(feed_source.as_ref()).await?;
            let panel = StatsPanel::from_stats(&feed.estadisticas);
            let dashboard = Dashboard::build(&feed.estadisticas);

            match format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "fecha": feed.fecha(),
                        "panel": panel,
                        "dashboard": dashboard,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Table => {
                    println!("Fecha:            {}", feed.fecha().unwrap_or("-"));
                    println!("Total normas:     {}", panel.total_normas);
                    println!(
                        "Con anexos:       {} ({}%)",
                        dashboard.gauge.con_anexos, dashboard.gauge.percent
                    );
                    println!(
                        "Etiquetas únicas: {}",
                        feed.estadisticas.total_etiquetas_unicas
                    );
                    println!();
                    println!("{:<36} {:>6} {:>7}", "Tipo", "Normas", "Barra");
                    println!("{}", "-".repeat(51));
                    for row in &panel.rows {
                        println!(
                            "{:<36} {:>6} {:>6.0}%",
                            row.label, row.count, row.width_percent
                        );
                    }
                }
            }
        }

        Commands::Tags { source } => {
            let feed_source = build_source(&source, &config)?;
            let feed = load_feed(feed_source.as_ref()).await?;
            let groups = group_filters(&feed.estadisticas.desglose_etiquetas);

            if groups.is_empty() {
                println!("No tags in today's feed.");
            }
            for group in groups {
                println!("{} ({})", group.name, group.total);
                for button in &group.buttons {
                    println!("  {:<40} {:<40} {}", button.label, button.token, button.count);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber; logs go to stderr so rendered HTML can use stdout
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("boletin={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_source(args: &SourceArgs, config: &Config) -> anyhow::Result<Arc<dyn FeedSource>> {
    if let Some(path) = &args.feed_file {
        return Ok(Arc::new(FileFeedSource::new(path)));
    }

    let url = args.feed_url.as_deref().unwrap_or(&config.feed.url);
    let source = HttpFeedSource::new(url, Duration::from_secs(config.feed.timeout_secs))?;
    Ok(Arc::new(source))
}
