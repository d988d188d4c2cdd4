use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use helm_autoupdate::config::{AutoUpdateConfig, DEFAULT_CONFIG_FILE};
use helm_autoupdate::parser::DirectoryScanner;
use helm_autoupdate::update::{apply_updates_to_files, collect_changes, write_changes_to_filesystem};
use helm_autoupdate::version::{CachedSource, DirectSource, ProviderRegistry};

#[derive(Parser)]
#[command(name = "helm-autoupdate")]
#[command(version, about = "Update Helm chart versions marked with # helm:autoupdate:<identity>")]
struct Cli {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Config file (default: <dir>/.helm-autoupdate.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resolve and report updates without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| cli.dir.join(DEFAULT_CONFIG_FILE));
    let config = AutoUpdateConfig::load_file(&config_path)
        .with_context(|| format!("Unable to load {}", config_path.display()))?;

    let files = DirectoryScanner::new(&cli.dir)
        .find_requested_changes(&config.parsed_regex)
        .context("Unable to find requested changes")?;

    let providers = ProviderRegistry::with_defaults().context("Unable to set up providers")?;
    let cache = CachedSource::new(DirectSource::new(providers));
    let updated = apply_updates_to_files(&cache, &config, files)
        .await
        .context("Unable to apply updates to files")?;

    let changes = collect_changes(&updated);
    match cli.format {
        Format::Text => {
            for change in &changes {
                println!("{}", change);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
    }

    if cli.dry_run {
        info!("Dry run: {} file(s) left unchanged", updated.len());
        return Ok(());
    }

    write_changes_to_filesystem(&updated).context("Unable to write changes to filesystem")?;
    info!("Updated {} file(s)", updated.len());
    Ok(())
}
