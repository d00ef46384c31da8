// src/main.rs — praktikum entry point

use clap::Parser;

use praktikum::cli::{Cli, Commands};
use praktikum::demos::DemoRegistry;
use praktikum::infra::config::Config;
use praktikum::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG); diagnostics go to stderr so
    // stdout stays byte-stable for demo output.
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    let registry = DemoRegistry::with_builtins(&config);

    if let Some(Commands::List { format }) = &cli.command {
        return praktikum::cli::list::run_list(&registry, format);
    }

    // Which demos to run: --all > -i picker > named demos > configured default
    let ids = if cli.all {
        registry.ids()
    } else if cli.interactive {
        vec![select_demo_interactive(&registry)?]
    } else if !cli.demos.is_empty() {
        cli.demos.clone()
    } else {
        vec![config.run.default.clone()]
    };

    let mut stdout = std::io::stdout();
    praktikum::cli::run::run_demos(&registry, &ids, &mut stdout).await?;
    Ok(())
}

/// Interactive demo selection via `inquire::Select`.
fn select_demo_interactive(registry: &DemoRegistry) -> anyhow::Result<String> {
    let catalog = registry.list();
    let display_list: Vec<String> = catalog
        .iter()
        .map(|info| format!("{:<12} {}", info.id, info.summary))
        .collect();

    let choice = inquire::Select::new("Select a demo:", display_list.clone())
        .with_help_message("Use arrow keys to browse, type to filter")
        .prompt()
        .map_err(|_| anyhow::anyhow!("Demo selection cancelled"))?;

    let idx = display_list.iter().position(|d| d == &choice).unwrap_or(0);
    Ok(catalog[idx].id.to_string())
}
