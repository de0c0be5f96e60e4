use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use spiralwick_pins::pinterest::publisher::encode_jpeg;
use spiralwick_pins::{Config, Pipeline};

#[derive(Parser, Debug)]
#[command(name = "spiralwick-pins", about = "Generate and publish Spiralwick product pins", version)]
struct Cli {
    /// Override DAILY_PINS
    #[arg(global = true, long)]
    pins: Option<usize>,

    /// Force dry-run mode regardless of DRY_RUN
    #[arg(global = true, long)]
    dry_run: bool,

    /// Seed product/scene selection for a reproducible run
    #[arg(global = true, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate and publish the configured number of pins (default)
    Run,
    /// Build one pin locally and write the image instead of publishing
    Preview {
        /// Where to write the watermarked JPEG
        #[arg(long, value_name = "PATH", default_value = "pin-preview.jpg")]
        out: PathBuf,
    },
    /// Print the configuration summary with secrets masked
    Env,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env may carry RUST_LOG, so it has to be loaded before the filter is built.
    Config::dotenv_load();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(pins) = cli.pins {
        config = config.with_pins_per_run(pins);
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            config.log_summary();
            let pipeline = Pipeline::new(&config);
            if let Err(e) = pipeline.run(config.pins_per_run, &mut rng).await {
                tracing::error!("Run aborted: {}", e);
                return Err(e.into());
            }
        }
        Commands::Preview { out } => {
            config.log_summary();
            let pipeline = Pipeline::new(&config);
            let pin = pipeline.prepare(&mut rng).await?;
            tokio::fs::write(&out, encode_jpeg(&pin.image)?).await?;
            let summary = json!({
                "product": pin.product.name,
                "scene": pin.scene,
                "title": pin.metadata.title,
                "description": pin.metadata.description,
                "alt": pin.metadata.alt,
                "link": pin.link,
                "image": out.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Env => {
            for (key, value) in config.summary() {
                println!("{}: {}", key, value);
            }
        }
    }
    Ok(())
}
