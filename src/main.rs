use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use aqi_tracker::{
    config::{ConfigLoader, TrackerConfig},
    render::render_frame,
    snapshot::SnapshotWriter,
    web::{self, WebServerConfig},
    CatalogKind, Dashboard,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Simulated AQI dashboard for Indian states and cities")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Lookup table to use (overrides the config file)
    #[arg(long, global = true, value_enum)]
    catalog: Option<CatalogArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List selectable regions and their cities
    Regions,
    /// Print the dashboard for one region
    Report {
        /// Region name, e.g. "Bihar"
        #[arg(long)]
        region: String,

        /// Emit the frame as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write one JSON frame per region
    Export {
        /// Output directory (overrides the config file)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Serve the web dashboard
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CatalogArg {
    StateCapitals,
    Metros,
}

impl From<CatalogArg> for CatalogKind {
    fn from(value: CatalogArg) -> Self {
        match value {
            CatalogArg::StateCapitals => CatalogKind::StateCapitals,
            CatalogArg::Metros => CatalogKind::Metros,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("An error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ConfigLoader::new(".")
            .load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TrackerConfig::default(),
    };
    init_tracing(&config.logging.level);

    let catalog = cli.catalog.map(CatalogKind::from).unwrap_or(config.catalog);
    let dashboard = Dashboard::new(catalog);
    tracing::debug!(%catalog, regions = dashboard.catalog().len(), "catalog ready");

    match cli.command {
        Command::Regions => {
            for entry in dashboard.catalog().entries() {
                println!("{:<20} {}", entry.region, entry.city);
            }
        }
        Command::Report { region, json } => {
            let frame = dashboard.frame(&region)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                print!("{}", render_frame(&frame));
            }
        }
        Command::Export { dir } => {
            let dir = dir.unwrap_or(config.export.dir);
            let writer = SnapshotWriter::new(&dir, catalog);
            let frames = dashboard.frames()?;
            let paths = writer.write_all(&frames)?;
            tracing::info!(count = paths.len(), dir = %writer.dir().display(), "exported frames");
            println!(
                "Exported {} frames to {}",
                paths.len(),
                writer.dir().display()
            );
        }
        Command::Serve { host, port } => {
            let server = WebServerConfig {
                catalog,
                host: host.unwrap_or(config.server.host),
                port: port.unwrap_or(config.server.port),
            };
            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime.block_on(web::run(server))?;
        }
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aqi_tracker={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
