use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadmap_cli::commands::route::{handle_route_command, AlgorithmArg, RouteCommandArgs};
use roadmap_cli::output::OutputFormat;
use roadmap_lib::{DatasetOverrides, WaypointId};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest routes over a key point road map",
    long_about = "Builds the road graph from the key point and road files and, when a source \
                  and destination are given, prints the shortest route between them."
)]
struct Cli {
    /// Source waypoint identifier.
    #[arg(requires = "destination", allow_negative_numbers = true)]
    source: Option<WaypointId>,

    /// Destination waypoint identifier.
    #[arg(allow_negative_numbers = true)]
    destination: Option<WaypointId>,

    /// Key point file (overrides ROADMAP_KEY_POINTS).
    #[arg(long)]
    key_points: Option<PathBuf>,

    /// Road file (overrides ROADMAP_ROADS).
    #[arg(long)]
    roads: Option<PathBuf>,

    /// Directory holding keyPoints.txt and roads.txt (overrides ROADMAP_DATA_DIR).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Search algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    algorithm: AlgorithmArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    fn into_route_args(self) -> RouteCommandArgs {
        RouteCommandArgs {
            dataset: DatasetOverrides {
                key_points: self.key_points,
                roads: self.roads,
                data_dir: self.data_dir,
            },
            endpoints: self.source.zip(self.destination),
            algorithm: self.algorithm,
            format: self.format,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(rendered) = handle_route_command(&cli.into_route_args())? {
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
