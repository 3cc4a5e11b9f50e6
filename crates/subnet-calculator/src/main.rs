//! Subnet CIDR Calculator CLI
//!
//! Usage:
//!   subnet-calc partition 10.0.0.0/16 --layers 2 --zones 2
//!   subnet-calc partition 10.0.0.0/16 --layers 3 --zones 3 --format json
//!   subnet-calc serve --port 8080

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use subnet_calculator::{
    start_server, AllocationRequest, ApiServerConfig, AppState, PartitionLimits, Partitioner,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Carve a VPC CIDR block into layered, per-AZ subnets
#[derive(Parser)]
#[command(name = "subnet-calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition a base block and print the layers
    Partition {
        /// Base CIDR block (e.g., 10.0.0.0/16)
        cidr: String,
        /// Number of network layers
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        layers: i64,
        /// Number of availability zones
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        zones: i64,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Run the REST API server
    Serve {
        /// Host to bind to (defaults to API_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to API_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Partition {
            cidr,
            layers,
            zones,
            format,
        } => run_partition(&cidr, layers, zones, format),
        Commands::Serve { host, port } => {
            let mut config = ApiServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            start_server(Arc::new(AppState::new()), config).await?;
            Ok(())
        }
    }
}

fn run_partition(cidr: &str, layers: i64, zones: i64, format: OutputFormat) -> Result<()> {
    let request = AllocationRequest::parse(cidr, layers, zones)?;
    let partitioner = Partitioner::with_limits(PartitionLimits::default());
    let layers = partitioner.calculate(&request)?;

    match format {
        OutputFormat::Plain => {
            for (name, cidrs) in layers.iter() {
                println!("{}: {}", name, cidrs);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&layers)?);
        }
    }

    Ok(())
}
