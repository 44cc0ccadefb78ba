use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mxchange - Meal exchange tracking
#[derive(Parser)]
#[command(name = "mxchange")]
#[command(about = "Start and end guest meal exchanges", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate a form submission without starting the server
    Check {
        #[command(subcommand)]
        form: cli::check::Form,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mxchange::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mxchange::observability::init_observability(
        "mxchange",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve::serve(config, host, port).await,
        Commands::Check { form } => cli::check::check(form),
    }
}
