use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use enquiry::commands::{fill::FillArgs, submit::SubmitArgs};
use enquiry_utils::enquiry_version;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = enquiry_config::load(cli.config.as_slice()).context("Failed to load config")?;

    match cli.command {
        Command::Submit(args) => args.invoke(config).await?,
        Command::Fill(args) => args.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = enquiry_version())]
struct Cli {
    /// Configuration files, later files override earlier ones
    #[arg(
        long = "config",
        env = "ENQUIRY_CONFIG",
        default_value = "config.toml",
        value_delimiter = ':'
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a single contact request from command line arguments
    #[command(aliases(["s"]))]
    Submit(SubmitArgs),
    /// Fill in the contact form interactively
    #[command(aliases(["f"]))]
    Fill(FillArgs),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
