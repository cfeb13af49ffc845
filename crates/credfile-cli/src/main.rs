use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    check::handle_check_command, secrets::handle_secrets_command, show::handle_show_command,
};

#[derive(Parser)]
#[command(name = "credfile")]
#[command(about = "Inspect and validate project signing credentials", long_about = None)]
struct Cli {
    /// Project directory containing credentials.json
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate credentials.json and the files it references
    Check {
        /// Skip the external keystore validation step
        #[arg(long)]
        skip_keystore_check: bool,
    },

    /// Print the credentials document with secrets masked
    Show,

    /// List secret environment values contributed by credentials.json
    Secrets,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            skip_keystore_check,
        } => handle_check_command(&cli.project_dir, skip_keystore_check).await,
        Commands::Show => handle_show_command(&cli.project_dir).await,
        Commands::Secrets => handle_secrets_command(&cli.project_dir).await,
    }
}
