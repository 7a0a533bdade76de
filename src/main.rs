use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ghostvault::cli::{
    handle_burn, handle_clear, handle_config, handle_generate, handle_open, handle_seal,
    handle_status, OpenArgs, SealArgs, Toggle,
};
use ghostvault::config::{GhostVaultPaths, Settings};

#[derive(Parser)]
#[command(
    name = "ghostvault",
    version,
    about = "Burn-after-reading note locker",
    long_about = "GhostVault seals a single note with a passphrase (PBKDF2-SHA256 + \
                  AES-256-GCM) and keeps it in local storage. By default the note \
                  is destroyed the first time it is opened."
)]
struct Cli {
    /// Enable debug logging (overridden by GHOSTVAULT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a note and store it in the vault
    #[command(alias = "encrypt")]
    Seal(SealArgs),

    /// Decrypt the stored note
    #[command(alias = "decrypt")]
    Open(OpenArgs),

    /// Destroy the stored note without reading it
    Clear,

    /// Show whether the vault holds a note
    Status,

    /// Print a random passphrase
    Generate {
        /// Number of characters
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Turn burn-after-reading on or off
    Burn {
        #[arg(value_enum)]
        toggle: Toggle,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "ghostvault=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GHOSTVAULT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = GhostVaultPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Seal(args)) => handle_seal(&paths, &settings, args).await?,
        Some(Commands::Open(args)) => handle_open(&paths, &settings, args).await?,
        Some(Commands::Clear) => handle_clear(&paths)?,
        Some(Commands::Status) => handle_status(&paths, &settings)?,
        Some(Commands::Generate { length }) => handle_generate(&settings, length)?,
        Some(Commands::Burn { toggle }) => handle_burn(&paths, &mut settings, toggle)?,
        Some(Commands::Config) => handle_config(&paths, &settings)?,
        None => {
            println!("GhostVault - burn-after-reading note locker");
            println!();
            println!("Run 'ghostvault --help' for usage information.");
        }
    }

    Ok(())
}
