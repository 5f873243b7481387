use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fragseal::cli::{
    handle_config_command, handle_demo_command, handle_history_command, handle_open_command,
    handle_seal_command, CliContext, ConfigArgs, DemoArgs, OpenArgs, SealArgs,
};
use fragseal::config::SealPaths;

#[derive(Parser)]
#[command(
    name = "fragseal",
    author = "Kaylee Beyene",
    version,
    about = "Password-sealed text tokens that travel in URL fragments",
    long_about = "fragseal seals a short text under a password into a single \
                  base64 token. Put the token in the fragment of a link and \
                  only someone with the password can read it; the fragment \
                  never reaches the server."
)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal text into a token or share link
    #[command(alias = "encrypt")]
    Seal(SealArgs),

    /// Open a token or share link
    #[command(alias = "decrypt")]
    Open(OpenArgs),

    /// Seal and reopen a sample JSON record
    Demo(DemoArgs),

    /// Show recent seal/open operations
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("fragseal={}", log_level).parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let paths = SealPaths::new()?;
    let ctx = CliContext::load(paths)?;

    match cli.command {
        Commands::Seal(args) => handle_seal_command(&ctx, args)?,
        Commands::Open(args) => handle_open_command(&ctx, args)?,
        Commands::Demo(args) => handle_demo_command(&ctx, args)?,
        Commands::History { limit } => handle_history_command(&ctx, limit)?,
        Commands::Config(args) => handle_config_command(&ctx, args)?,
    }

    Ok(())
}
