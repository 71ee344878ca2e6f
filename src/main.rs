//! msnorm - normalize milestone titles to canonical `M<n>` form

mod cli;

use anyhow::Context;
use clap::{Args, FromArgMatches, Parser, Subcommand};
use cli::Output;
use cli::auth::{AuthCommand, run_auth};
use cli::list::{ListArgs, run_list};
use cli::normalize::{NormalizeArgs, run_normalize};
use cli::style::Stylize;
use msnorm::shutdown::{ctrl_c, run_until};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "msnorm",
    version,
    about = "Normalize GitHub/GitLab milestone titles to canonical M<n> form",
    propagate_version = true
)]
struct Cli {
    /// Path inside the git repository used to detect the remote
    #[arg(long, global = true, default_value = ".")]
    path: PathBuf,

    /// Only print the plan, errors and the final summary
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Disable progress spinners
    #[arg(long, global = true)]
    no_spinner: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan milestone renames and apply them with --apply (default command)
    Normalize(NormalizeArgs),

    /// List milestones with the classification of each title
    List(ListArgs),

    /// Check authentication for a platform
    Auth {
        #[command(subcommand)]
        platform: AuthCommand,
    },
}

/// `--debug` wins over `RUST_LOG`; without either, only warnings are shown.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Arguments for a bare `msnorm`, parsed by clap so `MSNORM_*` variables apply
fn default_normalize_args() -> anyhow::Result<NormalizeArgs> {
    let matches = NormalizeArgs::augment_args(clap::Command::new("normalize"))
        .try_get_matches_from(["normalize"])?;
    Ok(NormalizeArgs::from_arg_matches(&matches)?)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let output = Output {
        quiet: cli.quiet,
        spinners: !cli.no_spinner,
        json: false,
    };

    let command = match cli.command {
        Some(command) => command,
        None => Commands::Normalize(default_normalize_args()?),
    };

    match command {
        Commands::Normalize(args) => run_normalize(&cli.path, args, output)
            .await
            .context("normalize failed")?,
        Commands::List(args) => run_list(&cli.path, args, output)
            .await
            .context("list failed")?,
        Commands::Auth { platform } => run_auth(platform, output)
            .await
            .context("auth check failed")?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run_until(run(cli), ctrl_c()).await {
        Some(Ok(())) => ExitCode::SUCCESS,
        Some(Err(e)) => {
            anstream::eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
        None => {
            anstream::eprintln!("{}", "interrupted".warn());
            ExitCode::from(130)
        }
    }
}
