use clap::Parser;
use colored::Colorize;
use utils::{command_error, exit_code::ExitCode};

mod commands;
mod tracing;
mod utils;

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "smarttodo",
    version,
    long_about = Some("Checklists with progress tracking, a local account and a daily dose of motivation.")
)]
struct Args {
    /// Path of the configuration file (default: ~/.config/smarttodo/config.toml)
    #[clap(short, long)]
    config: Option<String>,

    /// Profile of the configuration to use (default: core.default_profile_name)
    #[clap(short, long)]
    profile: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::Success,
        Err(error) => {
            eprintln!("{} {:?}", "error:".red().bold(), error.report());
            error.code()
        }
    }
}

async fn run() -> command_error::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => smarttodo_config::default_config_path()?,
    };
    ::tracing::debug!(config_path = %config_path, profile = ?args.profile, "loading core");
    let mut core = smarttodo_core::load(&config_path, args.profile.as_deref()).await?;

    let result = args.command.execute(&mut core).await;

    // checklist writes are queued, wait for them even when the command failed
    core.flush().await?;
    result
}
