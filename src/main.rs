use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use finalize::cli::{run_finalize_workflow, FinalizeWorkflowArgs};
use finalize::command::SystemRunner;
use finalize::{config, git, ui};

#[derive(clap::Parser)]
#[command(
    name = "finalize",
    about = "Cut a release from pending changelog fragments"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short = 'd', long, help = "Directory holding changelog fragments")]
    changelog_dir: Option<PathBuf>,

    #[arg(long, help = "Resolve the release without changing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("finalize {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = FinalizeWorkflowArgs {
        changelog_dir: args.changelog_dir,
        dry_run: args.dry_run,
    };

    let runner = SystemRunner::new();
    if let Err(e) = run_finalize_workflow(&workflow_args, &config, &runner, git::ensure_config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
