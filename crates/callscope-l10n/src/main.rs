use std::path::PathBuf;
use std::process::ExitCode;

use callscope_l10n::{convert_file, TARGET_FILES};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rewrites the known Dart pages to generated AppLocalizations accessors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Flutter project root holding lib/presentation/pages/.
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut failed = false;

    for relative in TARGET_FILES {
        let path = cli.root.join(relative);
        match convert_file(&path) {
            Ok(true) => info!(path = %path.display(), "converted"),
            Ok(false) => info!(path = %path.display(), "already converted"),
            Err(err) => {
                error!(path = %path.display(), "conversion failed: {err:#}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
