use clap::Parser;
use std::process::ExitCode;
use track_map::{PlotOutcome, Settings, plot_multiple_tracks};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let settings = Settings::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let folder = settings.folder.clone();
    let options = settings.into_options();

    match plot_multiple_tracks(&folder, &options) {
        Ok(outcome) => {
            let skipped = outcome.skipped();
            if !skipped.is_empty() {
                println!("\n--- Skipped {} files ---", skipped.len());
                for file in skipped {
                    println!("✗ {}: {}", file.path.display(), file.reason);
                }
            }
            if let PlotOutcome::Saved { tracks, points, .. } = outcome {
                println!("✓ Drew {} tracks with {} points", tracks, points);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
