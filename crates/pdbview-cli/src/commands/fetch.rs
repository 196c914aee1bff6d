use crate::cli::FetchArgs;
use crate::error::Result;
use crate::fetch;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tracing::info;

pub async fn run(args: FetchArgs) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
    pb.set_draw_target(indicatif::ProgressDrawTarget::stderr_with_hz(2));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching '{}' from the RCSB archive...", args.id));

    let text = match fetch::fetch_pdb(&args.id).await {
        Ok(text) => {
            pb.finish_and_clear();
            text
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!("Wrote '{}' to {:?}", args.id, path);
            eprintln!("✓ Saved '{}' to {}", args.id, path.display());
        }
        None => {
            std::io::stdout().write_all(text.as_bytes())?;
        }
    }

    Ok(())
}
