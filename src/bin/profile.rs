//! Compares Lagrange, Chebyshev-node Lagrange and natural spline 
//! interpolation of an elevation profile.
//!
//! ```bash
//! knotwork-profile --settings settings.yml
//! RUST_LOG=debug knotwork-profile
//! ```

use knotwork::profile::{self, Settings, DEFAULT_SETTINGS_PATH};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let settings_path = args.iter()
        .position(|a| a == "--settings" || a == "-s")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_SETTINGS_PATH);

    let settings = Settings::from_file(settings_path)?;
    let series = profile::load_csv(&settings.filepath)?;
    let rows = profile::run(&series, settings.step)?;

    println!("{} ({} samples, step {})", settings.filepath.display(), series.len(), settings.step);
    println!("{:<28} {:>6} {:>14} {:>14}", "method", "nodes", "max |err|", "rms err");
    for row in rows {
        println!(
            "{:<28} {:>6} {:>14.6e} {:>14.6e}",
            row.label, row.nodes, row.comparison.max_abs_error, row.comparison.rms_error
        );
    }
    Ok(())
}
