use std::env;
use std::path::Path;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use submodules::input_params::PlotParams;
use submodules::reference_table::ProfileField;

mod scripts;
mod submodules;

fn main() -> Result<()> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();

    let case_dir = Path::new("build/examples");
    let out_dir = Path::new("vis");

    let params_path = out_dir.join("plot_params.json");
    let params = if params_path.exists() {
        PlotParams::from_json_file(&params_path)?
    } else {
        PlotParams::default()
    };

    scripts::convergence::run(case_dir, out_dir, &params)?;
    for field in ProfileField::ALL {
        scripts::shock_tube::run(field, case_dir, out_dir, &params)?;
    }

    info!("all figures written to {}", out_dir.display());
    Ok(())
}
