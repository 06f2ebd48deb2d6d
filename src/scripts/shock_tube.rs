use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::submodules::figure;
use crate::submodules::input_params::{PlotParams, ProfileInput};
use crate::submodules::reference_table::ProfileField;

// Frame written at the end of the shock tube run (t = 8e-4).
const SNAPSHOT: usize = 10;

/// Sod shock tube at the final frame: numerical profile of one field
/// against the analytical solution stored next to the figures.
pub fn run(field: ProfileField, case_dir: &Path, out_dir: &Path, params: &PlotParams) -> Result<PathBuf> {
    let case_name = "shock_tube";
    let input = ProfileInput {
        case_name: case_name.into(),
        result_path: case_dir.join(format!("{}_{}.csv", case_name, SNAPSHOT)),
        exact_path: out_dir.join("exact.csv"),
        field,
        output_dir: out_dir.to_path_buf(),
    };

    figure::profile_figure(&input, params)
}
