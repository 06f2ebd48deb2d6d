use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::reference_table::ProfileField;
use super::type_lib::NumericData;

/// Cosmetic figure parameters. Defaults are the stock values used by the
/// solver's postprocessing scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    pub width: u32,
    pub height: u32,
    pub border_width: u32,
    pub font_size: u32,
    pub label_size: u32,
    pub legend_size: u32,
    pub marker_size: u32,
    pub line_width: u32,
}

impl Default for PlotParams {
    fn default() -> Self {
        PlotParams {
            width: 640,
            height: 480,
            border_width: 2,
            font_size: 15,
            label_size: 15,
            legend_size: 13,
            marker_size: 3,
            line_width: 1,
        }
    }
}

impl PlotParams {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to open plot parameter file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse plot parameter file {}", path.display()))
    }
}

/// One result set on a convergence plot: where it lives and which columns
/// hold the refinement parameter and the error.
pub struct ConvergenceCase {
    pub path: PathBuf,
    pub x_column: String,
    pub error_column: String,
    pub label: String,
}

pub struct ConvergenceInput {
    pub cases: Vec<ConvergenceCase>,
    pub x_limits: (NumericData, NumericData),
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
}

pub struct ProfileInput {
    pub case_name: String,
    pub result_path: PathBuf,
    pub exact_path: PathBuf,
    pub field: ProfileField,
    pub output_dir: PathBuf,
}
