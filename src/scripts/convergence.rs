use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::submodules::figure;
use crate::submodules::input_params::{ConvergenceCase, ConvergenceInput, PlotParams};

/// Convergence study of the spectral derivative: p-adaptivity against
/// h-adaptivity, L2 error over degrees of freedom.
pub fn run(case_dir: &Path, out_dir: &Path, params: &PlotParams) -> Result<PathBuf> {
    let input = ConvergenceInput {
        cases: vec![
            ConvergenceCase {
                path: case_dir.join("p_adaptivity.csv"),
                x_column: "p".into(),
                error_column: "error".into(),
                label: "p-adaptivity".into(),
            },
            ConvergenceCase {
                path: case_dir.join("h_adaptivity.csv"),
                x_column: "n".into(),
                error_column: "error".into(),
                label: "h-adaptivity".into(),
            },
        ],
        x_limits: (0.0, 25.0),
        x_label: "degree of freedom".into(),
        y_label: "L2 error".into(),
        output: out_dir.join("convergence.svg"),
    };

    figure::convergence_figure(&input, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn run_produces_the_figure_from_fixture_csvs() {
        let tmp = tempdir().unwrap();
        let case_dir = tmp.path().join("build/examples");
        std::fs::create_dir_all(&case_dir).unwrap();
        std::fs::write(case_dir.join("p_adaptivity.csv"), "p,error\n2,0.5\n4,0.01\n").unwrap();
        std::fs::write(case_dir.join("h_adaptivity.csv"), "n,error\n4,0.2\n8,0.05\n").unwrap();

        let out_dir = tmp.path().join("vis");
        let output = run(&case_dir, &out_dir, &PlotParams::default()).unwrap();
        assert_eq!(output, out_dir.join("convergence.svg"));
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn run_fails_when_a_case_file_is_missing() {
        let tmp = tempdir().unwrap();
        let err = run(tmp.path(), tmp.path(), &PlotParams::default()).unwrap_err();
        assert!(format!("{}", err).contains("p_adaptivity.csv"));
    }
}
