use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use ndarray::{Array2, ArrayView1};
use tracing::debug;

use super::type_lib::NumericData;

/// Physical fields of the 1-D Euler solution. Each variant picks exactly one
/// row of the reference table; unknown names are rejected rather than
/// falling through to whichever row happened to be assigned last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Rho,
    U,
    P,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::Rho, ProfileField::U, ProfileField::P];

    pub fn to_str(&self) -> &str {
        match self {
            ProfileField::Rho => "rho",
            ProfileField::U => "u",
            ProfileField::P => "p",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "rho" => Ok(ProfileField::Rho),
            "u" => Ok(ProfileField::U),
            "p" => Ok(ProfileField::P),
            _ => bail!("unknown field name '{}', expected one of rho, u, p", name),
        }
    }

    fn row(&self) -> usize {
        match self {
            ProfileField::Rho => 1,
            ProfileField::U => 2,
            ProfileField::P => 3,
        }
    }
}

/// Precomputed analytical solution: row 0 is the coordinate, rows 1-3 are
/// rho, u, p sampled at the same points.
#[derive(Debug)]
pub struct ExactSolution {
    data: Array2<NumericData>,
}

const FIELD_ROWS: usize = 4;

impl ExactSolution {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to open reference file {}", path.display()))?;
        let solution = ExactSolution::parse(&text)
            .with_context(|| format!("failed to parse reference file {}", path.display()))?;
        debug!(
            "loaded reference table {} with {} sample points",
            path.display(),
            solution.data.ncols()
        );
        Ok(solution)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<NumericData>> = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|value| {
                    value.parse().with_context(|| {
                        format!("bad numeric value '{}' on line {}", value, i + 1)
                    })
                })
                .collect::<Result<Vec<NumericData>>>()?;
            rows.push(row);
        }

        ensure!(
            rows.len() == FIELD_ROWS,
            "expected {} rows (x, rho, u, p), found {}",
            FIELD_ROWS,
            rows.len()
        );
        let n_samples = rows[0].len();
        ensure!(n_samples > 0, "reference table has no sample points");
        for (i, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == n_samples,
                "row {} has {} samples, row 1 has {}",
                i + 1,
                row.len(),
                n_samples
            );
        }

        let flat: Vec<NumericData> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((FIELD_ROWS, n_samples), flat)?;
        Ok(ExactSolution { data })
    }

    pub fn x(&self) -> ArrayView1<'_, NumericData> {
        self.data.row(0)
    }

    pub fn field(&self, field: ProfileField) -> ArrayView1<'_, NumericData> {
        self.data.row(field.row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0.0 0.25 0.5 0.75 1.0\n\
                          2.0 2.0 1.5 1.0 1.0\n\
                          0.0 0.0 50.0 0.0 0.0\n\
                          2.0e5 2.0e5 1.5e5 1.0e5 1.0e5\n";

    #[test]
    fn fields_select_distinct_rows() {
        let sol = ExactSolution::parse(SAMPLE).unwrap();
        assert_eq!(sol.x().to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(sol.field(ProfileField::Rho)[2], 1.5);
        assert_eq!(sol.field(ProfileField::U)[2], 50.0);
        assert_eq!(sol.field(ProfileField::P)[2], 1.5e5);
        assert_ne!(
            sol.field(ProfileField::Rho),
            sol.field(ProfileField::U)
        );
        assert_ne!(sol.field(ProfileField::U), sol.field(ProfileField::P));
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = ProfileField::from_name("q").unwrap_err().to_string();
        assert!(err.contains("unknown field name 'q'"));
        for name in ["rho", "u", "p"] {
            assert_eq!(ProfileField::from_name(name).unwrap().to_str(), name);
        }
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let err = ExactSolution::parse("0.0 1.0\n2.0 1.0\n").unwrap_err().to_string();
        assert!(err.contains("expected 4 rows"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let text = "0.0 1.0\n2.0 1.0\n0.0 0.0\n1.0\n";
        let err = ExactSolution::parse(text).unwrap_err().to_string();
        assert!(err.contains("row 4"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "0.0 1.0\n\n2.0 1.0\n0.0 0.0\n1.0e5 1.0e5\n\n";
        let sol = ExactSolution::parse(text).unwrap();
        assert_eq!(sol.x().len(), 2);
    }
}
