use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use super::type_lib::NumericData;

/// A result CSV loaded wholesale: header row plus numeric columns
/// addressed by name. Immutable after load.
#[derive(Debug)]
pub struct ResultTable {
    headers: Vec<String>,
    columns: Vec<Vec<NumericData>>,
}

impl ResultTable {
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open result file {}", path.display()))?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = rdr
            .headers()
            .with_context(|| format!("failed to read header row of {}", path.display()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut columns = vec![Vec::new(); headers.len()];
        for (i, record) in rdr.records().enumerate() {
            let record =
                record.with_context(|| format!("failed to read record in {}", path.display()))?;
            ensure!(
                record.len() == headers.len(),
                "row {} of {} has {} fields, header has {}",
                i + 2,
                path.display(),
                record.len(),
                headers.len()
            );
            for (j, value) in record.iter().enumerate() {
                let parsed: NumericData = value.parse().with_context(|| {
                    format!(
                        "bad numeric value '{}' in {} (row {}, column '{}')",
                        value,
                        path.display(),
                        i + 2,
                        headers[j]
                    )
                })?;
                columns[j].push(parsed);
            }
        }

        let table = ResultTable { headers, columns };
        debug!(
            "loaded {} with {} rows, columns {:?}",
            path.display(),
            table.n_rows(),
            table.headers
        );
        Ok(table)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |col| col.len())
    }

    pub fn column(&self, name: &str) -> Result<&[NumericData]> {
        let index = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("no column '{}', file has columns {:?}", name, self.headers))?;
        Ok(&self.columns[index])
    }
}
