use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use plotters::prelude::*;
use tracing::info;

use super::input_params::{ConvergenceInput, PlotParams, ProfileInput};
use super::reference_table::ExactSolution;
use super::result_table::ResultTable;
use super::type_lib::NumericData;

const CASE_COLORS: [RGBColor; 4] = [RED, BLACK, BLUE, GREEN];

fn bounds(values: impl Iterator<Item = NumericData>) -> (NumericData, NumericData) {
    values.fold((NumericData::INFINITY, NumericData::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Overlays the error-vs-refinement series of each case as scatter points on
/// a log-scaled error axis and writes the figure to `input.output`.
pub fn convergence_figure(input: &ConvergenceInput, params: &PlotParams) -> Result<PathBuf> {
    ensure!(!input.cases.is_empty(), "convergence plot needs at least one case");

    let mut series = Vec::with_capacity(input.cases.len());
    for case in &input.cases {
        let table = ResultTable::from_csv(&case.path)?;
        ensure!(
            table.n_rows() > 0,
            "case '{}' file {} has no data rows",
            case.label,
            case.path.display()
        );
        let x = table.column(&case.x_column)?.to_vec();
        let error = table.column(&case.error_column)?.to_vec();
        for value in &error {
            ensure!(
                *value > 0.0,
                "case '{}' has non-positive error value {}, cannot plot on a log axis",
                case.label,
                value
            );
        }
        series.push((case.label.clone(), x, error));
    }

    let (y_min, y_max) = bounds(series.iter().flat_map(|(_, _, e)| e.iter().copied()));

    if let Some(parent) = input.output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }

    let root = SVGBackend::new(&input.output, (params.width, params.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(
            input.x_limits.0..input.x_limits.1,
            (y_min * 0.5..y_max * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(BLACK.stroke_width(params.border_width))
        .x_desc(input.x_label.as_str())
        .y_desc(input.y_label.as_str())
        .axis_desc_style(("serif", params.font_size as i32))
        .label_style(("serif", params.label_size as i32))
        .draw()?;

    for (i, (label, x, error)) in series.iter().enumerate() {
        let color = CASE_COLORS[i % CASE_COLORS.len()];
        let size = params.marker_size as i32;
        chart
            .draw_series(
                x.iter()
                    .zip(error.iter())
                    .map(|(x, e)| Circle::new((*x, *e), size, color.filled())),
            )?
            .label(label.as_str())
            .legend(move |(x, y)| Circle::new((x, y), size, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .border_style(&TRANSPARENT)
        .label_font(("serif", params.legend_size as i32))
        .draw()?;

    root.present()?;
    info!("wrote convergence figure {}", input.output.display());
    Ok(input.output.clone())
}

/// Plots one field of a result CSV as scatter points against the analytical
/// reference line on a shared linear axis. The output file name is derived
/// from the case and field names.
pub fn profile_figure(input: &ProfileInput, params: &PlotParams) -> Result<PathBuf> {
    let table = ResultTable::from_csv(&input.result_path)?;
    ensure!(
        table.n_rows() > 0,
        "result file {} has no data rows",
        input.result_path.display()
    );
    let x = table.column("x")?;
    let var = table.column(input.field.to_str())?;

    let exact = ExactSolution::from_file(&input.exact_path)?;
    let x_ex = exact.x();
    let var_ex = exact.field(input.field);

    let (x_min, x_max) = bounds(x.iter().chain(x_ex.iter()).copied());
    let (y_min, y_max) = bounds(var.iter().chain(var_ex.iter()).copied());
    let x_pad = (x_max - x_min) * 0.02;
    let y_pad = if y_max > y_min { (y_max - y_min) * 0.05 } else { 1.0 };

    std::fs::create_dir_all(&input.output_dir).with_context(|| {
        format!("failed to create output directory {}", input.output_dir.display())
    })?;
    let output = input
        .output_dir
        .join(format!("{}_{}.svg", input.case_name, input.field.to_str()));

    let root = SVGBackend::new(&output, (params.width, params.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(
            x_min - x_pad..x_max + x_pad,
            y_min - y_pad..y_max + y_pad,
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(BLACK.stroke_width(params.border_width))
        .x_desc("x")
        .y_desc(input.field.to_str())
        .axis_desc_style(("serif", params.font_size as i32))
        .label_style(("serif", params.label_size as i32))
        .draw()?;

    let size = params.marker_size as i32;
    chart
        .draw_series(
            x.iter()
                .zip(var.iter())
                .map(|(x, v)| Circle::new((*x, *v), size, BLACK.filled())),
        )?
        .label("numerical")
        .legend(move |(x, y)| Circle::new((x, y), size, BLACK.filled()));

    let line_style = BLACK.stroke_width(params.line_width);
    chart
        .draw_series(LineSeries::new(
            x_ex.iter().zip(var_ex.iter()).map(|(x, v)| (*x, *v)),
            line_style,
        ))?
        .label("analytical")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&TRANSPARENT)
        .label_font(("serif", params.legend_size as i32))
        .draw()?;

    root.present()?;
    drop(chart);
    drop(root);
    info!("wrote profile figure {}", output.display());
    Ok(output)
}
