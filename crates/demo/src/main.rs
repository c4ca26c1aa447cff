// File: crates/demo/src/main.rs
// Summary: Loads an XY (or multi-column) CSV into a chart, applies axis/style edits the
// way the options panel would, renders a PNG, and optionally exports values as TSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::import::{read_columns_csv, read_xy_csv};
use chart_core::options::{self, RawAxisInput};
use chart_core::{capture, write_tsv, ChartState, DashStyle, ExportOutcome, Rgb, SeriesOptions, Snapshot};
use chart_render_skia::{RasterOptions, SkiaBackend};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plotxy")]
#[command(about = "Plot XY series from CSV and export their values", long_about = None)]
struct Args {
    /// CSV input: `x,y` lines, or a headered table with --multi
    input: PathBuf,

    /// Treat the input as a headered table: first column X, others Y
    #[arg(long)]
    multi: bool,

    /// Axis bounds, parsed like the options panel fields
    #[arg(long, allow_hyphen_values = true)]
    x_min: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    x_max: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    y_min: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    y_max: Option<String>,

    /// Restyle a series: INDEX:R,G,B:WIDTH:DASH (DASH is 1..6). Repeatable.
    #[arg(long = "style", value_parser = parse_style)]
    styles: Vec<(usize, SeriesOptions)>,

    /// Output PNG (default: target/out/chart_<stem>.png)
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the plotted values as tab-separated text
    #[arg(long)]
    export: Option<PathBuf>,

    #[arg(long, default_value_t = 1024)]
    width: i32,
    #[arg(long, default_value_t = 640)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let opts = RasterOptions { width: args.width, height: args.height, ..RasterOptions::default() };
    let mut chart = ChartState::new(SkiaBackend::new(opts));
    chart.register_observer(|state: &ChartState<SkiaBackend>| {
        let snap = capture(state);
        info!(
            title = state.title(),
            series = snap.series_options.len(),
            x = ?snap.axis_x,
            y = ?snap.axis_y,
            "chart updated"
        );
        Ok(())
    });

    load(&mut chart, &args.input, args.multi)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;

    edit_options(&mut chart, &args)?;

    let png = args.png.clone().unwrap_or_else(|| default_png(&args.input));
    chart.backend().render_to_png(&png)?;
    println!("Wrote {}", png.display());

    if let Some(path) = &args.export {
        match write_tsv(path, &chart.extract()).with_context(|| format!("exporting to '{}'", path.display()))? {
            ExportOutcome::Written { rows } => println!("Exported {rows} rows to {}", path.display()),
            ExportOutcome::Empty => println!("Nothing to export"),
        }
    }
    Ok(())
}

fn load(chart: &mut ChartState<SkiaBackend>, path: &Path, multi: bool) -> Result<()> {
    if multi {
        let data = read_columns_csv(path)?;
        chart.set_multi_xy(data.x, data.ys, &data.label)?;
    } else {
        let data = read_xy_csv(path)?;
        chart.set_xy(data.x, data.y, &data.label)?;
    }
    info!(series = chart.series_count(), rows = chart.store().row_count(), "loaded input");
    Ok(())
}

/// Fill the editor fields from the current chart, overlay the command-line edits,
/// then validate and apply in one step.
fn edit_options(chart: &mut ChartState<SkiaBackend>, args: &Args) -> Result<()> {
    let has_axis_edit = args.x_min.is_some() || args.x_max.is_some() || args.y_min.is_some() || args.y_max.is_some();
    if !has_axis_edit && args.styles.is_empty() {
        return Ok(());
    }

    let current = capture(chart);
    let mut series_options = current.series_options.clone();
    for (index, opt) in &args.styles {
        match series_options.get_mut(*index) {
            Some(slot) => *slot = *opt,
            None => warn!(index, "no series at this position; style ignored"),
        }
    }

    let snapshot = if has_axis_edit {
        // Unedited fields go through the same three-decimal text an editor shows.
        let mut raw = RawAxisInput::from_snapshot(&current);
        for (field, value) in [
            (&mut raw.x_min, &args.x_min),
            (&mut raw.x_max, &args.x_max),
            (&mut raw.y_min, &args.y_min),
            (&mut raw.y_max, &args.y_max),
        ] {
            if let Some(v) = value {
                *field = v.clone();
            }
        }
        options::validate(&raw, series_options)?
    } else {
        Snapshot { series_options, ..current }
    };
    options::apply(chart, &snapshot);
    Ok(())
}

fn parse_style(s: &str) -> Result<(usize, SeriesOptions), String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [index, rgb, width, dash] = parts.as_slice() else {
        return Err("expected INDEX:R,G,B:WIDTH:DASH".into());
    };
    let index = index.trim().parse::<usize>().map_err(|e| format!("index: {e}"))?;
    let channels = rgb
        .split(',')
        .map(|c| c.trim().parse::<f64>().map_err(|e| format!("color: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    let color = match channels.as_slice() {
        [r, g, b] => Rgb::try_new(*r, *g, *b).ok_or("color channels must be within 0..1")?,
        _ => return Err("color needs three channels".into()),
    };
    let width = width.trim().parse::<f64>().map_err(|e| format!("width: {e}"))?;
    if !(width > 0.0 && width.is_finite()) {
        return Err("width must be positive".into());
    }
    let dash = dash
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(DashStyle::from_code)
        .ok_or("dash must be 1..6")?;
    Ok((index, SeriesOptions { color, width, dash }))
}

/// Produce output file name like target/out/chart_<stem>.png
fn default_png(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}
