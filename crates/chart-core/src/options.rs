// File: crates/chart-core/src/options.rs
// Summary: Options snapshot exchanged with an editing panel: capture from chart state,
// validate raw user input, apply back.

use crate::axis::AxisBounds;
use crate::backend::RenderBackend;
use crate::chart::ChartState;
use crate::error::{ChartError, ChartResult};
use crate::types::{DashStyle, LineStyle, Rgb};

/// Editable cosmetics of one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesOptions {
    pub color: Rgb,
    pub width: f64,
    pub dash: DashStyle,
}

impl SeriesOptions {
    pub fn to_style(&self) -> LineStyle {
        LineStyle::new(self.color, self.width, self.dash)
    }
}

impl From<LineStyle> for SeriesOptions {
    fn from(s: LineStyle) -> Self {
        Self { color: s.color, width: s.width, dash: s.dash }
    }
}

/// Fully-valued options for a chart. `series_options[i]` corresponds to the series
/// at position `i` when applied, whatever series that is at the time.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub axis_x: AxisBounds,
    pub axis_y: AxisBounds,
    pub series_options: Vec<SeriesOptions>,
}

/// Axis bounds as typed into an editor, before parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawAxisInput {
    pub x_min: String,
    pub x_max: String,
    pub y_min: String,
    pub y_max: String,
}

impl RawAxisInput {
    /// Text for each field the way an editor displays it (three decimals).
    pub fn from_snapshot(s: &Snapshot) -> Self {
        Self {
            x_min: format!("{:.3}", s.axis_x.min),
            x_max: format!("{:.3}", s.axis_x.max),
            y_min: format!("{:.3}", s.axis_y.min),
            y_max: format!("{:.3}", s.axis_y.max),
        }
    }
}

/// Read the current axis bounds and the live cosmetics of every series, in plot order.
pub fn capture<B: RenderBackend>(state: &ChartState<B>) -> Snapshot {
    Snapshot {
        axis_x: state.x_axis().bounds(),
        axis_y: state.y_axis().bounds(),
        series_options: state.store().series().iter().map(|s| SeriesOptions::from(s.style)).collect(),
    }
}

/// Parse the four axis fields. Any field that is not a finite number rejects the
/// whole snapshot; the caller keeps its displayed values.
pub fn validate(raw: &RawAxisInput, series_options: Vec<SeriesOptions>) -> ChartResult<Snapshot> {
    let x_min = parse_bound("x_min", &raw.x_min)?;
    let x_max = parse_bound("x_max", &raw.x_max)?;
    let y_min = parse_bound("y_min", &raw.y_min)?;
    let y_max = parse_bound("y_max", &raw.y_max)?;
    Ok(Snapshot {
        axis_x: AxisBounds::new(x_min, x_max),
        axis_y: AxisBounds::new(y_min, y_max),
        series_options,
    })
}

/// Apply a snapshot to the chart; see [`ChartState::apply`].
pub fn apply<B: RenderBackend>(state: &mut ChartState<B>, snapshot: &Snapshot) {
    state.apply(snapshot);
}

fn parse_bound(field: &'static str, text: &str) -> ChartResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ChartError::InvalidSnapshot { field, value: text.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(x_min: &str, x_max: &str, y_min: &str, y_max: &str) -> RawAxisInput {
        RawAxisInput {
            x_min: x_min.into(),
            x_max: x_max.into(),
            y_min: y_min.into(),
            y_max: y_max.into(),
        }
    }

    #[test]
    fn parses_trimmed_numbers() {
        let s = validate(&raw(" 1.5", "2", "-3e2 ", "0"), Vec::new()).unwrap();
        assert_eq!(s.axis_x, AxisBounds::new(1.5, 2.0));
        assert_eq!(s.axis_y, AxisBounds::new(-300.0, 0.0));
    }

    #[test]
    fn rejects_non_finite_and_names_field() {
        match validate(&raw("0", "1", "NaN", "1"), Vec::new()) {
            Err(ChartError::InvalidSnapshot { field, .. }) => assert_eq!(field, "y_min"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(validate(&raw("0", "inf", "0", "1"), Vec::new()).is_err());
        assert!(validate(&raw("0", "", "0", "1"), Vec::new()).is_err());
    }

    #[test]
    fn display_text_reparses() {
        let s = Snapshot {
            axis_x: AxisBounds::new(0.25, 4.0),
            axis_y: AxisBounds::new(-1.0, 1.0),
            series_options: Vec::new(),
        };
        let text = RawAxisInput::from_snapshot(&s);
        assert_eq!(text.x_min, "0.250");
        assert_eq!(validate(&text, Vec::new()).unwrap(), s);
    }
}
