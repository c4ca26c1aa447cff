// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks for options round-trips, sticky palette slots, and table shape.

use chart_core::{
    capture, AxisBounds, ChartState, Column, DashStyle, RecordingBackend, Rgb, SeriesOptions,
};
use proptest::prelude::*;

fn dash() -> impl Strategy<Value = DashStyle> {
    (1u8..=6).prop_map(|c| DashStyle::from_code(c).unwrap())
}

fn series_options() -> impl Strategy<Value = SeriesOptions> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.1..20.0f64, dash()).prop_map(|(r, g, b, width, dash)| {
        SeriesOptions { color: Rgb::new(r, g, b), width, dash }
    })
}

fn chart(rows: usize, n_series: usize) -> ChartState<RecordingBackend> {
    let mut state = ChartState::new(RecordingBackend::new());
    let x = Column::new("x", (0..rows).map(|i| i as f64).collect());
    let ys = (0..n_series)
        .map(|s| Column::new(format!("y{s}"), (0..rows).map(|i| (i * s) as f64).collect()))
        .collect();
    state.set_multi_xy(x, ys, "p").unwrap();
    state
}

proptest! {
    #[test]
    fn apply_of_capture_is_a_no_op(
        n in 0usize..30,
        edits in proptest::collection::vec(series_options(), 0..30),
        bounds in (-1e6..1e6f64, -1e6..1e6f64, -1e6..1e6f64, -1e6..1e6f64),
    ) {
        let mut state = chart(3, n);
        let mut snap = capture(&state);
        snap.axis_x = AxisBounds::new(bounds.0, bounds.1);
        snap.axis_y = AxisBounds::new(bounds.2, bounds.3);
        for (slot, e) in snap.series_options.iter_mut().zip(&edits) {
            *slot = *e;
        }
        state.apply(&snap);

        let before = capture(&state);
        let palette = state.palette().clone();
        state.apply(&before);
        prop_assert_eq!(capture(&state), before);
        prop_assert_eq!(state.palette(), &palette);
    }

    #[test]
    fn edited_slot_is_inherited_by_next_load(i in 0usize..40, opt in series_options()) {
        let mut state = chart(2, i + 1);
        let mut snap = capture(&state);
        snap.series_options = vec![opt; i + 1];
        state.apply(&snap);

        let reloaded = chart_reload(&mut state, i + 1);
        prop_assert_eq!(reloaded.store().series()[i % 12].style, opt.to_style());
    }

    #[test]
    fn extract_is_rectangular(rows in 0usize..50, n_series in 0usize..8) {
        let state = chart(rows, n_series);
        let table = state.extract();
        if rows == 0 {
            prop_assert!(table.is_empty());
        } else {
            prop_assert_eq!(table.len(), rows + 1);
            for row in &table {
                prop_assert_eq!(row.len(), n_series + 1);
            }
        }
    }
}

fn chart_reload(state: &mut ChartState<RecordingBackend>, n_series: usize) -> &ChartState<RecordingBackend> {
    let x = Column::new("x2", vec![0.0, 1.0, 2.0]);
    let ys = (0..n_series).map(|s| Column::new(format!("z{s}"), vec![s as f64; 3])).collect();
    state.set_multi_xy(x, ys, "reload").unwrap();
    state
}
