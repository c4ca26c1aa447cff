// File: crates/chart-core/tests/scenarios.rs
// Purpose: End-to-end load / capture / validate / apply / notify scenarios on a recording backend.

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::options::{self, RawAxisInput};
use chart_core::{
    capture, Cell, ChartError, ChartState, Column, DashStyle, RecordingBackend, Rgb, SeriesOptions,
    StylePalette,
};

fn col(name: &str, v: &[f64]) -> Column {
    Column::new(name, v.to_vec())
}

#[test]
fn single_series_uses_first_palette_slot() {
    let mut state = ChartState::new(RecordingBackend::new());
    state
        .set_xy(col("x", &[1.0, 2.0, 3.0]), col("y", &[10.0, 20.0, 30.0]), "run1")
        .expect("load");

    assert_eq!(state.series_count(), 1);
    assert_eq!(state.title(), "run1");

    let snap = capture(&state);
    let palette = StylePalette::default();
    assert_eq!(snap.series_options.len(), 1);
    assert_eq!(snap.series_options[0].color, palette.color_for(0));
    assert_eq!(snap.series_options[0].width, palette.width_for(0));
    assert_eq!(snap.series_options[0].dash, palette.dash_for(0));
}

#[test]
fn multi_series_extracts_rectangular_table() {
    let mut state = ChartState::new(RecordingBackend::new());
    state
        .set_multi_xy(
            col("x", &[0.0, 1.0, 2.0]),
            vec![col("y0", &[1.0, 2.0, 3.0]), col("y1", &[4.0, 5.0, 6.0])],
            "run2",
        )
        .expect("load");
    assert_eq!(state.series_count(), 2);

    let n = |v: f64| Cell::from(v);
    let want = vec![
        vec![Cell::from("x"), Cell::from("y0"), Cell::from("y1")],
        vec![n(0.0), n(1.0), n(4.0)],
        vec![n(1.0), n(2.0), n(5.0)],
        vec![n(2.0), n(3.0), n(6.0)],
    ];
    assert_eq!(state.extract(), want);
}

#[test]
fn unparsable_axis_text_is_rejected_before_apply() {
    let mut state = ChartState::new(RecordingBackend::new());
    state.set_xy(col("x", &[0.0, 1.0]), col("y", &[0.0, 1.0]), "r").unwrap();
    let before = capture(&state);
    let redraws = state.backend().redraw_count();

    let raw = RawAxisInput {
        x_min: "abc".into(),
        x_max: "5".into(),
        y_min: "0".into(),
        y_max: "1".into(),
    };
    let res = options::validate(&raw, before.series_options.clone());
    assert!(matches!(res, Err(ChartError::InvalidSnapshot { field: "x_min", .. })));

    assert_eq!(capture(&state), before);
    assert_eq!(state.backend().redraw_count(), redraws);
}

#[test]
fn short_snapshot_restyles_leading_series_with_one_redraw() {
    let mut state = ChartState::new(RecordingBackend::new());
    let x = col("x", &[0.0, 1.0]);
    let ys = vec![col("a", &[1.0, 2.0]), col("b", &[3.0, 4.0]), col("c", &[5.0, 6.0])];
    state.set_multi_xy(x, ys, "three").unwrap();
    let before = capture(&state);
    let redraws = state.backend().redraw_count();

    let edited = SeriesOptions { color: Rgb::new(0.2, 0.3, 0.4), width: 7.0, dash: DashStyle::DenseDot };
    let mut snap = before.clone();
    snap.series_options = vec![edited];
    options::apply(&mut state, &snap);

    let after = capture(&state);
    assert_eq!(after.series_options[0], edited);
    assert_eq!(after.series_options[1..], before.series_options[1..]);
    assert_eq!(state.backend().redraw_count() - redraws, 1);
}

#[test]
fn observers_fire_once_in_registration_order() {
    let mut state = ChartState::new(RecordingBackend::new());
    let log = Rc::new(RefCell::new(Vec::new()));

    let l1 = Rc::clone(&log);
    state.register_observer(move |s: &ChartState<RecordingBackend>| {
        l1.borrow_mut().push(("o1", s.series_count(), s.backend().redraw_count()));
        Ok(())
    });
    let l2 = Rc::clone(&log);
    state.register_observer(move |s: &ChartState<RecordingBackend>| {
        l2.borrow_mut().push(("o2", s.series_count(), s.backend().redraw_count()));
        Ok(())
    });

    state.set_xy(col("x", &[1.0]), col("y", &[2.0]), "").unwrap();

    // Both see the loaded series and the redraw that preceded them.
    assert_eq!(*log.borrow(), vec![("o1", 1, 1), ("o2", 1, 1)]);
    assert_eq!(state.title(), "N/A");
}
