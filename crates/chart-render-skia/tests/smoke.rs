// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render through ChartState into PNG bytes and files.

use chart_core::{capture, AxisBounds, ChartState, Column, DashStyle};
use chart_render_skia::{RasterOptions, SkiaBackend};

fn small_opts() -> RasterOptions {
    RasterOptions { width: 320, height: 200, draw_labels: false, ..RasterOptions::default() }
}

fn loaded() -> ChartState<SkiaBackend> {
    let mut state = ChartState::new(SkiaBackend::new(small_opts()));
    state
        .set_multi_xy(
            Column::new("x", vec![0.0, 1.0, 2.0, 3.0, 4.0]),
            vec![
                Column::new("a", vec![0.0, 2.0, 1.0, 3.5, 2.5]),
                Column::new("b", vec![1.0, 1.0, 2.0, 2.0, 4.0]),
            ],
            "smoke",
        )
        .expect("load");
    state
}

#[test]
fn renders_png_of_requested_size() {
    let state = loaded();
    assert_eq!(state.backend().redraw_count(), 1);

    let bytes = state.backend().encode_png().expect("encode");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    let opts = state.backend().options();
    assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
    assert_eq!((img.width(), img.height()), (320, 200));
    // Background corner stays white.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn writes_png_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/chart.png");
    loaded().backend().render_to_png(&out).expect("write png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn loads_autoscale_and_explicit_ranges_stick() {
    let mut state = loaded();
    // Fitted to data: x exactly, y with a 2% margin.
    assert_eq!(state.x_axis().bounds(), AxisBounds::new(0.0, 4.0));
    assert!(state.y_axis().min < 0.0 && state.y_axis().max > 4.0);

    let mut snap = capture(&state);
    snap.axis_x = AxisBounds::new(1.0, 3.0);
    snap.axis_y = AxisBounds::new(0.0, 5.0);
    state.apply(&snap);
    assert_eq!(capture(&state), snap);
    assert_eq!(state.backend().redraw_count(), 2);

    // A new load refits.
    state
        .set_xy(Column::new("x", vec![10.0, 20.0]), Column::new("y", vec![0.0, 1.0]), "")
        .expect("reload");
    assert_eq!(state.x_axis().bounds(), AxisBounds::new(10.0, 20.0));
}

#[test]
fn restyled_plot_changes_pixels() {
    let mut state = loaded();
    let before = state.backend().encode_png().expect("encode");

    let mut snap = capture(&state);
    snap.series_options[0].width = 8.0;
    state.apply(&snap);
    let after = state.backend().encode_png().expect("encode");

    let a = image::load_from_memory(&before).expect("decode").to_rgba8();
    let b = image::load_from_memory(&after).expect("decode").to_rgba8();
    assert_ne!(a.as_raw(), b.as_raw());
}

fn pixels(state: &ChartState<SkiaBackend>) -> Vec<u8> {
    let bytes = state.backend().encode_png().expect("encode");
    image::load_from_memory(&bytes).expect("decode").to_rgba8().into_raw()
}

#[test]
fn dash_style_reaches_the_raster() {
    let mut state = loaded();
    let mut snap = capture(&state);
    snap.series_options[0].width = 3.0;
    snap.series_options[0].dash = DashStyle::Solid;
    state.apply(&snap);
    let solid = pixels(&state);

    snap.series_options[0].dash = DashStyle::Dash;
    state.apply(&snap);
    assert_ne!(solid, pixels(&state));
}

#[test]
fn legend_shows_series_names() {
    let labelled = RasterOptions { draw_labels: true, ..small_opts() };
    let render = |name: &str| {
        let mut state = ChartState::new(SkiaBackend::new(labelled));
        state
            .set_multi_xy(
                Column::new("x", vec![0.0, 1.0, 2.0]),
                vec![Column::new(name, vec![0.0, 1.0, 0.5]), Column::new("b", vec![1.0, 0.0, 1.0])],
                "legend",
            )
            .expect("load");
        pixels(&state)
    };
    assert_ne!(render("a"), render("a much longer series name"));
}
