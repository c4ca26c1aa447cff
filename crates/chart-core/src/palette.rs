// File: crates/chart-core/src/palette.rs
// Summary: Default line cosmetics indexed by series position, with mutable (sticky) slots.

use crate::error::{ChartError, ChartResult};
use crate::types::{DashStyle, LineStyle, Rgb};

/// Number of slots in the built-in palette.
pub const DEFAULT_PALETTE_LEN: usize = 12;

const DEFAULT_COLORS: [Rgb; DEFAULT_PALETTE_LEN] = [
    Rgb::new(1.0, 0.0, 0.0),
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(0.0, 0.0, 1.0),
    Rgb::new(1.0, 0.0, 1.0),
    Rgb::new(0.0, 0.498, 0.0),
    Rgb::new(0.0, 0.0, 0.667),
    Rgb::new(1.0, 0.4, 1.0),
    Rgb::new(1.0, 0.8, 0.0),
    Rgb::new(0.0, 0.749, 0.0),
    Rgb::new(1.0, 0.749, 1.0),
    Rgb::new(1.0, 0.467, 0.0),
    Rgb::new(0.0, 0.6, 1.0),
];

const DEFAULT_WIDTHS: [f64; DEFAULT_PALETTE_LEN] =
    [1.0, 1.0, 1.0, 4.0, 4.0, 4.0, 4.0, 2.0, 2.0, 2.0, 2.0, 2.0];

const DEFAULT_DASHES: [DashStyle; DEFAULT_PALETTE_LEN] = [
    DashStyle::Solid,
    DashStyle::Solid,
    DashStyle::Solid,
    DashStyle::Solid,
    DashStyle::Solid,
    DashStyle::Solid,
    DashStyle::Dash,
    DashStyle::Dash,
    DashStyle::Dash,
    DashStyle::Dash,
    DashStyle::Dash,
    DashStyle::Dash,
];

/// Three equal-length arrays of default cosmetics.
///
/// Lookups wrap around: series `i` uses slot `i mod N`. Setters overwrite the
/// slot, so an edit made on series `i` is inherited by whichever series lands
/// at a position mapping to the same slot after the next load. Styles belong
/// to positions, not to series.
#[derive(Clone, Debug, PartialEq)]
pub struct StylePalette {
    colors: Vec<Rgb>,
    widths: Vec<f64>,
    dashes: Vec<DashStyle>,
}

impl StylePalette {
    /// Contract: the three arrays are non-empty and have the same length.
    pub fn new(colors: Vec<Rgb>, widths: Vec<f64>, dashes: Vec<DashStyle>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::Configuration("palette must have at least one slot"));
        }
        if colors.len() != widths.len() || colors.len() != dashes.len() {
            return Err(ChartError::Configuration("palette arrays differ in length"));
        }
        Ok(Self { colors, widths, dashes })
    }

    /// Build a palette from whole line styles.
    pub fn from_styles(styles: &[LineStyle]) -> ChartResult<Self> {
        Self::new(
            styles.iter().map(|s| s.color).collect(),
            styles.iter().map(|s| s.width).collect(),
            styles.iter().map(|s| s.dash).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Slot used by the series at `index`: `index mod len()`.
    #[inline]
    pub fn slot_for(&self, index: usize) -> usize {
        index % self.len()
    }

    pub fn color_for(&self, index: usize) -> Rgb {
        self.colors[self.slot_for(index)]
    }

    pub fn width_for(&self, index: usize) -> f64 {
        self.widths[self.slot_for(index)]
    }

    pub fn dash_for(&self, index: usize) -> DashStyle {
        self.dashes[self.slot_for(index)]
    }

    pub fn style_for(&self, index: usize) -> LineStyle {
        LineStyle::new(self.color_for(index), self.width_for(index), self.dash_for(index))
    }

    pub fn set_color(&mut self, index: usize, color: Rgb) {
        let slot = self.slot_for(index);
        self.colors[slot] = color;
    }

    pub fn set_width(&mut self, index: usize, width: f64) {
        let slot = self.slot_for(index);
        self.widths[slot] = width;
    }

    pub fn set_dash(&mut self, index: usize, dash: DashStyle) {
        let slot = self.slot_for(index);
        self.dashes[slot] = dash;
    }

    pub fn set_style(&mut self, index: usize, style: LineStyle) {
        self.set_color(index, style.color);
        self.set_width(index, style.width);
        self.set_dash(index, style.dash);
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            widths: DEFAULT_WIDTHS.to_vec(),
            dashes: DEFAULT_DASHES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_wrap_around() {
        let p = StylePalette::default();
        assert_eq!(p.len(), 12);
        assert_eq!(p.color_for(13), p.color_for(1));
        assert_eq!(p.dash_for(6), DashStyle::Dash);
        assert_eq!(p.width_for(27), 4.0);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            StylePalette::new(vec![], vec![], vec![]),
            Err(ChartError::Configuration(_))
        ));
        assert!(matches!(
            StylePalette::new(vec![Rgb::new(0.0, 0.0, 0.0)], vec![1.0, 2.0], vec![DashStyle::Dot]),
            Err(ChartError::Configuration(_))
        ));
    }

    #[test]
    fn from_styles_splits_into_slots() {
        let styles = [
            LineStyle::new(Rgb::new(1.0, 0.0, 0.0), 2.0, DashStyle::Dot),
            LineStyle::new(Rgb::new(0.0, 0.0, 1.0), 3.0, DashStyle::Dash),
        ];
        let p = StylePalette::from_styles(&styles).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.style_for(3), styles[1]);
        assert!(StylePalette::from_styles(&[]).is_err());
    }
}
