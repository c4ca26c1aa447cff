// File: crates/chart-core/src/types.rs
// Summary: Shared value types (colors, dash styles, line styles) and constants.

use std::fmt;

/// Title and column name used when none is supplied.
pub const DEFAULT_NAME: &str = "N/A";

/// Returns `name` unless it is blank, in which case [`DEFAULT_NAME`].
pub fn name_or_default(name: &str) -> String {
    if name.trim().is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// RGB color with float channels.
/// Contract: each channel lies in `[0, 1]` when built through [`Rgb::try_new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Checked constructor for values coming from a color picker.
    pub fn try_new(r: f64, g: f64, b: f64) -> Option<Self> {
        let ok = |c: f64| (0.0..=1.0).contains(&c);
        (ok(r) && ok(g) && ok(b)).then_some(Self { r, g, b })
    }

    /// Channels scaled to 0..=255, rounding to nearest.
    pub fn to_u8(&self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

/// Stroke pattern of a plotted line. The discriminant is the integer code (1..=6)
/// exchanged with option editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DashStyle {
    Solid = 1,
    Dash = 2,
    Dot = 3,
    DashDot = 4,
    DashDotDot = 5,
    DenseDot = 6,
}

impl DashStyle {
    pub const ALL: [DashStyle; 6] = [
        DashStyle::Solid,
        DashStyle::Dash,
        DashStyle::Dot,
        DashStyle::DashDot,
        DashStyle::DashDotDot,
        DashStyle::DenseDot,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            DashStyle::Solid => "SOLID",
            DashStyle::Dash => "DASH",
            DashStyle::Dot => "DOT",
            DashStyle::DashDot => "DASH_DOT",
            DashStyle::DashDotDot => "DASH_DOT_DOT",
            DashStyle::DenseDot => "DENSE_DOT",
        }
    }
}

impl fmt::Display for DashStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cosmetics of one plotted line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f64,
    pub dash: DashStyle,
}

impl LineStyle {
    pub const fn new(color: Rgb, width: f64, dash: DashStyle) -> Self {
        Self { color, width, dash }
    }
}
