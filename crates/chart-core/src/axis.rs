// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

/// Which of the two chart axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y,
}

/// Visible range of one axis. `min <= max` is expected but not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn bounds(&self) -> AxisBounds {
        AxisBounds::new(self.min, self.max)
    }

    pub fn set_bounds(&mut self, b: AxisBounds) {
        self.min = b.min;
        self.max = b.max;
    }
}
