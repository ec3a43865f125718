//! Curve configuration and display toggles.

use crate::error::ConfigError;

pub const DEFAULT_ORDER: usize = 3;
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Validated sampling parameters: spline order `p >= 1` and sample count `N >= 2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CurveSettings {
    order: usize,
    sample_count: usize,
}

impl CurveSettings {
    pub fn new(order: usize, sample_count: usize) -> Result<Self, ConfigError> {
        if order == 0 {
            return Err(ConfigError::InvalidOrder(order));
        }
        if sample_count < 2 {
            return Err(ConfigError::InvalidSampleCount(sample_count));
        }
        Ok(CurveSettings {
            order,
            sample_count,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Copy with a different order, validated like `new`.
    pub fn with_order(self, order: usize) -> Result<Self, ConfigError> {
        CurveSettings::new(order, self.sample_count)
    }

    /// Copy with a different sample count, validated like `new`.
    pub fn with_sample_count(self, sample_count: usize) -> Result<Self, ConfigError> {
        CurveSettings::new(self.order, sample_count)
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings {
            order: DEFAULT_ORDER,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// What the renderer should draw. Only `show_curve` has an effect on the
/// core: the curve is sampled only while it is shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_control_points: bool,
    pub show_control_polygon: bool,
    pub show_curve: bool,
    /// Draw the sampled curve as individual points
    pub curve_as_points: bool,
    /// Draw the sampled curve as a connected line strip
    pub curve_as_line: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_control_points: true,
            show_control_polygon: false,
            show_curve: false,
            curve_as_points: true,
            curve_as_line: false,
        }
    }
}
