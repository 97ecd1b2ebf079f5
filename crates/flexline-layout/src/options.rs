//! Layout pass options.

/// How fractional distributions are turned into final geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Keep exact floating-point geometry
    #[default]
    Exact,
    /// Snap inputs to whole pixels; split shares are floored and the
    /// remainder goes one pixel at a time to the trailing recipients
    Pixel,
}

/// Options for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Rounding policy for sizes and gaps
    pub rounding: Rounding,
    /// Tolerance for overflow and clamp comparisons
    pub epsilon: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rounding: Rounding::Exact,
            epsilon: 1e-6,
        }
    }
}

impl LayoutOptions {
    /// Options producing whole-pixel geometry.
    pub fn pixel() -> Self {
        Self {
            rounding: Rounding::Pixel,
            ..Default::default()
        }
    }

    /// Snap an input dimension according to the rounding policy.
    pub(crate) fn snap(&self, value: f64) -> f64 {
        match self.rounding {
            Rounding::Exact => value,
            Rounding::Pixel => value.round(),
        }
    }

    /// Snap a single split share (e.g. a centering offset).
    pub(crate) fn floor(&self, value: f64) -> f64 {
        match self.rounding {
            Rounding::Exact => value,
            Rounding::Pixel => value.floor(),
        }
    }

    /// Apportion a set of shares according to the rounding policy.
    pub(crate) fn apportion(&self, shares: &mut [f64]) {
        if self.rounding == Rounding::Pixel {
            crate::rounding::apportion(shares);
        }
    }
}
