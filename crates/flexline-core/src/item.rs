//! Flex item descriptors.

use crate::errors::{check_bounds, check_size, DescriptorError};
use crate::types::{AlignSelf, Insets};

/// Sentinel for an unset [`FlexItem::flex_basis_percent`].
pub const FLEX_BASIS_PERCENT_UNSET: f64 = -1.0;

/// One arrangeable child of a flex container.
///
/// Sizes are expressed along the container's axes: `measured_main_size` is
/// the width for row directions and the height for column directions.
/// Descriptors are immutable inputs to a layout pass; stretched and flexed
/// sizes come back as frames, never as mutations of the descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlexItem {
    /// Ordering key, sorted stably before line breaking
    pub order: i32,
    /// Share of positive free space claimed on the main axis
    pub flex_grow: f64,
    /// Share of negative free space absorbed on the main axis
    pub flex_shrink: f64,
    /// Main size as a percentage of the container, or -1 when unset
    pub flex_basis_percent: f64,
    /// Cross-axis alignment override
    pub align_self: AlignSelf,
    /// Lower clamp on the resolved main size
    pub min_main_size: Option<f64>,
    /// Upper clamp on the resolved main size
    pub max_main_size: Option<f64>,
    /// Lower clamp on the cross size
    pub min_cross_size: Option<f64>,
    /// Upper clamp on the cross size (limits stretching)
    pub max_cross_size: Option<f64>,
    /// Intrinsic main size from the caller's content measurement
    pub measured_main_size: f64,
    /// Intrinsic cross size from the caller's content measurement
    pub measured_cross_size: f64,
    /// Outer margins in physical edges
    pub margin: Insets,
    /// Distance from the top edge to the first baseline
    pub baseline: Option<f64>,
    /// Force this item to begin a new flex line
    pub wrap_before: bool,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self {
            order: 0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis_percent: FLEX_BASIS_PERCENT_UNSET,
            align_self: AlignSelf::Auto,
            min_main_size: None,
            max_main_size: None,
            min_cross_size: None,
            max_cross_size: None,
            measured_main_size: 0.0,
            measured_cross_size: 0.0,
            margin: Insets::ZERO,
            baseline: None,
            wrap_before: false,
        }
    }
}

impl FlexItem {
    /// Create an item with the given intrinsic main and cross sizes.
    pub fn new(measured_main_size: f64, measured_cross_size: f64) -> Self {
        Self {
            measured_main_size,
            measured_cross_size,
            ..Default::default()
        }
    }

    /// Set the ordering key.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set the grow factor.
    pub fn with_flex_grow(mut self, flex_grow: f64) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    /// Set the shrink factor.
    pub fn with_flex_shrink(mut self, flex_shrink: f64) -> Self {
        self.flex_shrink = flex_shrink;
        self
    }

    /// Set the flex basis as a percentage of the container's main size.
    pub fn with_flex_basis_percent(mut self, percent: f64) -> Self {
        self.flex_basis_percent = percent;
        self
    }

    /// Set the cross-axis alignment override.
    pub fn with_align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = align_self;
        self
    }

    /// Set the minimum main size.
    pub fn with_min_main_size(mut self, size: f64) -> Self {
        self.min_main_size = Some(size);
        self
    }

    /// Set the maximum main size.
    pub fn with_max_main_size(mut self, size: f64) -> Self {
        self.max_main_size = Some(size);
        self
    }

    /// Set the minimum cross size.
    pub fn with_min_cross_size(mut self, size: f64) -> Self {
        self.min_cross_size = Some(size);
        self
    }

    /// Set the maximum cross size.
    pub fn with_max_cross_size(mut self, size: f64) -> Self {
        self.max_cross_size = Some(size);
        self
    }

    /// Set the outer margins.
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Set the first-baseline offset.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Force a line break before this item.
    pub fn with_wrap_before(mut self, wrap_before: bool) -> Self {
        self.wrap_before = wrap_before;
        self
    }

    /// Whether a percentage flex basis is set.
    pub fn has_flex_basis(&self) -> bool {
        self.flex_basis_percent >= 0.0
    }

    /// Check the descriptor for configuration errors.
    ///
    /// The layout engine normalizes invalid values on its own; this is for
    /// callers who want mistakes reported where the descriptor is built.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        for (field, value) in [("grow", self.flex_grow), ("shrink", self.flex_shrink)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DescriptorError::InvalidFlexFactor { field, value });
            }
        }

        let basis = self.flex_basis_percent;
        if basis != FLEX_BASIS_PERCENT_UNSET && !(0.0..=100.0).contains(&basis) {
            return Err(DescriptorError::FlexBasisOutOfRange { value: basis });
        }

        check_size("measured main size", self.measured_main_size)?;
        check_size("measured cross size", self.measured_cross_size)?;
        check_bounds("main", self.min_main_size, self.max_main_size)?;
        check_bounds("cross", self.min_cross_size, self.max_cross_size)?;
        self.margin.validate("margin")?;

        if let Some(baseline) = self.baseline {
            check_size("baseline", baseline)?;
        }
        Ok(())
    }

    /// Validate and return the descriptor.
    pub fn validated(self) -> Result<Self, DescriptorError> {
        self.validate()?;
        Ok(self)
    }
}
