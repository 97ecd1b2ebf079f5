//! Enumerated flex properties and box insets.

use crate::errors::{check_size, DescriptorError};

/// Main axis of a flex container and its traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlexDirection {
    /// Horizontal, left to right
    #[default]
    Row,
    /// Horizontal, right to left
    RowReverse,
    /// Vertical, top to bottom
    Column,
    /// Vertical, bottom to top
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis is horizontal.
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether items run against the physical axis direction.
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Whether items may overflow onto additional flex lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlexWrap {
    /// Single line, items may overflow
    #[default]
    NoWrap,
    /// Lines stack from the cross-start edge
    Wrap,
    /// Lines stack from the cross-end edge
    WrapReverse,
}

impl FlexWrap {
    /// Whether line breaking is enabled.
    pub fn is_wrapping(self) -> bool {
        !matches!(self, Self::NoWrap)
    }

    /// Whether the cross axis runs against its physical direction.
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::WrapReverse)
    }
}

/// Distribution of items along the main axis of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JustifyContent {
    /// Pack items at the line start
    #[default]
    FlexStart,
    /// Pack items at the line end
    FlexEnd,
    /// Center the packed items
    Center,
    /// Equal gaps between items, none at the ends
    SpaceBetween,
    /// Equal gaps between items, half gaps at the ends
    SpaceAround,
    /// Equal gaps between items and at both ends
    SpaceEvenly,
}

/// Default cross-axis alignment of items within their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    #[default]
    Stretch,
}

/// Per-item override of the container's [`AlignItems`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlignSelf {
    /// Inherit the container's `align_items`
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

impl AlignSelf {
    /// Resolve the effective alignment against the container default.
    pub fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

/// Distribution of flex lines along the cross axis of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    /// Divide leftover cross space equally among lines
    #[default]
    Stretch,
}

/// Insets on all four sides of a box (padding or margin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Zero insets.
    pub const ZERO: Insets = Insets { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create uniform insets.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric insets.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Insets at the main-start and main-end edges for a direction.
    pub fn main_edges(&self, direction: FlexDirection) -> (f64, f64) {
        match direction {
            FlexDirection::Row => (self.left, self.right),
            FlexDirection::RowReverse => (self.right, self.left),
            FlexDirection::Column => (self.top, self.bottom),
            FlexDirection::ColumnReverse => (self.bottom, self.top),
        }
    }

    /// Insets at the cross-start and cross-end edges.
    pub fn cross_edges(&self, direction: FlexDirection, wrap: FlexWrap) -> (f64, f64) {
        match (direction.is_row(), wrap.is_reverse()) {
            (true, false) => (self.top, self.bottom),
            (true, true) => (self.bottom, self.top),
            (false, false) => (self.left, self.right),
            (false, true) => (self.right, self.left),
        }
    }

    pub(crate) fn validate(&self, field: &'static str) -> Result<(), DescriptorError> {
        for value in [self.top, self.right, self.bottom, self.left] {
            check_size(field, value)?;
        }
        Ok(())
    }
}
