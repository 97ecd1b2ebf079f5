//! Flex container configuration.

use crate::errors::{check_size, DescriptorError};
use crate::types::{AlignContent, AlignItems, FlexDirection, FlexWrap, Insets, JustifyContent};

/// Configuration of a flex container for one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Container {
    /// Width of the container box
    pub width: f64,
    /// Height of the container box
    pub height: f64,
    /// Padding inside the container box
    pub padding: Insets,
    /// Main axis and its direction
    pub flex_direction: FlexDirection,
    /// Line breaking mode
    pub flex_wrap: FlexWrap,
    /// Main-axis distribution within a line
    pub justify_content: JustifyContent,
    /// Default cross-axis alignment of items
    pub align_items: AlignItems,
    /// Cross-axis distribution of lines
    pub align_content: AlignContent,
    /// Fixed spacing between adjacent items in a line
    pub main_gap: f64,
    /// Fixed spacing between adjacent lines
    pub cross_gap: f64,
    /// Maximum number of lines; surplus items join the last line
    pub max_lines: Option<usize>,
}

impl Container {
    /// Create a row container with the given box size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a row container.
    pub fn row(width: f64, height: f64) -> Self {
        Self::new(width, height)
    }

    /// Create a column container.
    pub fn column(width: f64, height: f64) -> Self {
        Self::new(width, height).with_direction(FlexDirection::Column)
    }

    /// Set the flex direction.
    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = direction;
        self
    }

    /// Set the wrapping mode.
    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.flex_wrap = wrap;
        self
    }

    /// Set main-axis distribution.
    pub fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    /// Set default cross-axis item alignment.
    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    /// Set cross-axis line distribution.
    pub fn with_align_content(mut self, align: AlignContent) -> Self {
        self.align_content = align;
        self
    }

    /// Set uniform padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Insets::uniform(padding);
        self
    }

    /// Set padding per edge.
    pub fn with_insets(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the item and line gaps.
    pub fn with_gaps(mut self, main_gap: f64, cross_gap: f64) -> Self {
        self.main_gap = main_gap;
        self.cross_gap = cross_gap;
        self
    }

    /// Limit the number of flex lines.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Content-box size along the main axis.
    pub fn main_size(&self) -> f64 {
        let size = if self.flex_direction.is_row() {
            self.width - self.padding.horizontal()
        } else {
            self.height - self.padding.vertical()
        };
        non_negative(size)
    }

    /// Content-box size along the cross axis.
    pub fn cross_size(&self) -> f64 {
        let size = if self.flex_direction.is_row() {
            self.height - self.padding.vertical()
        } else {
            self.width - self.padding.horizontal()
        };
        non_negative(size)
    }

    /// Check the configuration for logic errors.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        check_size("width", self.width)?;
        check_size("height", self.height)?;
        self.padding.validate("padding")?;
        check_size("main gap", self.main_gap)?;
        check_size("cross gap", self.cross_gap)?;
        if self.max_lines == Some(0) {
            return Err(DescriptorError::ZeroMaxLines);
        }
        Ok(())
    }

    /// Validate and return the configuration.
    pub fn validated(self) -> Result<Self, DescriptorError> {
        self.validate()?;
        Ok(self)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
