//! Error types for flex descriptors.
//!
//! Layout itself never fails. These errors report configuration mistakes
//! when a descriptor is validated at construction time.

use thiserror::Error;

/// A descriptor field that failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    #[error("Invalid {field}: {value} (must be finite and non-negative)")]
    InvalidSize { field: &'static str, value: f64 },

    #[error("Invalid {field} factor: {value} (must be finite and non-negative)")]
    InvalidFlexFactor { field: &'static str, value: f64 },

    #[error("Flex basis percent {value} out of range (expected -1 or 0..=100)")]
    FlexBasisOutOfRange { value: f64 },

    #[error("Minimum {axis} size {min} exceeds maximum {max}")]
    MinExceedsMax { axis: &'static str, min: f64, max: f64 },

    #[error("max_lines must be at least 1")]
    ZeroMaxLines,
}

/// Check that a size is finite and non-negative.
pub(crate) fn check_size(field: &'static str, value: f64) -> Result<(), DescriptorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DescriptorError::InvalidSize { field, value })
    }
}

/// Check an optional `[min, max]` pair for both sizes and ordering.
pub(crate) fn check_bounds(
    axis: &'static str,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<(), DescriptorError> {
    if let Some(min) = min {
        check_size("minimum size", min)?;
    }
    if let Some(max) = max {
        // An unbounded maximum is spelled `None`, but infinity is harmless.
        if max.is_nan() || max < 0.0 {
            return Err(DescriptorError::InvalidSize { field: "maximum size", value: max });
        }
    }
    match (min, max) {
        (Some(min), Some(max)) if min > max => {
            Err(DescriptorError::MinExceedsMax { axis, min, max })
        }
        _ => Ok(()),
    }
}
