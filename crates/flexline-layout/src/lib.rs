//! Flex line breaking and space distribution.
//!
//! This crate turns a list of flex item descriptors and a container
//! configuration into flex lines and per-item frames.
//!
//! # Architecture
//!
//! 1. **Ordering**: items are stably sorted by their `order` key
//! 2. **Line breaking**: items are packed into lines along the main axis
//! 3. **Main axis**: free space is distributed by grow/shrink factors, then
//!    items are positioned by `justify_content`
//! 4. **Cross axis**: lines are sized and positioned by `align_content`,
//!    items within them by `align_items`/`align_self`
//!
//! Reversed directions are applied as a final mirroring step, so frames
//! are always expressed in the container's physical coordinate space.
//!
//! # Example
//!
//! ```
//! use flexline_layout::{layout, Container, FlexItem};
//!
//! let container = Container::row(300.0, 100.0);
//! let items = vec![
//!     FlexItem::new(100.0, 40.0).with_flex_grow(1.0),
//!     FlexItem::new(100.0, 40.0).with_flex_grow(1.0),
//! ];
//!
//! let result = layout(&items, &container);
//! assert_eq!(result.frames[1].x, 150.0);
//! assert_eq!(result.frames[1].width, 150.0);
//! ```

mod cross;
mod engine;
mod flex;
mod geometry;
mod lines;
mod options;
mod order;
mod rounding;
mod slot;
mod spacing;

pub use engine::{intrinsic_size, layout, FlexEngine, LayoutResult};
pub use geometry::Bounds;
pub use lines::FlexLine;
pub use options::{LayoutOptions, Rounding};

pub use flexline_core::{
    AlignContent, AlignItems, AlignSelf, Container, DescriptorError, FlexDirection, FlexItem,
    FlexWrap, Insets, JustifyContent, FLEX_BASIS_PERCENT_UNSET,
};
