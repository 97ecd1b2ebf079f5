//! The flex layout pass: ordering, line breaking, main-axis resolution,
//! cross-axis resolution and frame emission.
//!
//! All intermediate work happens in logical coordinates, where the main axis
//! always runs from main-start and lines always stack from cross-start.
//! Reversed directions are applied only when frames are emitted, by
//! mirroring within the container's content box.

use flexline_core::{Container, FlexItem};
use log::{debug, trace};

use crate::cross::{align_items, measure_line, place_lines, CrossContext};
use crate::flex::resolve_flexible_lengths;
use crate::geometry::Bounds;
use crate::lines::{break_lines, FlexLine};
use crate::options::{LayoutOptions, Rounding};
use crate::order::display_order;
use crate::slot::{non_negative, FlexSlot};
use crate::spacing::{distribute, offsets, Placement};

/// Output of a layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Flex lines in cross-axis order
    pub lines: Vec<FlexLine>,
    /// Frame of each input item, indexed by original item index
    pub frames: Vec<Bounds>,
    /// Longest resolved line extent along the main axis
    pub content_main_size: f64,
    /// Total extent of the lines along the cross axis
    pub content_cross_size: f64,
}

impl LayoutResult {
    /// Frame of the item at `index` in the caller's input.
    pub fn frame(&self, index: usize) -> Option<Bounds> {
        self.frames.get(index).copied()
    }

    /// Original item indices in display order.
    pub fn visual_order(&self) -> Vec<usize> {
        self.lines.iter().flat_map(|line| line.items.iter().copied()).collect()
    }

    /// Index of the line holding the item at `index`.
    pub fn line_of(&self, index: usize) -> Option<usize> {
        self.lines.iter().position(|line| line.items.contains(&index))
    }

    /// Bounding box of all frames.
    pub fn bounding_box(&self) -> Option<Bounds> {
        let mut frames = self.frames.iter();
        let first = *frames.next()?;
        Some(frames.fold(first, |acc, frame| acc.union(frame)))
    }

    /// Whether the pass laid out no items.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Flex layout engine.
///
/// The engine is stateless apart from its options, so a single instance can
/// serve any number of containers, including from several threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexEngine {
    options: LayoutOptions,
}

impl FlexEngine {
    /// Create an engine with the given options.
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Options used by this engine.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lay out `items` inside `container`.
    ///
    /// Never fails: degenerate input is normalized to a deterministic
    /// result, and `frames` always has one entry per input item.
    pub fn layout(&self, items: &[FlexItem], container: &Container) -> LayoutResult {
        if items.is_empty() {
            return LayoutResult::default();
        }

        let options = &self.options;
        let direction = container.flex_direction;
        let wrap = container.flex_wrap;
        let main_size = options.snap(container.main_size());
        let cross_size = options.snap(container.cross_size());
        let main_gap = options.snap(non_negative(container.main_gap));
        let cross_gap = options.snap(non_negative(container.cross_gap));

        debug!(
            "[FLEX] layout items={} main={main_size:.3} cross={cross_size:.3} direction={direction:?} wrap={wrap:?}",
            items.len()
        );

        let mut slots = self.prepare(items, container);
        let mut lines = break_lines(
            &slots,
            main_size,
            main_gap,
            wrap,
            container.max_lines.filter(|&max| max > 0),
            options.epsilon,
        );

        let justify = Placement::from(container.justify_content);
        let mut content_main: f64 = 0.0;
        for (idx, line) in lines.iter_mut().enumerate() {
            let members = &mut slots[line.range.clone()];
            let free = main_size - line.main_size;
            if resolve_flexible_lengths(members, free, options.epsilon) {
                self.apportion_sizes(members);
            }

            let gaps = main_gap * (members.len() - 1) as f64;
            let used = members.iter().map(FlexSlot::outer_main).sum::<f64>() + gaps;
            let leftover = main_size - used;
            debug!(
                "[FLEX] line {idx} items={} base={:.3} free={free:.3} leftover={leftover:.3}",
                members.len(),
                line.main_size
            );

            let spacing = distribute(justify, leftover, members.len());
            let before = offsets(spacing, members.len(), main_gap, options);
            let mut cursor = 0.0;
            for (slot, offset) in members.iter_mut().zip(before) {
                cursor += offset + slot.main_lead;
                slot.main_pos = cursor;
                cursor += slot.main + slot.main_trail;
            }
            content_main = content_main.max(used);

            measure_line(line, &slots);
        }

        let ctx = CrossContext {
            container_cross: cross_size,
            cross_gap,
            wrap,
            align_content: container.align_content,
        };
        place_lines(&mut lines, &ctx, options);
        for line in &lines {
            align_items(line, &mut slots, options);
        }

        let content_cross = lines.iter().map(|line| line.cross_size).sum::<f64>()
            + cross_gap * (lines.len() - 1) as f64;

        let padding_left = options.snap(non_negative(container.padding.left));
        let padding_top = options.snap(non_negative(container.padding.top));
        let mut frames = vec![Bounds::default(); items.len()];
        for slot in &slots {
            let main_pos = if direction.is_reverse() {
                main_size - slot.main_pos - slot.main
            } else {
                slot.main_pos
            };
            let cross_pos = if wrap.is_reverse() {
                cross_size - slot.cross_pos - slot.cross
            } else {
                slot.cross_pos
            };

            let frame = if direction.is_row() {
                Bounds::new(padding_left + main_pos, padding_top + cross_pos, slot.main, slot.cross)
            } else {
                Bounds::new(padding_left + cross_pos, padding_top + main_pos, slot.cross, slot.main)
            };
            trace!("[FLEX] item {} -> {frame:?}", slot.index);
            frames[slot.index] = frame;
        }

        LayoutResult {
            lines,
            frames,
            content_main_size: content_main,
            content_cross_size: content_cross,
        }
    }

    /// Smallest container box that holds `items` at their base sizes.
    ///
    /// Only forced breaks (`wrap_before`, `max_lines`) split lines here,
    /// since an unconstrained main axis never overflows. Returns
    /// `(width, height)` including padding.
    pub fn intrinsic_size(&self, items: &[FlexItem], container: &Container) -> (f64, f64) {
        let options = &self.options;
        let padding = container.padding;
        let horizontal = options.snap(non_negative(padding.horizontal()));
        let vertical = options.snap(non_negative(padding.vertical()));
        if items.is_empty() {
            return (horizontal, vertical);
        }

        let main_gap = options.snap(non_negative(container.main_gap));
        let cross_gap = options.snap(non_negative(container.cross_gap));
        let slots = self.prepare(items, container);
        let mut lines = break_lines(
            &slots,
            f64::INFINITY,
            main_gap,
            container.flex_wrap,
            container.max_lines.filter(|&max| max > 0),
            options.epsilon,
        );

        let main = lines.iter().map(|line| line.main_size).fold(0.0_f64, f64::max);
        for line in &mut lines {
            measure_line(line, &slots);
        }
        let cross = lines.iter().map(|line| line.cross_size).sum::<f64>()
            + cross_gap * (lines.len() - 1) as f64;

        if container.flex_direction.is_row() {
            (main + horizontal, cross + vertical)
        } else {
            (cross + horizontal, main + vertical)
        }
    }

    /// Order items and normalize them into slots.
    fn prepare(&self, items: &[FlexItem], container: &Container) -> Vec<FlexSlot> {
        display_order(items)
            .into_iter()
            .map(|index| FlexSlot::new(index, &items[index], container, &self.options))
            .collect()
    }

    /// Round flexed sizes to whole pixels when pixel rounding is enabled.
    ///
    /// Only fractional sizes take part; items frozen at a (whole-pixel)
    /// clamp keep their size, so the remainder never pushes them past it.
    fn apportion_sizes(&self, members: &mut [FlexSlot]) {
        if self.options.rounding == Rounding::Exact {
            return;
        }
        let fractional: Vec<usize> = members
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.main.fract() != 0.0)
            .map(|(i, _)| i)
            .collect();
        let mut sizes: Vec<f64> = fractional.iter().map(|&i| members[i].main).collect();
        self.options.apportion(&mut sizes);
        for (&i, size) in fractional.iter().zip(sizes) {
            members[i].main = size;
        }
    }
}

/// Lay out `items` inside `container` with default options.
pub fn layout(items: &[FlexItem], container: &Container) -> LayoutResult {
    FlexEngine::default().layout(items, container)
}

/// Intrinsic container size for `items` with default options.
pub fn intrinsic_size(items: &[FlexItem], container: &Container) -> (f64, f64) {
    FlexEngine::default().intrinsic_size(items, container)
}
