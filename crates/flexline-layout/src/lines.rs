//! Line breaking for multi-line flex containers.

use std::ops::Range;

use flexline_core::FlexWrap;
use log::trace;

use crate::slot::FlexSlot;

/// A run of items laid out together along the main axis.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlexLine {
    /// Original indices of the line's items, in display order
    pub items: Vec<usize>,
    /// Sum of base main sizes, main margins and main gaps
    pub main_size: f64,
    /// Sum of the items' grow factors
    pub total_flex_grow: f64,
    /// Sum of the items' shrink factors
    pub total_flex_shrink: f64,
    /// Cross size of the line after alignment
    pub cross_size: f64,
    /// Offset of the line from the cross-start edge of the content box
    pub cross_offset: f64,
    /// Shared baseline of baseline-aligned items, from the line's cross start
    pub baseline: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) range: Range<usize>,
}

impl FlexLine {
    fn from_slots(range: Range<usize>, slots: &[FlexSlot], main_gap: f64) -> Self {
        let members = &slots[range.clone()];
        let gaps = main_gap * members.len().saturating_sub(1) as f64;
        Self {
            items: members.iter().map(|slot| slot.index).collect(),
            main_size: members.iter().map(FlexSlot::outer_base).sum::<f64>() + gaps,
            total_flex_grow: members.iter().map(|slot| slot.grow).sum(),
            total_flex_shrink: members.iter().map(|slot| slot.shrink).sum(),
            range,
            ..Default::default()
        }
    }

    /// Number of items in the line.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the line has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Break ordered slots into lines.
///
/// A line always accepts its first item, so every call makes progress.
/// Once `max_lines` is reached the remaining items join the last line.
pub(crate) fn break_lines(
    slots: &[FlexSlot],
    main_size: f64,
    main_gap: f64,
    wrap: FlexWrap,
    max_lines: Option<usize>,
    epsilon: f64,
) -> Vec<FlexLine> {
    let mut lines = Vec::new();
    if slots.is_empty() {
        return lines;
    }

    let mut start = 0;
    let mut cursor = 0.0;
    for (idx, slot) in slots.iter().enumerate() {
        let outer = slot.outer_base();
        if idx == start {
            cursor = outer;
            continue;
        }

        let next = cursor + main_gap + outer;
        let capped = max_lines.is_some_and(|max| lines.len() + 1 >= max);
        let overflows = next > main_size + epsilon;
        if wrap.is_wrapping() && !capped && (slot.wrap_before || overflows) {
            trace!("[FLEX-LINES] break before item {} at cursor={cursor:.3}", slot.index);
            lines.push(FlexLine::from_slots(start..idx, slots, main_gap));
            start = idx;
            cursor = outer;
        } else {
            cursor = next;
        }
    }
    lines.push(FlexLine::from_slots(start..slots.len(), slots, main_gap));
    lines
}
