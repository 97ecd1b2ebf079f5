//! Cross-axis sizing of lines and alignment of items within them.

use flexline_core::{AlignContent, AlignItems, FlexWrap};
use log::debug;

use crate::lines::FlexLine;
use crate::options::LayoutOptions;
use crate::slot::FlexSlot;
use crate::spacing::{distribute, offsets, Placement};

/// Set a line's cross size and shared baseline from its items.
///
/// Baseline-aligned items contribute the tallest ascent plus the deepest
/// descent; every other item contributes its outer cross size.
pub(crate) fn measure_line(line: &mut FlexLine, slots: &[FlexSlot]) {
    let mut cross: f64 = 0.0;
    let mut ascent: Option<f64> = None;
    let mut descent: f64 = 0.0;

    for slot in &slots[line.range.clone()] {
        match (slot.align, slot.baseline) {
            (AlignItems::Baseline, Some(baseline)) => {
                let above = slot.cross_lead + baseline;
                ascent = Some(ascent.map_or(above, |a| a.max(above)));
                descent = descent.max(slot.cross - baseline + slot.cross_trail);
            }
            _ => cross = cross.max(slot.outer_cross()),
        }
    }

    if let Some(ascent) = ascent {
        cross = cross.max(ascent + descent);
    }
    line.cross_size = cross;
    line.baseline = ascent;
}

/// Inputs for positioning lines along the cross axis.
pub(crate) struct CrossContext {
    pub container_cross: f64,
    pub cross_gap: f64,
    pub wrap: FlexWrap,
    pub align_content: AlignContent,
}

/// Resolve final line cross sizes and their offsets in the content box.
///
/// A single-line (non-wrapping) container always gives its line the full
/// container cross size.
pub(crate) fn place_lines(lines: &mut [FlexLine], ctx: &CrossContext, options: &LayoutOptions) {
    if lines.is_empty() {
        return;
    }

    if !ctx.wrap.is_wrapping() {
        for line in lines.iter_mut() {
            line.cross_size = ctx.container_cross;
            line.cross_offset = 0.0;
        }
        return;
    }

    let count = lines.len();
    let gaps = ctx.cross_gap * (count - 1) as f64;
    let used = lines.iter().map(|line| line.cross_size).sum::<f64>() + gaps;
    let mut free = ctx.container_cross - used;
    debug!(
        "[FLEX-CROSS] align_content={:?} container_cross={:.3} lines_total={used:.3} lines={count}",
        ctx.align_content, ctx.container_cross
    );

    if ctx.align_content == AlignContent::Stretch && free > 0.0 {
        let mut shares = vec![free / count as f64; count];
        options.apportion(&mut shares);
        for (line, share) in lines.iter_mut().zip(&shares) {
            line.cross_size += share;
        }
        debug!("[FLEX-CROSS] stretch: free={free:.3} per_line={:.3}", free / count as f64);
        free = 0.0;
    }

    let spacing = distribute(Placement::from(ctx.align_content), free, count);
    let before = offsets(spacing, count, ctx.cross_gap, options);
    let mut cursor = 0.0;
    for (line, offset) in lines.iter_mut().zip(before) {
        cursor += offset;
        line.cross_offset = cursor;
        cursor += line.cross_size;
    }
}

/// Resolve each item's cross size and logical cross position within its line.
pub(crate) fn align_items(line: &FlexLine, slots: &mut [FlexSlot], options: &LayoutOptions) {
    for slot in &mut slots[line.range.clone()] {
        let available = (line.cross_size - slot.cross_lead - slot.cross_trail).max(0.0);

        let offset = match slot.align {
            AlignItems::Stretch => {
                slot.cross = slot.clamp_cross(available);
                slot.cross_lead
            }
            AlignItems::FlexStart => slot.cross_lead,
            AlignItems::FlexEnd => line.cross_size - slot.cross_trail - slot.cross,
            AlignItems::Center => slot.cross_lead + options.floor((available - slot.cross) / 2.0),
            AlignItems::Baseline => match (line.baseline, slot.baseline) {
                (Some(shared), Some(own)) => shared - own,
                _ => slot.cross_lead,
            },
        };
        slot.cross_pos = line.cross_offset + offset;
    }
}
