//! Flex grow and shrink distribution along the main axis.
//!
//! Free space is shared among unfrozen items by weight. An item whose share
//! would break its min/max clamp is frozen at the clamp and the pass is
//! repeated with the remaining space and items. Each repeat freezes at least
//! one item, so the loop runs at most once per item plus one.

use log::trace;

use crate::slot::FlexSlot;

/// Resolve main sizes of one line's slots given its free space.
///
/// `free_space` is the content main size minus the line's outer base size.
/// Returns true when a grow or shrink distribution took place.
pub(crate) fn resolve_flexible_lengths(slots: &mut [FlexSlot], free_space: f64, epsilon: f64) -> bool {
    for slot in slots.iter_mut() {
        slot.main = slot.base;
    }

    let growing = free_space > epsilon;
    let shrinking = free_space < -epsilon;
    if !growing && !shrinking {
        return false;
    }

    let weight = |slot: &FlexSlot| {
        if growing {
            slot.grow
        } else {
            slot.shrink * slot.base
        }
    };

    let mut frozen: Vec<bool> = slots.iter().map(|slot| weight(slot) <= 0.0).collect();
    if frozen.iter().all(|&f| f) {
        return false;
    }

    for _ in 0..=slots.len() {
        let frozen_delta: f64 = slots
            .iter()
            .zip(&frozen)
            .filter(|(_, f)| **f)
            .map(|(slot, _)| slot.main - slot.base)
            .sum();
        let remaining = free_space - frozen_delta;
        let total_weight: f64 = slots
            .iter()
            .zip(&frozen)
            .filter(|(_, f)| !**f)
            .map(|(slot, _)| weight(slot))
            .sum();
        if total_weight <= 0.0 {
            break;
        }

        let mut violated = false;
        for (slot, is_frozen) in slots.iter_mut().zip(frozen.iter_mut()) {
            if *is_frozen {
                continue;
            }
            let target = slot.base + remaining * weight(&*slot) / total_weight;
            let clamped = slot.clamp_main(target);
            slot.main = clamped;
            if (clamped - target).abs() > epsilon {
                trace!("[FLEX] item {} frozen at {clamped:.3} (wanted {target:.3})", slot.index);
                *is_frozen = true;
                violated = true;
            }
        }

        if !violated {
            break;
        }
    }
    true
}
