//! Ordering of items by their `order` key.

use flexline_core::FlexItem;

/// Original indices of `items` in display order.
///
/// Stable: items sharing an `order` keep their original relative position.
pub(crate) fn display_order(items: &[FlexItem]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by_key(|&index| items[index].order);
    indices
}
