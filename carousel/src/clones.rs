use alloc::vec::Vec;

use crate::key::{CloneId, SlotKey};
use crate::types::Slot;

/// Builds the rendered strip for `count` items: the items in order, followed by clones of the
/// first `illusion_count` items.
///
/// When `count < illusion_count` there are not enough items to loop without visible repeats, so
/// the items are returned unchanged and looping stays inactive.
pub fn build_slots<K>(
    count: usize,
    illusion_count: usize,
    mut get_item_key: impl FnMut(usize) -> K,
    mut next_clone_id: impl FnMut() -> CloneId,
) -> Vec<Slot<K>> {
    let cloning = count >= illusion_count;
    let mut out = Vec::with_capacity(if cloning { count + illusion_count } else { count });
    for i in 0..count {
        out.push(Slot {
            key: SlotKey::Item(get_item_key(i)),
            source_index: i,
        });
    }
    if cloning {
        for i in 0..illusion_count {
            out.push(Slot {
                key: SlotKey::Clone(next_clone_id()),
                source_index: i,
            });
        }
    }
    out
}

/// Slice flavour of [`build_slots`] for hosts that hold the items themselves.
///
/// Real items are keyed by their index; clones borrow the item they copy.
pub fn with_clones<'a, T>(
    items: &'a [T],
    illusion_count: usize,
    next_clone_id: impl FnMut() -> CloneId,
) -> Vec<(SlotKey<usize>, &'a T)> {
    build_slots(items.len(), illusion_count, |i| i, next_clone_id)
        .into_iter()
        .map(|slot| (slot.key, &items[slot.source_index]))
        .collect()
}
