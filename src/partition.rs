use log::trace;

use crate::linked_list::ListNode;

/// Stable two-way partition of `head` around `pivot`.
///
/// Nodes with `val < pivot` come first, followed by the rest; both groups keep
/// their input order. Existing nodes are relinked in one pass; nothing is
/// allocated or freed.
pub fn partition(mut head: Option<Box<ListNode>>, pivot: i32) -> Option<Box<ListNode>> {
    let mut low: Option<Box<ListNode>> = None;
    let mut high: Option<Box<ListNode>> = None;
    let mut low_tail = &mut low;
    let mut high_tail = &mut high;
    let (mut low_count, mut high_count) = (0usize, 0usize);

    while let Some(mut current) = head {
        // detaching leaves the node terminated
        head = current.next.take();

        if current.val < pivot {
            low_tail = &mut low_tail.insert(current).next;
            low_count += 1;
        } else {
            high_tail = &mut high_tail.insert(current).next;
            high_count += 1;
        }
    }

    // an empty low chain's tail is `low` itself
    *low_tail = high;

    trace!(
        "partitioned around pivot {}: {} low, {} high",
        pivot, low_count, high_count
    );

    low
}
