//! Manual ordering of list records
//!
//! Positions are only compared with each other. Gaps and duplicates are
//! allowed; equal positions keep their array order because every sort here
//! is stable. [`reorder`] is the only operation that renumbers.

/// A record that carries an identity and a user-controlled position
pub trait Positioned: Clone {
    /// Identity used to find the record
    fn record_id(&self) -> &str;

    /// Current position
    fn position(&self) -> i64;

    /// Overwrite the position
    fn set_position(&mut self, position: i64);
}

/// Position for a record appended to `items`
pub fn next_position<T: Positioned>(items: &[T]) -> i64 {
    items
        .iter()
        .map(Positioned::position)
        .max()
        .map_or(0, |max| max + 1)
}

/// Records in display order
pub fn sorted_by_position<T: Positioned>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(Positioned::position);
    sorted
}

/// Move `dragged_id` to `target_index` within the position-sorted view
///
/// Every record is renumbered to its new index, so positions come out as
/// `0..n`. A `target_index` past the end moves the record to the end. An
/// unknown `dragged_id` returns the items unchanged.
pub fn reorder<T: Positioned>(items: &[T], dragged_id: &str, target_index: usize) -> Vec<T> {
    let mut sorted = sorted_by_position(items);

    let Some(from) = sorted.iter().position(|item| item.record_id() == dragged_id) else {
        return items.to_vec();
    };

    let dragged = sorted.remove(from);
    let target = target_index.min(sorted.len());
    sorted.insert(target, dragged);

    for (index, item) in sorted.iter_mut().enumerate() {
        item.set_position(index as i64);
    }

    sorted
}
